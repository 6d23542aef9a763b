// Vedic math panel: four classic shortcut tricks, each with its own small
// form and a worked-result card.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::input::parse_int_field;
use engine::vedic;

use crate::services::notifier::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trick {
    SquareFive,
    TimesEleven,
    TwoDigitSquare,
    Complement,
}

impl Trick {
    const ALL: [Trick; 4] = [
        Trick::SquareFive,
        Trick::TimesEleven,
        Trick::TwoDigitSquare,
        Trick::Complement,
    ];

    fn label(&self) -> &'static str {
        match self {
            Trick::SquareFive => "Square ending in 5",
            Trick::TimesEleven => "Multiply by 11",
            Trick::TwoDigitSquare => "Two-digit square",
            Trick::Complement => "Complement from 10ⁿ",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            Trick::SquareFive => "a·(a+1) with 25 appended: 35² = 3×4 | 25 = 1225",
            Trick::TimesEleven => "Add neighbouring digits: 53 × 11 = 5 (5+3) 3 = 583",
            Trick::TwoDigitSquare => "Work from base 100: 97² = 9409 via (100 − 3)²",
            Trick::Complement => "All from 9, the last from 10: 1000 − 463 = 537",
        }
    }
}

#[component]
pub fn VedicCalculator() -> Element {
    let mut trick = use_signal(|| Trick::SquareFive);
    let mut number = use_signal(String::new);
    let mut result = use_signal(|| None::<String>);
    let mut notifier = use_context::<Notifier>();

    let mut run = move || {
        let outcome = parse_int_field("number", &number()).and_then(|n| match trick() {
            Trick::SquareFive => {
                vedic::square_ending_in_five(n).map(|sq| format!("{}² = {}", n, sq))
            }
            Trick::TimesEleven => vedic::multiply_by_eleven(n)
                .map(|product| format!("{} × 11 = {}", n, product)),
            Trick::TwoDigitSquare => {
                vedic::two_digit_square(n).map(|sq| format!("{}² = {}", n, sq))
            }
            Trick::Complement => {
                let n = u64::try_from(n)
                    .map_err(|_| engine::EngineError::invalid_input("number", n.to_string()))?;
                vedic::complement_from_power_of_ten(n)
                    .map(|c| format!("10^{} − {} = {}", c.exponent, n, c.result))
            }
        });
        match outcome {
            Ok(text) => result.set(Some(text)),
            Err(err) => {
                result.set(None);
                notifier.domain_error(&err);
            }
        }
    };

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "Vedic Math" }

            div { class: "segmented",
                for t in Trick::ALL {
                    button {
                        key: "{t.label()}",
                        class: if trick() == t { "segment segment-active" } else { "segment" },
                        onclick: move |_| { trick.set(t); result.set(None); },
                        "{t.label()}"
                    }
                }
            }

            p { class: "panel-hint", "{trick().hint()}" }

            div { class: "field",
                label { "Number" }
                input { r#type: "number", value: "{number}", oninput: move |evt| number.set(evt.value()) }
            }

            div { class: "actions",
                button { class: "button-primary", onclick: move |_| run(), "Apply trick" }
            }

            if let Some(text) = result() {
                div { class: "result-card",
                    div { class: "result-value", "{text}" }
                }
            }
        }
    }
}
