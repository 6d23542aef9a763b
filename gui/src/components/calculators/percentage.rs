// Percentage panel: the three everyday percentage questions.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::input::parse_field;
use engine::percentage;
use shared::utils::trim_fixed;

use crate::services::notifier::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Question {
    PercentOf,
    WhatPercent,
    ValueFrom,
}

impl Question {
    const ALL: [Question; 3] = [
        Question::PercentOf,
        Question::WhatPercent,
        Question::ValueFrom,
    ];

    fn label(&self) -> &'static str {
        match self {
            Question::PercentOf => "X% of Y",
            Question::WhatPercent => "X is what % of Y",
            Question::ValueFrom => "X is Y% of what",
        }
    }

    fn field_labels(&self) -> (&'static str, &'static str) {
        match self {
            Question::PercentOf => ("Percent (%)", "Of value"),
            Question::WhatPercent => ("Part", "Whole"),
            Question::ValueFrom => ("Value", "Percent (%)"),
        }
    }
}

#[component]
pub fn PercentageCalculator() -> Element {
    let mut question = use_signal(|| Question::PercentOf);
    let mut first = use_signal(String::new);
    let mut second = use_signal(String::new);
    let mut result = use_signal(|| None::<String>);
    let mut notifier = use_context::<Notifier>();

    let mut run = move || {
        let outcome = parse_field("first value", &first()).and_then(|a| {
            let b = parse_field("second value", &second())?;
            match question() {
                Question::PercentOf => Ok(format!(
                    "{}% of {} = {}",
                    a,
                    b,
                    trim_fixed(percentage::percent_of(a, b), 6)
                )),
                Question::WhatPercent => percentage::what_percent(a, b)
                    .map(|pct| format!("{} is {}% of {}", a, trim_fixed(pct, 4), b)),
                Question::ValueFrom => percentage::value_from_percent(a, b)
                    .map(|whole| format!("{} is {}% of {}", a, b, trim_fixed(whole, 6))),
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

    let (first_label, second_label) = question().field_labels();

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "Percentage Calculator" }

            div { class: "segmented",
                for q in Question::ALL {
                    button {
                        key: "{q.label()}",
                        class: if question() == q { "segment segment-active" } else { "segment" },
                        onclick: move |_| { question.set(q); result.set(None); },
                        "{q.label()}"
                    }
                }
            }

            div { class: "two-column",
                div { class: "field",
                    label { "{first_label}" }
                    input { r#type: "number", value: "{first}", oninput: move |evt| first.set(evt.value()) }
                }
                div { class: "field",
                    label { "{second_label}" }
                    input { r#type: "number", value: "{second}", oninput: move |evt| second.set(evt.value()) }
                }
            }

            div { class: "actions",
                button { class: "button-primary", onclick: move |_| run(), "Calculate" }
            }

            if let Some(text) = result() {
                div { class: "result-card",
                    div { class: "result-value", "{text}" }
                }
            }
        }
    }
}
