// Currency converter over the built-in demo rate table. Converts on demand
// rather than live, so the rate shown always matches the result shown.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::convert::currency::{self, Conversion, MockRates, CURRENCIES};
use engine::input;
use shared::utils::trim_fixed;

use crate::services::notifier::Notifier;

#[component]
pub fn CurrencyConverter() -> Element {
    let mut amount = use_signal(|| "100".to_string());
    let mut from = use_signal(|| "USD".to_string());
    let mut to = use_signal(|| "EUR".to_string());
    let mut outcome = use_signal(|| None::<Conversion>);
    let mut notifier = use_context::<Notifier>();

    let mut run = move || {
        let result = input::parse_field("amount", &amount())
            .and_then(|value| currency::convert(value, &from(), &to(), &MockRates));
        match result {
            Ok(conversion) => outcome.set(Some(conversion)),
            Err(err) => {
                outcome.set(None);
                notifier.domain_error(&err);
            }
        }
    };

    let summary = outcome().map(|conv| {
        let from_sym = currency::currency(&from()).map(|c| c.symbol).unwrap_or("");
        let to_sym = currency::currency(&to()).map(|c| c.symbol).unwrap_or("");
        (
            format!("{}{}", to_sym, trim_fixed(conv.converted, 2)),
            format!(
                "{}{} at rate 1 {} = {} {}",
                from_sym,
                trim_fixed(conv.amount, 2),
                from(),
                trim_fixed(conv.rate, 4),
                to()
            ),
        )
    });

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "Currency Converter" }

            div { class: "field",
                label { "Amount" }
                input {
                    r#type: "number",
                    value: "{amount}",
                    oninput: move |evt| amount.set(evt.value()),
                }
            }

            div { class: "two-column",
                div { class: "field",
                    label { "From" }
                    select {
                        value: "{from}",
                        onchange: move |evt| from.set(evt.value()),
                        for c in CURRENCIES {
                            option { key: "{c.code}", value: "{c.code}", "{c.code} — {c.name}" }
                        }
                    }
                }
                div { class: "field",
                    label { "To" }
                    select {
                        value: "{to}",
                        onchange: move |evt| to.set(evt.value()),
                        for c in CURRENCIES {
                            option { key: "{c.code}", value: "{c.code}", "{c.code} — {c.name}" }
                        }
                    }
                }
            }

            div { class: "actions",
                button { class: "button-primary", onclick: move |_| run(), "Convert" }
                button {
                    class: "button-ghost",
                    onclick: move |_| {
                        let old_from = from();
                        from.set(to());
                        to.set(old_from);
                        outcome.set(None);
                    },
                    "Swap"
                }
            }

            if let Some((converted, detail)) = summary {
                div { class: "result-card",
                    div { class: "result-value", "{converted}" }
                    div { class: "result-detail", "{detail}" }
                }
            }

            p { class: "panel-hint", "Rates are fixed sample data, not live market quotes." }
        }
    }
}
