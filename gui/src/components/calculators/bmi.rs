// BMI panel: metric or imperial inputs, classified result.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::health::{self, BmiCategory, UnitSystem};
use engine::input;
use shared::utils::trim_fixed;

use crate::services::notifier::Notifier;

#[component]
pub fn BmiCalculator() -> Element {
    let mut system = use_signal(|| UnitSystem::Metric);
    let mut weight = use_signal(String::new);
    let mut height = use_signal(String::new);
    let mut result = use_signal(|| None::<f64>);
    let mut notifier = use_context::<Notifier>();

    let mut run = move || {
        let parsed = input::parse_field("weight", &weight()).and_then(|w| {
            let h = input::parse_field("height", &height())?;
            health::bmi(w, h, system())
        });
        match parsed {
            Ok(value) => result.set(Some(value)),
            Err(err) => {
                result.set(None);
                notifier.domain_error(&err);
            }
        }
    };

    let (weight_label, height_label) = match system() {
        UnitSystem::Metric => ("Weight (kg)", "Height (cm)"),
        UnitSystem::Imperial => ("Weight (lbs)", "Height (in)"),
    };

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "BMI Calculator" }

            div { class: "segmented",
                button {
                    class: if system() == UnitSystem::Metric { "segment segment-active" } else { "segment" },
                    onclick: move |_| { system.set(UnitSystem::Metric); result.set(None); },
                    "Metric"
                }
                button {
                    class: if system() == UnitSystem::Imperial { "segment segment-active" } else { "segment" },
                    onclick: move |_| { system.set(UnitSystem::Imperial); result.set(None); },
                    "Imperial"
                }
            }

            div { class: "two-column",
                div { class: "field",
                    label { "{weight_label}" }
                    input {
                        r#type: "number",
                        value: "{weight}",
                        oninput: move |evt| weight.set(evt.value()),
                    }
                }
                div { class: "field",
                    label { "{height_label}" }
                    input {
                        r#type: "number",
                        value: "{height}",
                        oninput: move |evt| height.set(evt.value()),
                    }
                }
            }

            div { class: "actions",
                button { class: "button-primary", onclick: move |_| run(), "Calculate BMI" }
            }

            if let Some(value) = result() {
                div { class: "result-card",
                    div { class: "result-value", "{trim_fixed(value, 1)}" }
                    div { class: "result-detail", "{BmiCategory::classify(value).label()}" }
                }
            }
        }
    }
}
