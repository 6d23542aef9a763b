// Unit converter: recomputes on every input or selection change. Blank or
// unparseable input clears the output instead of raising an error.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::convert::units::{self, Category};
use shared::utils::trim_fixed;

fn convert_text(category: Category, from: &str, to: &str, value: &str) -> String {
    let Ok(value) = value.trim().parse::<f64>() else {
        return String::new();
    };
    match units::convert(category, from, to, value) {
        Ok(result) => {
            let decimals = if category == Category::Temperature { 4 } else { 6 };
            trim_fixed(result, decimals)
        }
        Err(err) => {
            tracing::warn!(%err, "Unit conversion failed");
            String::new()
        }
    }
}

#[component]
pub fn UnitConverter() -> Element {
    let mut category = use_signal(|| Category::Length);
    let mut from_unit = use_signal(|| "m".to_string());
    let mut to_unit = use_signal(|| "km".to_string());
    let mut from_value = use_signal(|| "1".to_string());

    let result = convert_text(category(), &from_unit(), &to_unit(), &from_value());
    let unit_options = category().units();

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "Unit Converter" }

            div { class: "field",
                label { "Category" }
                select {
                    value: "{category().name()}",
                    onchange: move |evt| {
                        if let Some(cat) = Category::ALL.iter().copied().find(|c| c.name() == evt.value()) {
                            category.set(cat);
                            // Reset to the category's first two units.
                            from_unit.set(cat.units()[0].id.to_string());
                            to_unit.set(cat.units()[1].id.to_string());
                            from_value.set("1".to_string());
                        }
                    },
                    for cat in Category::ALL {
                        option { key: "{cat.name()}", value: "{cat.name()}", "{cat.name()}" }
                    }
                }
            }

            div { class: "two-column",
                div { class: "card",
                    div { class: "field",
                        label { "From" }
                        input {
                            r#type: "number",
                            value: "{from_value}",
                            oninput: move |evt| from_value.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { "Unit" }
                        select {
                            value: "{from_unit}",
                            onchange: move |evt| from_unit.set(evt.value()),
                            for unit in unit_options {
                                option { key: "{unit.id}", value: "{unit.id}", "{unit.name}" }
                            }
                        }
                    }
                }
                div { class: "card",
                    div { class: "field",
                        label { "To" }
                        input { r#type: "text", readonly: true, value: "{result}" }
                    }
                    div { class: "field",
                        label { "Unit" }
                        select {
                            value: "{to_unit}",
                            onchange: move |evt| to_unit.set(evt.value()),
                            for unit in unit_options {
                                option { key: "{unit.id}", value: "{unit.id}", "{unit.name}" }
                            }
                        }
                    }
                }
            }

            p { class: "panel-hint",
                "Tip: enter a value and pick different units to convert between them."
            }
        }
    }
}
