// Tip panel: live recomputation with preset tip percentages and a custom
// override.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::finance;
use engine::input::{parse_or, parse_or_zero};
use shared::utils::format_money;

const PRESETS: [f64; 5] = [10.0, 15.0, 18.0, 20.0, 25.0];

#[component]
pub fn TipCalculator() -> Element {
    let mut bill = use_signal(String::new);
    let mut tip_pct = use_signal(|| "15".to_string());
    let mut people = use_signal(|| "1".to_string());

    let summary = finance::tip(
        parse_or_zero(&bill()),
        parse_or_zero(&tip_pct()),
        parse_or(&people(), 1.0) as i64,
    );

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "Tip Calculator" }

            div { class: "field",
                label { "Bill amount ($)" }
                input { r#type: "number", value: "{bill}", oninput: move |evt| bill.set(evt.value()) }
            }

            div { class: "field",
                label { "Tip percentage" }
                div { class: "segmented",
                    for preset in PRESETS {
                        button {
                            key: "{preset}",
                            class: if parse_or_zero(&tip_pct()) == preset { "segment segment-active" } else { "segment" },
                            onclick: move |_| tip_pct.set(preset.to_string()),
                            "{preset}%"
                        }
                    }
                }
                input { r#type: "number", value: "{tip_pct}", oninput: move |evt| tip_pct.set(evt.value()) }
            }

            div { class: "field",
                label { "Split between" }
                input { r#type: "number", min: "1", value: "{people}", oninput: move |evt| people.set(evt.value()) }
            }

            div { class: "result-card",
                div { class: "result-value", "${format_money(summary.per_person)} each" }
                div { class: "result-detail",
                    "Tip: ${format_money(summary.tip)} · Total: ${format_money(summary.total)}"
                }
            }
        }
    }
}
