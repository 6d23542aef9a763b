// Loan EMI panel: the rupee-denominated sibling of the mortgage panel, with
// the term given in years and live recomputation.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::finance;
use engine::input::parse_or_zero;
use shared::utils::format_money;

#[component]
pub fn LoanEmiCalculator() -> Element {
    let mut principal = use_signal(|| "1000000".to_string());
    let mut rate = use_signal(|| "8.5".to_string());
    let mut years = use_signal(|| "20".to_string());

    let summary = finance::amortized_payment(
        parse_or_zero(&principal()),
        parse_or_zero(&rate()),
        parse_or_zero(&years()) * 12.0,
    );

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "Loan EMI Calculator" }

            div { class: "two-column",
                div { class: "field",
                    label { "Loan amount (₹)" }
                    input { r#type: "number", value: "{principal}", oninput: move |evt| principal.set(evt.value()) }
                }
                div { class: "field",
                    label { "Annual rate (%)" }
                    input { r#type: "number", value: "{rate}", oninput: move |evt| rate.set(evt.value()) }
                }
                div { class: "field",
                    label { "Tenure (years)" }
                    input { r#type: "number", value: "{years}", oninput: move |evt| years.set(evt.value()) }
                }
            }

            div { class: "result-card",
                div { class: "result-value", "₹{format_money(summary.monthly_payment)}/mo" }
                div { class: "result-detail",
                    "Total payable: ₹{format_money(summary.total_payment)} · Interest: ₹{format_money(summary.total_interest)}"
                }
            }
        }
    }
}
