// Mortgage panel: recomputes live while any field changes, with unparseable
// fields treated as zero.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::finance;
use engine::input::parse_or_zero;
use shared::utils::format_money;

#[component]
pub fn MortgageCalculator() -> Element {
    let mut home_price = use_signal(|| "300000".to_string());
    let mut down_payment = use_signal(|| "60000".to_string());
    let mut years = use_signal(|| "30".to_string());
    let mut rate = use_signal(|| "4.5".to_string());

    let summary = finance::mortgage(
        parse_or_zero(&home_price()),
        parse_or_zero(&down_payment()),
        parse_or_zero(&years()),
        parse_or_zero(&rate()),
    );

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "Mortgage Calculator" }

            div { class: "two-column",
                div { class: "field",
                    label { "Home price ($)" }
                    input { r#type: "number", value: "{home_price}", oninput: move |evt| home_price.set(evt.value()) }
                }
                div { class: "field",
                    label { "Down payment ($)" }
                    input { r#type: "number", value: "{down_payment}", oninput: move |evt| down_payment.set(evt.value()) }
                }
                div { class: "field",
                    label { "Term (years)" }
                    input { r#type: "number", value: "{years}", oninput: move |evt| years.set(evt.value()) }
                }
                div { class: "field",
                    label { "Annual rate (%)" }
                    input { r#type: "number", value: "{rate}", oninput: move |evt| rate.set(evt.value()) }
                }
            }

            div { class: "result-card",
                div { class: "result-value", "${format_money(summary.payment.monthly_payment)}/mo" }
                div { class: "result-detail",
                    "Loan amount: ${format_money(summary.loan_amount.max(0.0))}"
                }
                div { class: "result-detail",
                    "Total paid: ${format_money(summary.payment.total_payment)} · Interest: ${format_money(summary.payment.total_interest)}"
                }
            }
        }
    }
}
