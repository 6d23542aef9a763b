// Finance panel with three modes: compound-interest investment projection,
// amortized loan payment, and return on investment.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::finance::{self, CompoundFrequency, InvestmentSummary, PaymentSummary};
use engine::input;
use shared::utils::{format_money, trim_fixed};

use crate::services::notifier::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Investment,
    Loan,
    Roi,
}

impl Mode {
    const ALL: [Mode; 3] = [Mode::Investment, Mode::Loan, Mode::Roi];

    fn label(&self) -> &'static str {
        match self {
            Mode::Investment => "Investment",
            Mode::Loan => "Loan",
            Mode::Roi => "ROI",
        }
    }
}

#[component]
pub fn FinanceCalculator() -> Element {
    let mut mode = use_signal(|| Mode::Investment);

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "Financial Calculator" }
            div { class: "segmented",
                for m in Mode::ALL {
                    button {
                        key: "{m.label()}",
                        class: if mode() == m { "segment segment-active" } else { "segment" },
                        onclick: move |_| mode.set(m),
                        "{m.label()}"
                    }
                }
            }
            match mode() {
                Mode::Investment => rsx! { InvestmentForm {} },
                Mode::Loan => rsx! { LoanForm {} },
                Mode::Roi => rsx! { RoiForm {} },
            }
        }
    }
}

#[component]
fn InvestmentForm() -> Element {
    let mut principal = use_signal(String::new);
    let mut rate = use_signal(String::new);
    let mut years = use_signal(String::new);
    let mut frequency = use_signal(|| CompoundFrequency::Annual);
    let mut summary = use_signal(|| None::<InvestmentSummary>);
    let mut notifier = use_context::<Notifier>();

    let mut run = move || {
        let parsed = input::parse_field("principal", &principal()).and_then(|p| {
            let r = input::parse_field("interest rate", &rate())?;
            let t = input::parse_field("years", &years())?;
            Ok(finance::compound_interest(p, r, t, frequency()))
        });
        match parsed {
            Ok(value) => summary.set(Some(value)),
            Err(err) => {
                summary.set(None);
                notifier.domain_error(&err);
            }
        }
    };

    rsx! {
        div { class: "two-column",
            div { class: "field",
                label { "Principal ($)" }
                input { r#type: "number", value: "{principal}", oninput: move |evt| principal.set(evt.value()) }
            }
            div { class: "field",
                label { "Annual rate (%)" }
                input { r#type: "number", value: "{rate}", oninput: move |evt| rate.set(evt.value()) }
            }
            div { class: "field",
                label { "Years" }
                input { r#type: "number", value: "{years}", oninput: move |evt| years.set(evt.value()) }
            }
            div { class: "field",
                label { "Compounding" }
                select {
                    value: "{frequency().label()}",
                    onchange: move |evt| {
                        if let Some(f) = CompoundFrequency::ALL.iter().copied().find(|f| f.label() == evt.value()) {
                            frequency.set(f);
                        }
                    },
                    for f in CompoundFrequency::ALL {
                        option { key: "{f.label()}", value: "{f.label()}", "{f.label()}" }
                    }
                }
            }
        }
        div { class: "actions",
            button { class: "button-primary", onclick: move |_| run(), "Calculate" }
        }
        if let Some(summary) = summary() {
            div { class: "result-card",
                div { class: "result-value", "${format_money(summary.future_value)}" }
                div { class: "result-detail", "Interest earned: ${format_money(summary.interest_earned)}" }
            }
        }
    }
}

#[component]
fn LoanForm() -> Element {
    let mut principal = use_signal(String::new);
    let mut rate = use_signal(String::new);
    let mut months = use_signal(String::new);
    let mut summary = use_signal(|| None::<PaymentSummary>);
    let mut notifier = use_context::<Notifier>();

    let mut run = move || {
        let parsed = input::parse_field("loan amount", &principal()).and_then(|p| {
            let r = input::parse_field("interest rate", &rate())?;
            let n = input::parse_field("months", &months())?;
            Ok(finance::amortized_payment(p, r, n))
        });
        match parsed {
            Ok(value) => summary.set(Some(value)),
            Err(err) => {
                summary.set(None);
                notifier.domain_error(&err);
            }
        }
    };

    rsx! {
        div { class: "two-column",
            div { class: "field",
                label { "Loan amount ($)" }
                input { r#type: "number", value: "{principal}", oninput: move |evt| principal.set(evt.value()) }
            }
            div { class: "field",
                label { "Annual rate (%)" }
                input { r#type: "number", value: "{rate}", oninput: move |evt| rate.set(evt.value()) }
            }
            div { class: "field",
                label { "Term (months)" }
                input { r#type: "number", value: "{months}", oninput: move |evt| months.set(evt.value()) }
            }
        }
        div { class: "actions",
            button { class: "button-primary", onclick: move |_| run(), "Calculate" }
        }
        if let Some(summary) = summary() {
            div { class: "result-card",
                div { class: "result-value", "${format_money(summary.monthly_payment)}/mo" }
                div { class: "result-detail",
                    "Total paid: ${format_money(summary.total_payment)} · Interest: ${format_money(summary.total_interest)}"
                }
            }
        }
    }
}

#[component]
fn RoiForm() -> Element {
    let mut cost = use_signal(String::new);
    let mut value = use_signal(String::new);
    let mut result = use_signal(|| None::<f64>);
    let mut notifier = use_context::<Notifier>();

    let mut run = move || {
        let parsed = input::parse_field("initial cost", &cost()).and_then(|c| {
            let v = input::parse_field("final value", &value())?;
            finance::roi(c, v)
        });
        match parsed {
            Ok(pct) => result.set(Some(pct)),
            Err(err) => {
                result.set(None);
                notifier.domain_error(&err);
            }
        }
    };

    rsx! {
        div { class: "two-column",
            div { class: "field",
                label { "Initial cost ($)" }
                input { r#type: "number", value: "{cost}", oninput: move |evt| cost.set(evt.value()) }
            }
            div { class: "field",
                label { "Final value ($)" }
                input { r#type: "number", value: "{value}", oninput: move |evt| value.set(evt.value()) }
            }
        }
        div { class: "actions",
            button { class: "button-primary", onclick: move |_| run(), "Calculate" }
        }
        if let Some(pct) = result() {
            div { class: "result-card",
                div { class: "result-value", "{trim_fixed(pct, 2)}%" }
                div { class: "result-detail",
                    if pct >= 0.0 { "Gain on the initial investment" } else { "Loss on the initial investment" }
                }
            }
        }
    }
}
