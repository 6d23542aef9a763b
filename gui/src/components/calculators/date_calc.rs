// Date panel: difference between two dates, and shifting a date by
// day/month/year offsets. Date inputs arrive as YYYY-MM-DD strings.
#![allow(non_snake_case)]
use chrono::NaiveDate;
use dioxus::prelude::*;
use engine::dates::{self, DateDifference};
use engine::error::EngineError;
use shared::models::Severity;

use crate::services::notifier::Notifier;

fn parse_date(field: &'static str, text: &str) -> Result<NaiveDate, EngineError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| EngineError::invalid_input(field, text.trim()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Difference,
    Shift,
}

#[component]
pub fn DateCalculator() -> Element {
    let mut mode = use_signal(|| Mode::Difference);

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "Date Calculator" }
            div { class: "segmented",
                button {
                    class: if mode() == Mode::Difference { "segment segment-active" } else { "segment" },
                    onclick: move |_| mode.set(Mode::Difference),
                    "Difference"
                }
                button {
                    class: if mode() == Mode::Shift { "segment segment-active" } else { "segment" },
                    onclick: move |_| mode.set(Mode::Shift),
                    "Add / Subtract"
                }
            }
            match mode() {
                Mode::Difference => rsx! { DifferenceForm {} },
                Mode::Shift => rsx! { ShiftForm {} },
            }
        }
    }
}

#[component]
fn DifferenceForm() -> Element {
    let mut start = use_signal(String::new);
    let mut end = use_signal(String::new);
    let mut result = use_signal(|| None::<DateDifference>);
    let mut notifier = use_context::<Notifier>();

    let mut run = move || {
        let parsed = parse_date("start date", &start())
            .and_then(|s| Ok(dates::difference(s, parse_date("end date", &end())?)));
        match parsed {
            Ok(diff) => result.set(Some(diff)),
            Err(err) => {
                result.set(None);
                notifier.domain_error(&err);
            }
        }
    };

    rsx! {
        div { class: "two-column",
            div { class: "field",
                label { "Start date" }
                input { r#type: "date", value: "{start}", oninput: move |evt| start.set(evt.value()) }
            }
            div { class: "field",
                label { "End date" }
                input { r#type: "date", value: "{end}", oninput: move |evt| end.set(evt.value()) }
            }
        }
        div { class: "actions",
            button { class: "button-primary", onclick: move |_| run(), "Calculate" }
        }
        if let Some(diff) = result() {
            div { class: "result-card",
                div { class: "result-value", "{diff.days} days" }
                div { class: "result-detail", "{diff.months} whole months · {diff.years} whole years" }
            }
        }
    }
}

#[component]
fn ShiftForm() -> Element {
    let mut base = use_signal(String::new);
    let mut days = use_signal(|| "0".to_string());
    let mut months = use_signal(|| "0".to_string());
    let mut years = use_signal(|| "0".to_string());
    let mut result = use_signal(|| None::<NaiveDate>);
    let mut notifier = use_context::<Notifier>();

    let mut run = move || {
        let parsed = parse_date("base date", &base()).and_then(|date| {
            let d = engine::input::parse_int_field("days", &days())?;
            let m = engine::input::parse_int_field("months", &months())?;
            let y = engine::input::parse_int_field("years", &years())?;
            let m = i32::try_from(m).map_err(|_| EngineError::DateOutOfRange)?;
            let y = i32::try_from(y).map_err(|_| EngineError::DateOutOfRange)?;
            dates::shift(date, d, m, y)
        });
        match parsed {
            Ok(date) => result.set(Some(date)),
            Err(err) => {
                result.set(None);
                match err {
                    EngineError::DateOutOfRange => notifier.notify(
                        "Date out of range",
                        "The shifted date falls outside the supported calendar.",
                        Severity::Warning,
                    ),
                    other => notifier.domain_error(&other),
                }
            }
        }
    };

    rsx! {
        div { class: "field",
            label { "Base date" }
            input { r#type: "date", value: "{base}", oninput: move |evt| base.set(evt.value()) }
        }
        div { class: "two-column",
            div { class: "field",
                label { "Days" }
                input { r#type: "number", value: "{days}", oninput: move |evt| days.set(evt.value()) }
            }
            div { class: "field",
                label { "Months" }
                input { r#type: "number", value: "{months}", oninput: move |evt| months.set(evt.value()) }
            }
            div { class: "field",
                label { "Years" }
                input { r#type: "number", value: "{years}", oninput: move |evt| years.set(evt.value()) }
            }
        }
        div { class: "actions",
            button { class: "button-primary", onclick: move |_| run(), "Shift date" }
        }
        if let Some(date) = result() {
            div { class: "result-card",
                div { class: "result-value", "{date.format(\"%Y-%m-%d\")}" }
                div { class: "result-detail", "{date.format(\"%A, %B %-d, %Y\")}" }
            }
        }
        p { class: "panel-hint", "Negative offsets subtract. Month steps clamp to the end of shorter months." }
    }
}
