// Exercise panel with three modes: MET calorie burn, Brzycki one-rep max,
// and the Navy circumference body-fat estimate.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::health::{self, Activity, Gender};
use engine::input;
use shared::utils::trim_fixed;

use crate::services::notifier::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Calories,
    OneRepMax,
    BodyFat,
}

impl Mode {
    const ALL: [Mode; 3] = [Mode::Calories, Mode::OneRepMax, Mode::BodyFat];

    fn label(&self) -> &'static str {
        match self {
            Mode::Calories => "Calories",
            Mode::OneRepMax => "One-Rep Max",
            Mode::BodyFat => "Body Fat",
        }
    }
}

#[component]
pub fn ExerciseCalculator() -> Element {
    let mut mode = use_signal(|| Mode::Calories);

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "Exercise Calculator" }
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
                Mode::Calories => rsx! { CaloriesForm {} },
                Mode::OneRepMax => rsx! { OneRepMaxForm {} },
                Mode::BodyFat => rsx! { BodyFatForm {} },
            }
        }
    }
}

#[component]
fn CaloriesForm() -> Element {
    let mut weight = use_signal(String::new);
    let mut minutes = use_signal(String::new);
    let mut activity = use_signal(|| Activity::Walking);
    let mut result = use_signal(|| None::<f64>);
    let mut notifier = use_context::<Notifier>();

    let mut run = move || {
        let parsed = input::parse_field("weight", &weight()).and_then(|w| {
            let m = input::parse_field("duration", &minutes())?;
            Ok(health::calories_burned(w, m, activity()))
        });
        match parsed {
            Ok(kcal) => result.set(Some(kcal)),
            Err(err) => {
                result.set(None);
                notifier.domain_error(&err);
            }
        }
    };

    rsx! {
        div { class: "two-column",
            div { class: "field",
                label { "Weight (kg)" }
                input { r#type: "number", value: "{weight}", oninput: move |evt| weight.set(evt.value()) }
            }
            div { class: "field",
                label { "Duration (min)" }
                input { r#type: "number", value: "{minutes}", oninput: move |evt| minutes.set(evt.value()) }
            }
            div { class: "field",
                label { "Activity" }
                select {
                    value: "{activity().label()}",
                    onchange: move |evt| {
                        if let Some(a) = Activity::ALL.iter().copied().find(|a| a.label() == evt.value()) {
                            activity.set(a);
                        }
                    },
                    for a in Activity::ALL {
                        option { key: "{a.label()}", value: "{a.label()}", "{a.label()}" }
                    }
                }
            }
        }
        div { class: "actions",
            button { class: "button-primary", onclick: move |_| run(), "Calculate" }
        }
        if let Some(kcal) = result() {
            div { class: "result-card",
                div { class: "result-value", "{trim_fixed(kcal, 0)} kcal" }
                div { class: "result-detail", "{activity().label()} at {activity().met()} MET" }
            }
        }
    }
}

#[component]
fn OneRepMaxForm() -> Element {
    let mut weight = use_signal(String::new);
    let mut reps = use_signal(String::new);
    let mut result = use_signal(|| None::<f64>);
    let mut notifier = use_context::<Notifier>();

    let mut run = move || {
        let parsed = input::parse_field("weight", &weight()).and_then(|w| {
            let r = input::parse_field("repetitions", &reps())?;
            health::one_rep_max(w, r)
        });
        match parsed {
            Ok(max) => result.set(Some(max)),
            Err(err) => {
                result.set(None);
                notifier.domain_error(&err);
            }
        }
    };

    rsx! {
        div { class: "two-column",
            div { class: "field",
                label { "Weight lifted (kg)" }
                input { r#type: "number", value: "{weight}", oninput: move |evt| weight.set(evt.value()) }
            }
            div { class: "field",
                label { "Repetitions" }
                input { r#type: "number", value: "{reps}", oninput: move |evt| reps.set(evt.value()) }
            }
        }
        div { class: "actions",
            button { class: "button-primary", onclick: move |_| run(), "Estimate 1RM" }
        }
        if let Some(max) = result() {
            div { class: "result-card",
                div { class: "result-value", "{trim_fixed(max, 1)} kg" }
                div { class: "result-detail", "Brzycki estimate" }
            }
        }
    }
}

#[component]
fn BodyFatForm() -> Element {
    let mut gender = use_signal(|| Gender::Male);
    let mut height = use_signal(String::new);
    let mut waist = use_signal(String::new);
    let mut neck = use_signal(String::new);
    let mut hip = use_signal(String::new);
    let mut result = use_signal(|| None::<f64>);
    let mut notifier = use_context::<Notifier>();

    let mut run = move || {
        let parsed = input::parse_field("height", &height()).and_then(|h| {
            let w = input::parse_field("waist", &waist())?;
            let n = input::parse_field("neck", &neck())?;
            let hp = match gender() {
                Gender::Male => 0.0,
                Gender::Female => input::parse_field("hip", &hip())?,
            };
            health::body_fat(gender(), h, w, n, hp)
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
        div { class: "segmented",
            button {
                class: if gender() == Gender::Male { "segment segment-active" } else { "segment" },
                onclick: move |_| { gender.set(Gender::Male); result.set(None); },
                "Male"
            }
            button {
                class: if gender() == Gender::Female { "segment segment-active" } else { "segment" },
                onclick: move |_| { gender.set(Gender::Female); result.set(None); },
                "Female"
            }
        }
        div { class: "two-column",
            div { class: "field",
                label { "Height (cm)" }
                input { r#type: "number", value: "{height}", oninput: move |evt| height.set(evt.value()) }
            }
            div { class: "field",
                label { "Waist (cm)" }
                input { r#type: "number", value: "{waist}", oninput: move |evt| waist.set(evt.value()) }
            }
            div { class: "field",
                label { "Neck (cm)" }
                input { r#type: "number", value: "{neck}", oninput: move |evt| neck.set(evt.value()) }
            }
            if gender() == Gender::Female {
                div { class: "field",
                    label { "Hip (cm)" }
                    input { r#type: "number", value: "{hip}", oninput: move |evt| hip.set(evt.value()) }
                }
            }
        }
        div { class: "actions",
            button { class: "button-primary", onclick: move |_| run(), "Estimate" }
        }
        if let Some(pct) = result() {
            div { class: "result-card",
                div { class: "result-value", "{trim_fixed(pct, 1)}%" }
                div { class: "result-detail", "U.S. Navy circumference method" }
            }
        }
    }
}
