// Standard calculator: the two-operand accumulator with the basic keypad,
// plus the shared history side panel.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::accumulator::{Accumulator, BinaryOp};
use engine::history::HistoryLog;

use crate::components::history_panel::HistoryPanel;
use crate::services::notifier::Notifier;

#[component]
pub fn StandardCalculator(history_capacity: usize) -> Element {
    let mut acc = use_signal(Accumulator::new);
    let history = use_signal(move || HistoryLog::with_capacity(history_capacity));
    let mut notifier = use_context::<Notifier>();

    let preview = acc.read().pending_preview().unwrap_or_default();
    let display = acc.read().display().to_string();

    let mut equals = move || {
        let outcome = acc.write().equals();
        match outcome {
            Ok(Some(eval)) => {
                let mut history = history;
                history.write().record(eval.expression, eval.result);
            }
            Ok(None) => {}
            Err(err) => notifier.domain_error(&err),
        }
    };

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "Standard Calculator" }
            div { class: "calc-layout",
                div { class: "calc-main",
                    div { class: "calc-display",
                        div { class: "calc-preview", "{preview}" }
                        div { class: "calc-value", "{display}" }
                    }
                    div { class: "keypad keypad-4",
                        button { class: "key key-muted", onclick: move |_| acc.write().clear(), "C" }
                        button { class: "key key-muted", onclick: move |_| acc.write().backspace(), "←" }
                        button { class: "key key-op", onclick: move |_| acc.write().push_operator(BinaryOp::Divide), "÷" }
                        button { class: "key key-op", onclick: move |_| acc.write().push_operator(BinaryOp::Multiply), "×" }

                        for d in ['7', '8', '9'] {
                            button { key: "{d}", class: "key", onclick: move |_| acc.write().enter_digit(d), "{d}" }
                        }
                        button { class: "key key-op", onclick: move |_| acc.write().push_operator(BinaryOp::Subtract), "-" }

                        for d in ['4', '5', '6'] {
                            button { key: "{d}", class: "key", onclick: move |_| acc.write().enter_digit(d), "{d}" }
                        }
                        button { class: "key key-op", onclick: move |_| acc.write().push_operator(BinaryOp::Add), "+" }

                        for d in ['1', '2', '3'] {
                            button { key: "{d}", class: "key", onclick: move |_| acc.write().enter_digit(d), "{d}" }
                        }
                        button { class: "key key-primary key-tall", onclick: move |_| equals(), "=" }

                        button { class: "key key-wide", onclick: move |_| acc.write().enter_digit('0'), "0" }
                        button { class: "key", onclick: move |_| acc.write().enter_point(), "." }
                    }
                }
                HistoryPanel {
                    history,
                    on_use: move |result: String| acc.write().load_value(&result),
                }
            }
        }
    }
}
