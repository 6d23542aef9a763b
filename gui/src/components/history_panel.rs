// History side panel shared by the standard and scientific calculators.
// Clicking an entry pushes its result back into the accumulator display.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::history::HistoryLog;

#[component]
pub fn HistoryPanel(history: Signal<HistoryLog>, on_use: EventHandler<String>) -> Element {
    let mut history = history;
    let is_empty = history.read().is_empty();
    let entries: Vec<_> = history.read().entries().cloned().collect();

    rsx! {
        aside { class: "history-panel",
            div { class: "history-header",
                span { class: "history-title", "History" }
                button {
                    class: "history-clear",
                    disabled: is_empty,
                    onclick: move |_| history.write().clear(),
                    "Clear"
                }
            }
            if is_empty {
                p { class: "history-empty", "No calculation history yet." }
            } else {
                ul { class: "history-list",
                    for entry in entries {
                        li {
                            key: "{entry.id}",
                            class: "history-entry",
                            onclick: {
                                let result = entry.result.clone();
                                move |_| on_use.call(result.clone())
                            },
                            div { class: "history-expression", "{entry.expression}" }
                            div { class: "history-result", "{entry.result}" }
                            div { class: "history-time",
                                "{entry.created_at.format(\"%H:%M\")}"
                            }
                        }
                    }
                }
            }
        }
    }
}
