// Transient notification stack. No timers: toasts stay until dismissed.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::Severity;

use crate::services::notifier::Notifier;

#[component]
pub fn ToastStack() -> Element {
    let notifier = use_context::<Notifier>();
    let toasts: Vec<_> = notifier.toasts().read().iter().cloned().collect();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: match toast.severity {
                        Severity::Info => "toast toast-info",
                        Severity::Warning => "toast toast-warning",
                        Severity::Error => "toast toast-error",
                    },
                    onclick: {
                        let mut notifier = notifier;
                        let id = toast.id;
                        move |_| notifier.dismiss(id)
                    },
                    div { class: "toast-title", "{toast.title}" }
                    div { class: "toast-message", "{toast.message}" }
                }
            }
        }
    }
}
