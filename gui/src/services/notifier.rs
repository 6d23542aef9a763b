// Toast notification service. Panels report domain errors here; the
// ToastStack component renders the queue and dismisses entries on click.

use dioxus::prelude::*;
use engine::EngineError;
use shared::models::{Notification, Severity};
use uuid::Uuid;

#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: Signal<Vec<Notification>>,
}

impl Notifier {
    /// Must be constructed inside a component scope (the signal is owned by
    /// the creating scope).
    pub fn new() -> Self {
        Notifier { toasts: Signal::new(Vec::new()) }
    }

    pub fn notify(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) {
        let notification = Notification::new(title, message, severity);
        tracing::info!(title = %notification.title, ?severity, "Notification raised");
        self.toasts.write().push(notification);
    }

    /// Standard surface for engine domain errors.
    pub fn domain_error(&mut self, error: &EngineError) {
        let severity = if error.is_domain() { Severity::Warning } else { Severity::Error };
        self.notify("Calculation error", error.to_string(), severity);
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.write().retain(|n| n.id != id);
    }

    pub fn toasts(&self) -> Signal<Vec<Notification>> {
        self.toasts
    }
}
