use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed calculation, as shown in the history side panel.
/// Entries are immutable after creation; the log only prepends and evicts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub expression: String,
    pub result: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        HistoryEntry {
            id: Uuid::new_v4(),
            expression: expression.into(),
            result: result.into(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Payload handed to the toast surface. The engine never constructs these;
/// panels translate engine errors into notifications at the call site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Notification {
            id: Uuid::new_v4(),
            title: title.into(),
            message: message.into(),
            severity,
        }
    }
}
