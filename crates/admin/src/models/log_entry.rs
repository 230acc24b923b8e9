//! Activity log entries and their calendar projection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded action, dated by day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// What happened (`"Added User: Ann"`).
    pub message: String,
    /// Day it happened, stored as `YYYY-MM-DD`.
    pub date: NaiveDate,
}

impl LogEntry {
    #[must_use]
    pub fn new(message: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            message: message.into(),
            date,
        }
    }
}

/// An all-day event as the calendar widget expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub title: String,
    pub date: NaiveDate,
}

impl From<&LogEntry> for CalendarEvent {
    fn from(entry: &LogEntry) -> Self {
        Self {
            title: entry.message.clone(),
            date: entry.date,
        }
    }
}
