//! Activity log.
//!
//! Every create, update, delete and edit-start action appends one dated
//! [`LogEntry`] under the `logs` key. Entries are never edited or removed.
//! The log is a cheap clonable handle so each page can hold its own copy.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use chrono::NaiveDate;
use tracing::{info, instrument};

use crate::clock::Clock;
use crate::models::{CalendarEvent, LogEntry};
use crate::store::{self, KeyValueStore, StoreError};

/// Store key holding the log.
pub const LOGS_KEY: &str = "logs";

/// Shared handle to the activity log.
#[derive(Clone)]
pub struct ActivityLog {
    store: Rc<dyn KeyValueStore>,
    clock: Rc<dyn Clock>,
    entries: Rc<RefCell<Vec<LogEntry>>>,
}

impl std::fmt::Debug for ActivityLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityLog")
            .field("entries", &self.entries.borrow().len())
            .finish_non_exhaustive()
    }
}

impl ActivityLog {
    /// Load the log from the store; a missing or unreadable log starts empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read.
    pub fn load(store: Rc<dyn KeyValueStore>, clock: Rc<dyn Clock>) -> Result<Self, StoreError> {
        let entries: Vec<LogEntry> = store::load_list(store.as_ref(), LOGS_KEY)?;
        Ok(Self {
            store,
            clock,
            entries: Rc::new(RefCell::new(entries)),
        })
    }

    /// Append `message` dated today and persist the log.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the log cannot be written; the entry is then
    /// not kept in memory either.
    #[instrument(skip(self, message))]
    pub fn add_log(&self, message: impl Into<String>) -> Result<LogEntry, StoreError> {
        let entry = LogEntry::new(message, self.clock.today());

        let mut next = self.entries.borrow().clone();
        next.push(entry.clone());
        store::write_json(self.store.as_ref(), LOGS_KEY, &next)?;

        *self.entries.borrow_mut() = next;
        info!(message = %entry.message, date = %entry.date, "Activity logged");
        Ok(entry)
    }

    /// Every entry, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// The most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<LogEntry> {
        self.entries.borrow().last().cloned()
    }

    /// One calendar event per entry.
    #[must_use]
    pub fn calendar_events(&self) -> Vec<CalendarEvent> {
        self.entries.borrow().iter().map(CalendarEvent::from).collect()
    }

    /// Entries grouped per day, days ascending.
    #[must_use]
    pub fn by_date(&self) -> BTreeMap<NaiveDate, Vec<LogEntry>> {
        let mut days: BTreeMap<NaiveDate, Vec<LogEntry>> = BTreeMap::new();
        for entry in self.entries.borrow().iter() {
            days.entry(entry.date).or_default().push(entry.clone());
        }
        days
    }

    /// Entries recorded on `date`.
    #[must_use]
    pub fn on(&self, date: NaiveDate) -> Vec<LogEntry> {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.date == date)
            .cloned()
            .collect()
    }
}
