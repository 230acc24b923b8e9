//! Domain models for the dashboard.
//!
//! Each record kind comes in three shapes:
//!
//! - a **form** (`UserForm`, ...) holding raw input exactly as typed, with an
//!   optional id when an existing record is being edited
//! - a **draft** (`UserDraft`, ...) produced by validating a form; it has
//!   typed fields but no id yet
//! - the **record** (`User`, ...) with its assigned id, as persisted

pub mod customer;
pub mod log_entry;
pub mod product;
pub mod user;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use backoffice_core::EntityKind;

use crate::components::filter::Searchable;

pub use customer::{Customer, CustomerDraft, CustomerForm};
pub use log_entry::{CalendarEvent, LogEntry};
pub use product::{Product, ProductDraft, ProductForm};
pub use user::{User, UserDraft, UserForm};

/// A persisted record kind managed by a [`Repository`](crate::db::Repository).
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned + Searchable {
    /// Typed id wrapper for this kind.
    type Id: Copy + Eq + Ord + fmt::Debug + fmt::Display + From<i64> + Into<i64>;
    /// Validated input without an id.
    type Draft: Clone + fmt::Debug;
    /// Raw form input.
    type Form: RecordForm<Record = Self>;

    /// Which kind this is (drives store keys and activity labels).
    const KIND: EntityKind;

    /// The record's id.
    fn id(&self) -> Self::Id;

    /// Display name used in activity messages.
    fn name(&self) -> &str;

    /// Promote a draft to a record with the given id.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;
}

/// Raw form state for creating or editing one record.
pub trait RecordForm: Clone + Default + fmt::Debug {
    /// The record kind this form produces.
    type Record: Record<Form = Self>;

    /// Id of the record being edited, `None` while composing a new one.
    fn id(&self) -> Option<<Self::Record as Record>::Id>;

    /// Check every field and build a draft.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    fn validate(&self) -> Result<<Self::Record as Record>::Draft, ValidationErrors>;

    /// Pre-fill a form from an existing record (edit mode).
    fn from_record(record: &Self::Record) -> Self;
}

/// A single form field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field name (`name`, `email`, ...).
    pub field: &'static str,
    /// Message shown next to the field.
    pub message: &'static str,
}

/// Every field error from one form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Create an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a failing field.
    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    /// Whether no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All failing fields in form order.
    #[must_use]
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    /// `Ok(value)` when nothing failed, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns `self` if any field failed.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a required email field.
pub(crate) fn check_email(
    errors: &mut ValidationErrors,
    raw: &str,
) -> Option<backoffice_core::Email> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.add("email", "Email is required");
        return None;
    }
    backoffice_core::Email::parse(raw)
        .inspect_err(|_| errors.add("email", "Invalid email"))
        .ok()
}

/// Validate a required name field.
pub(crate) fn check_name(errors: &mut ValidationErrors, raw: &str) -> Option<String> {
    let name = raw.trim();
    if name.is_empty() {
        errors.add("name", "Name is required");
        return None;
    }
    Some(name.to_owned())
}

/// Validate a required choice field (`role`, `category`, `gender`).
pub(crate) fn check_choice<T: std::str::FromStr>(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: &str,
    missing: &'static str,
    invalid: &'static str,
) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.add(field, missing);
        return None;
    }
    raw.parse::<T>()
        .inspect_err(|_| errors.add(field, invalid))
        .ok()
}
