//! Dashboard user accounts.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use backoffice_core::{Email, EntityKind, Role, UserId};

use super::{Record, RecordForm, ValidationErrors, check_choice, check_email, check_name};
use crate::components::filter::Searchable;

/// A persisted user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: Email,
    /// Team role.
    pub role: Role,
}

/// A validated user without an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: Email,
    pub role: Role,
}

/// Raw user form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserForm {
    /// Set while editing an existing user.
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl UserForm {
    /// A blank form for a new user.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

impl Record for User {
    type Id = UserId;
    type Draft = UserDraft;
    type Form = UserForm;

    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> UserId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn from_draft(id: UserId, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            role: draft.role,
        }
    }
}

impl RecordForm for UserForm {
    type Record = User;

    fn id(&self) -> Option<UserId> {
        self.id
    }

    fn validate(&self) -> Result<UserDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = check_name(&mut errors, &self.name);
        let email = check_email(&mut errors, &self.email);
        let role = check_choice::<Role>(
            &mut errors,
            "role",
            &self.role,
            "Role is required",
            "Invalid role",
        );

        match (name, email, role) {
            (Some(name), Some(email), Some(role)) if errors.is_empty() => {
                Ok(UserDraft { name, email, role })
            }
            _ => Err(errors),
        }
    }

    fn from_record(record: &User) -> Self {
        Self {
            id: Some(record.id),
            name: record.name.clone(),
            email: record.email.to_string(),
            role: record.role.to_string(),
        }
    }
}

impl Searchable for User {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "email"];

    fn field(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "name" => Some(Cow::Borrowed(&self.name)),
            "email" => Some(Cow::Borrowed(self.email.as_str())),
            "role" => Some(Cow::Borrowed(self.role.as_str())),
            _ => None,
        }
    }
}
