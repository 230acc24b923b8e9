//! Shop customers.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use backoffice_core::{CustomerId, Email, EntityKind, Gender};

use super::{Record, RecordForm, ValidationErrors, check_choice, check_email, check_name};
use crate::components::filter::Searchable;

/// A persisted customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer ID.
    pub id: CustomerId,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: Email,
    /// Country, free text; may be empty.
    #[serde(default)]
    pub country: String,
    pub gender: Gender,
}

/// A validated customer without an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDraft {
    pub name: String,
    pub email: Email,
    pub country: String,
    pub gender: Gender,
}

/// Raw customer form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerForm {
    /// Set while editing an existing customer.
    #[serde(default)]
    pub id: Option<CustomerId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub gender: String,
}

impl CustomerForm {
    /// A form for a new customer with no country.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, gender: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            gender: gender.into(),
            ..Self::default()
        }
    }

    /// Set the country.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }
}

impl Record for Customer {
    type Id = CustomerId;
    type Draft = CustomerDraft;
    type Form = CustomerForm;

    const KIND: EntityKind = EntityKind::Customer;

    fn id(&self) -> CustomerId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn from_draft(id: CustomerId, draft: CustomerDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            country: draft.country,
            gender: draft.gender,
        }
    }
}

impl RecordForm for CustomerForm {
    type Record = Customer;

    fn id(&self) -> Option<CustomerId> {
        self.id
    }

    fn validate(&self) -> Result<CustomerDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = check_name(&mut errors, &self.name);
        let email = check_email(&mut errors, &self.email);
        let gender = check_choice::<Gender>(
            &mut errors,
            "gender",
            &self.gender,
            "Gender is required",
            "Invalid gender",
        );

        match (name, email, gender) {
            (Some(name), Some(email), Some(gender)) if errors.is_empty() => Ok(CustomerDraft {
                name,
                email,
                country: self.country.trim().to_owned(),
                gender,
            }),
            _ => Err(errors),
        }
    }

    fn from_record(record: &Customer) -> Self {
        Self {
            id: Some(record.id),
            name: record.name.clone(),
            email: record.email.to_string(),
            country: record.country.clone(),
            gender: record.gender.to_string(),
        }
    }
}

impl Searchable for Customer {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "email"];

    fn field(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "name" => Some(Cow::Borrowed(&self.name)),
            "email" => Some(Cow::Borrowed(self.email.as_str())),
            "country" => Some(Cow::Borrowed(&self.country)),
            "gender" => Some(Cow::Borrowed(self.gender.as_str())),
            _ => None,
        }
    }
}
