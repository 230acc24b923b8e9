//! `bo-cli customers ...`

use clap::Subcommand;

use backoffice_admin::models::CustomerForm;
use backoffice_admin::pages::CustomersPage;
use backoffice_core::CustomerId;

use super::{CommandError, records};

#[derive(Subcommand)]
pub enum CustomerAction {
    /// Add a customer
    Add {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        /// Gender (`male`, `female`)
        #[arg(short, long)]
        gender: String,

        #[arg(short, long)]
        country: Option<String>,
    },
    /// Replace fields of an existing customer
    Update {
        id: CustomerId,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        gender: Option<String>,

        #[arg(short, long)]
        country: Option<String>,
    },
    /// Load a customer into the form and print it
    Edit { id: CustomerId },
    /// Delete a customer
    Delete { id: CustomerId },
    /// List customers
    List {
        /// Search name and email
        #[arg(short, long)]
        query: Option<String>,

        /// Only this gender
        #[arg(short, long, default_value = "all")]
        gender: String,

        /// Zero-based page index
        #[arg(short, long, default_value_t = 0)]
        page: usize,
    },
}

/// Run a customers command.
///
/// # Errors
///
/// Returns `CommandError` if the action fails.
pub fn run(page: &mut CustomersPage, action: CustomerAction) -> Result<(), CommandError> {
    match action {
        CustomerAction::Add {
            name,
            email,
            gender,
            country,
        } => {
            let form =
                CustomerForm::new(name, email, gender).with_country(country.unwrap_or_default());
            records::add(page, form)
        }
        CustomerAction::Update {
            id,
            name,
            email,
            gender,
            country,
        } => records::update(page, id, |form| {
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(email) = email {
                form.email = email;
            }
            if let Some(gender) = gender {
                form.gender = gender;
            }
            if let Some(country) = country {
                form.country = country;
            }
        }),
        CustomerAction::Edit { id } => records::edit(page, id),
        CustomerAction::Delete { id } => records::delete(page, id),
        CustomerAction::List {
            query,
            gender,
            page: index,
        } => records::list(page, query, &[("gender", gender.as_str())], index),
    }
}
