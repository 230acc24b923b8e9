//! `bo-cli users ...`

use clap::Subcommand;

use backoffice_admin::models::UserForm;
use backoffice_admin::pages::UsersPage;
use backoffice_core::UserId;

use super::{CommandError, records};

#[derive(Subcommand)]
pub enum UserAction {
    /// Add a user
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Role (`admin`, `dps`, `support`, `healer`, `tanker`, `subdps`)
        #[arg(short, long)]
        role: String,
    },
    /// Replace fields of an existing user
    Update {
        id: UserId,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        role: Option<String>,
    },
    /// Load a user into the form and print it
    Edit { id: UserId },
    /// Delete a user
    Delete { id: UserId },
    /// List users
    List {
        /// Search name and email
        #[arg(short, long)]
        query: Option<String>,

        /// Only this role
        #[arg(short, long, default_value = "all")]
        role: String,

        /// Zero-based page index
        #[arg(short, long, default_value_t = 0)]
        page: usize,
    },
}

/// Run a users command.
///
/// # Errors
///
/// Returns `CommandError` if the action fails.
pub fn run(page: &mut UsersPage, action: UserAction) -> Result<(), CommandError> {
    match action {
        UserAction::Add { name, email, role } => records::add(page, UserForm::new(name, email, role)),
        UserAction::Update {
            id,
            name,
            email,
            role,
        } => records::update(page, id, |form| {
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(email) = email {
                form.email = email;
            }
            if let Some(role) = role {
                form.role = role;
            }
        }),
        UserAction::Edit { id } => records::edit(page, id),
        UserAction::Delete { id } => records::delete(page, id),
        UserAction::List { query, role, page: index } => {
            records::list(page, query, &[("role", role.as_str())], index)
        }
    }
}
