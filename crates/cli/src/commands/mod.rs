//! Command implementations.
//!
//! Every command prints its result to stdout as JSON; logs and prompts go
//! to stderr.

pub mod activity;
pub mod customers;
pub mod products;
pub mod records;
pub mod users;

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use backoffice_admin::AppError;
use backoffice_core::EntityKind;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A dashboard action failed.
    #[error(transparent)]
    App(#[from] AppError),

    /// No record with the given id.
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: i64 },

    /// The confirmation prompt was declined.
    #[error("cancelled")]
    Cancelled,

    /// Writing the JSON result failed.
    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),

    /// Writing to stdout failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Print `value` to stdout as pretty JSON.
///
/// # Errors
///
/// Returns `CommandError::Output` if serialization fails, or
/// `CommandError::Io` if stdout is closed.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CommandError> {
    let rendered = serde_json::to_string_pretty(value)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
