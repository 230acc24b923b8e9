//! `bo-cli summary` and `bo-cli logs`.

use chrono::NaiveDate;

use backoffice_admin::Dashboard;
use backoffice_admin::services::Summary;
use backoffice_admin::store::KeyValueStore;

use super::{CommandError, print_json};

/// Print the record counters, optionally rebuilding them first.
///
/// # Errors
///
/// Returns `CommandError::App` if the store cannot be read or written.
pub fn summary(
    dashboard: &Dashboard,
    store: &dyn KeyValueStore,
    recount: bool,
) -> Result<(), CommandError> {
    let summary = if recount {
        Summary::recount(store).map_err(backoffice_admin::AppError::from)?
    } else {
        dashboard.summary()?
    };
    print_json(&summary)
}

/// Print the activity log, or only the entries recorded on `date`.
///
/// # Errors
///
/// Returns `CommandError::Output` if the entries cannot be written.
pub fn logs(dashboard: &Dashboard, date: Option<NaiveDate>) -> Result<(), CommandError> {
    let entries = match date {
        Some(date) => dashboard.activity_on(date),
        None => dashboard.activity().entries(),
    };
    print_json(&entries)
}
