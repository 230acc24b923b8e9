//! Record commands shared by users, products and customers.

use serde::Serialize;
use tracing::info;

use backoffice_admin::components::PageInfo;
use backoffice_admin::models::Record;
use backoffice_admin::{EntityPage, Submitted};

use super::{CommandError, print_json};

/// One page of a filtered list.
#[derive(Debug, Serialize)]
pub struct Listing<'a, R> {
    pub items: Vec<&'a R>,
    pub page: PageInfo,
    pub total: usize,
}

#[derive(Debug, Serialize)]
struct Deleted<R> {
    deleted: Option<R>,
}

/// Create a record from `form`.
///
/// # Errors
///
/// Returns `CommandError::App` if validation or persistence fails.
pub fn add<R: Record>(page: &mut EntityPage<R>, form: R::Form) -> Result<(), CommandError> {
    match page.submit(form)? {
        Submitted::Created(record) | Submitted::Updated(record) => print_json(&record),
        Submitted::Unchanged => Err(CommandError::Cancelled),
    }
}

/// Enter edit mode for `id`, apply `changes` to the form, and save it.
///
/// # Errors
///
/// Returns `CommandError::NotFound` for an unknown id, `Cancelled` when the
/// edit prompt is declined, or `App` if validation or persistence fails.
pub fn update<R: Record>(
    page: &mut EntityPage<R>,
    id: R::Id,
    changes: impl FnOnce(&mut R::Form),
) -> Result<(), CommandError> {
    start_edit(page, id)?;
    changes(page.form_mut());

    let form = page.form().clone();
    match page.submit(form) {
        Ok(Submitted::Created(record) | Submitted::Updated(record)) => print_json(&record),
        Ok(Submitted::Unchanged) => Err(not_found::<R>(id)),
        Err(e) => {
            page.reset_form();
            Err(e.into())
        }
    }
}

/// Enter edit mode for `id` and print the pre-filled form.
///
/// # Errors
///
/// Returns `CommandError::NotFound` for an unknown id or `Cancelled` when
/// the prompt is declined.
pub fn edit<R: Record>(page: &mut EntityPage<R>, id: R::Id) -> Result<(), CommandError>
where
    R::Form: Serialize,
{
    start_edit(page, id)?;
    print_json(page.form())
}

/// Delete `id` after confirmation.
///
/// Deleting an id that does not exist is not an error; the result is
/// `{"deleted": null}`.
///
/// # Errors
///
/// Returns `CommandError::App` if persistence fails.
pub fn delete<R: Record>(page: &mut EntityPage<R>, id: R::Id) -> Result<(), CommandError> {
    let deleted = page.request_delete(id)?;
    if deleted.is_none() {
        info!(kind = %R::KIND, %id, "Nothing deleted");
    }
    print_json(&Deleted { deleted })
}

/// Print one page of the records matching `query` and `predicates`.
///
/// # Errors
///
/// Returns `CommandError::Output` if the listing cannot be written.
pub fn list<R: Record>(
    page: &mut EntityPage<R>,
    query: Option<String>,
    predicates: &[(&str, &str)],
    page_index: usize,
) -> Result<(), CommandError> {
    if let Some(query) = query {
        page.set_query(query);
    }
    for (field, value) in predicates {
        page.set_predicate(field, *value);
    }
    page.set_page(page_index);

    print_json(&Listing {
        items: page.current_items(),
        page: page.page_info(),
        total: page.filtered().len(),
    })
}

fn start_edit<R: Record>(page: &mut EntityPage<R>, id: R::Id) -> Result<(), CommandError> {
    if page.get(id).is_none() {
        return Err(not_found::<R>(id));
    }
    if page.request_edit(id)? {
        Ok(())
    } else {
        Err(CommandError::Cancelled)
    }
}

fn not_found<R: Record>(id: R::Id) -> CommandError {
    CommandError::NotFound {
        kind: R::KIND,
        id: id.into(),
    }
}
