//! One record list page: form, table, search, and paging.
//!
//! An [`EntityPage`] ties a [`Repository`] to the activity log and the
//! front end's [`Dialog`]. It owns the page's view state (the form being
//! edited, the filter, the page index) and turns user events into
//! repository calls.

use std::rc::Rc;

use tracing::{debug, instrument, warn};

use crate::components::filter::{self, Choice, FilterSpec};
use crate::components::pagination::{PageInfo, page_count, paginate};
use crate::db::{Repository, RepositoryError};
use crate::dialog::Dialog;
use crate::error::AppError;
use crate::models::{Customer, Product, Record, RecordForm, User};
use crate::services::ActivityLog;

/// Prompt shown before switching the form to edit mode.
pub const CONFIRM_EDIT: &str = "Edit this entry?";
/// Prompt shown before deleting a record.
pub const CONFIRM_DELETE: &str = "Are you sure? The data that has been deleted cannot be restored!";

/// What a form submission did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted<R> {
    /// A new record was stored.
    Created(R),
    /// An existing record was replaced.
    Updated(R),
    /// The form pointed at a record that no longer exists.
    Unchanged,
}

/// The users page.
pub type UsersPage = EntityPage<User>;
/// The products page.
pub type ProductsPage = EntityPage<Product>;
/// The customers page.
pub type CustomersPage = EntityPage<Customer>;

/// List page state for one record kind.
pub struct EntityPage<R: Record> {
    repository: Repository<R>,
    activity: ActivityLog,
    dialog: Rc<dyn Dialog>,
    form: R::Form,
    filter: FilterSpec,
    page_size: usize,
    page_index: usize,
}

impl<R: Record> std::fmt::Debug for EntityPage<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityPage")
            .field("repository", &self.repository)
            .field("form", &self.form)
            .field("filter", &self.filter)
            .field("page_size", &self.page_size)
            .field("page_index", &self.page_index)
            .finish_non_exhaustive()
    }
}

impl<R: Record> EntityPage<R> {
    /// Create a page showing `page_size` rows at a time.
    ///
    /// A zero page size is raised to one.
    #[must_use]
    pub fn new(
        repository: Repository<R>,
        activity: ActivityLog,
        dialog: Rc<dyn Dialog>,
        page_size: usize,
    ) -> Self {
        Self {
            repository,
            activity,
            dialog,
            form: R::Form::default(),
            filter: FilterSpec::new(),
            page_size: page_size.max(1),
            page_index: 0,
        }
    }

    /// Validate `form` and create or replace a record.
    ///
    /// Without an id the form creates a record; with an id it replaces the
    /// record with that id. On success the form is reset. If the id no
    /// longer exists nothing changes and [`Submitted::Unchanged`] is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` with every failing field (the form is
    /// kept so it can be corrected), or `AppError::Storage` if the record
    /// cannot be persisted. Once the record is stored the submission
    /// succeeds even if its activity entry cannot be written.
    #[instrument(skip(self, form), fields(kind = %R::KIND))]
    pub fn submit(&mut self, form: R::Form) -> Result<Submitted<R>, AppError> {
        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(errors) => {
                debug!(%errors, "Form rejected");
                self.form = form;
                return Err(errors.into());
            }
        };

        let label = R::KIND.label();
        let Some(id) = form.id() else {
            let record = self.repository.create(draft)?;
            self.record_activity(format!("Added {label}: {}", record.name()));
            self.dialog.notify(
                "Added",
                &format!("New {} has been added.", label.to_lowercase()),
            );
            self.reset_form();
            self.clamp_page();
            return Ok(Submitted::Created(record));
        };

        match self.repository.update(R::from_draft(id, draft)) {
            Ok(record) => {
                self.record_activity(format!("Updated {label}: {}", record.name()));
                self.dialog
                    .notify("Updated", &format!("{label} has been updated."));
                self.reset_form();
                Ok(Submitted::Updated(record))
            }
            Err(RepositoryError::NotFound { .. }) => {
                debug!(%id, "Edited record no longer exists");
                self.reset_form();
                Ok(Submitted::Unchanged)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Ask to edit record `id` and load it into the form if confirmed.
    ///
    /// Returns whether the form switched to edit mode.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the activity entry cannot be written.
    #[instrument(skip(self), fields(kind = %R::KIND))]
    pub fn request_edit(&mut self, id: R::Id) -> Result<bool, AppError> {
        let Some(record) = self.repository.get(id).cloned() else {
            debug!("No such record to edit");
            return Ok(false);
        };
        if !self.dialog.confirm(CONFIRM_EDIT) {
            debug!("Edit cancelled");
            return Ok(false);
        }

        self.form = R::Form::from_record(&record);
        self.activity
            .add_log(format!("Editing {}: {}", R::KIND.label(), record.name()))?;
        self.dialog.notify("Editing", "You can now update the data.");
        Ok(true)
    }

    /// Ask to delete record `id` and delete it if confirmed.
    ///
    /// Returns the removed record, or `None` when cancelled or when the
    /// record was already gone.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the shortened list cannot be persisted.
    /// A failed activity write is only logged.
    #[instrument(skip(self), fields(kind = %R::KIND))]
    pub fn request_delete(&mut self, id: R::Id) -> Result<Option<R>, AppError> {
        if !self.dialog.confirm(CONFIRM_DELETE) {
            debug!("Delete cancelled");
            return Ok(None);
        }

        let removed = self.repository.delete(id)?;
        if let Some(record) = &removed {
            self.record_activity(format!("Deleted {}: {}", R::KIND.label(), record.name()));
            if self.form.id() == Some(id) {
                self.reset_form();
            }
        }
        self.dialog.notify("Deleted!", "Data has been deleted.");
        self.clamp_page();
        Ok(removed)
    }

    /// Replace the search text and go back to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
        self.page_index = 0;
    }

    /// Constrain one field and go back to the first page.
    pub fn set_predicate(&mut self, field: &str, choice: impl Into<Choice>) {
        self.filter.set_predicate(field, choice);
        self.page_index = 0;
    }

    /// Drop every filter and go back to the first page.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.page_index = 0;
    }

    /// Show page `index`; out-of-range pages are simply empty.
    pub const fn set_page(&mut self, index: usize) {
        self.page_index = index;
    }

    /// Records passing the current filter, in list order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&R> {
        filter::filter(self.repository.list(), &self.filter)
    }

    /// Rows on the current page.
    #[must_use]
    pub fn current_items(&self) -> Vec<&R> {
        paginate(&self.filtered(), self.page_size, self.page_index).to_vec()
    }

    /// Position of the current page.
    #[must_use]
    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(self.filtered().len(), self.page_size, self.page_index)
    }

    /// Current form state.
    #[must_use]
    pub const fn form(&self) -> &R::Form {
        &self.form
    }

    /// Edit the form in place.
    pub const fn form_mut(&mut self) -> &mut R::Form {
        &mut self.form
    }

    /// Discard the form (leaves edit mode).
    pub fn reset_form(&mut self) {
        self.form = R::Form::default();
    }

    /// Current filter.
    #[must_use]
    pub const fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// Zero-based index of the page shown.
    #[must_use]
    pub const fn page_index(&self) -> usize {
        self.page_index
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Every record, unfiltered.
    #[must_use]
    pub fn records(&self) -> &[R] {
        self.repository.list()
    }

    /// Look up one record.
    #[must_use]
    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.repository.get(id)
    }

    /// The underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &Repository<R> {
        &self.repository
    }

    /// Append an activity entry for a change that is already persisted.
    fn record_activity(&self, message: String) {
        if let Err(error) = self.activity.add_log(message) {
            warn!(%error, "Activity entry was not saved");
        }
    }

    /// Keep the page index on an existing page after the list shrank or grew.
    fn clamp_page(&mut self) {
        let count = page_count(self.filtered().len(), self.page_size);
        self.page_index = self.page_index.min(PageInfo::last_index(count));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use backoffice_core::{CustomerId, UserId};

    use super::*;
    use crate::clock::ManualClock;
    use crate::dialog::ScriptedDialog;
    use crate::models::{CustomerForm, UserForm};
    use crate::store::{KeyValueStore, MemoryStore, StoreError};

    struct Harness {
        store: Rc<MemoryStore>,
        dialog: Rc<ScriptedDialog>,
        activity: ActivityLog,
    }

    impl Harness {
        fn new() -> Self {
            let store = Rc::new(MemoryStore::new());
            let clock = Rc::new(ManualClock::new(
                Utc.with_ymd_and_hms(2025, 2, 3, 10, 0, 0).single().unwrap(),
            ));
            let activity = ActivityLog::load(store.clone(), clock).unwrap();
            Self {
                store,
                dialog: Rc::new(ScriptedDialog::default()),
                activity,
            }
        }

        fn page<R: Record>(&self, page_size: usize) -> EntityPage<R> {
            let clock = Rc::new(ManualClock::new(
                Utc.with_ymd_and_hms(2025, 2, 3, 10, 0, 0).single().unwrap(),
            ));
            let repository = Repository::load(self.store.clone(), clock).unwrap();
            EntityPage::new(repository, self.activity.clone(), self.dialog.clone(), page_size)
        }

        fn messages(&self) -> Vec<String> {
            self.activity.entries().into_iter().map(|e| e.message).collect()
        }
    }

    fn create_user(page: &mut UsersPage, name: &str, email: &str, role: &str) -> User {
        match page.submit(UserForm::new(name, email, role)).unwrap() {
            Submitted::Created(user) => user,
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[test]
    fn test_create_logs_and_notifies() {
        let h = Harness::new();
        let mut users: UsersPage = h.page(10);

        let ann = create_user(&mut users, "Ann", "a@b.com", "admin");

        assert!(ann.id.as_i64() > 0);
        assert_eq!(users.records().len(), 1);
        assert_eq!(h.messages(), vec!["Added User: Ann"]);
        assert_eq!(h.store.get("totalUser").unwrap().as_deref(), Some("1"));
        assert_eq!(
            h.dialog.notifications(),
            vec![("Added".to_owned(), "New user has been added.".to_owned())]
        );
        assert_eq!(users.form(), &UserForm::default());
    }

    /// Accepts record writes but refuses the activity log.
    struct NoLogStore(MemoryStore);

    impl KeyValueStore for NoLogStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
            if key == "logs" {
                return Err(StoreError::Backend("quota exceeded".to_owned()));
            }
            self.0.set(key, value)
        }
    }

    #[test]
    fn test_saved_record_survives_failed_activity_write() {
        let store = Rc::new(NoLogStore(MemoryStore::new()));
        let clock = Rc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2025, 2, 3, 10, 0, 0).single().unwrap(),
        ));
        let activity = ActivityLog::load(store.clone(), clock.clone()).unwrap();
        let repository = Repository::load(store.clone(), clock).unwrap();
        let dialog = Rc::new(ScriptedDialog::default());
        let mut users: UsersPage = EntityPage::new(repository, activity.clone(), dialog, 10);

        let ann = create_user(&mut users, "Ann", "a@b.com", "admin");
        assert_eq!(users.records(), &[ann.clone()]);
        assert_eq!(users.form(), &UserForm::default());
        assert!(activity.is_empty());
        assert_eq!(store.get("totalUser").unwrap().as_deref(), Some("1"));

        let mut form = UserForm::from_record(&ann);
        form.role = "support".to_owned();
        assert!(matches!(users.submit(form).unwrap(), Submitted::Updated(_)));
        assert_eq!(users.records().len(), 1);
    }

    #[test]
    fn test_invalid_form_changes_nothing() {
        let h = Harness::new();
        let mut users: UsersPage = h.page(10);

        let err = users
            .submit(UserForm::new("", "nope", "admin"))
            .unwrap_err();
        let errors = err.validation().unwrap();
        assert_eq!(errors.message_for("name"), Some("Name is required"));
        assert_eq!(errors.message_for("email"), Some("Invalid email"));

        assert!(users.records().is_empty());
        assert!(h.activity.is_empty());
        assert_eq!(users.form().email, "nope");
        assert!(h.store.get("users").unwrap().is_none());
    }

    #[test]
    fn test_edit_then_update() {
        let h = Harness::new();
        let mut users: UsersPage = h.page(10);
        let ann = create_user(&mut users, "Ann", "a@b.com", "admin");

        h.dialog.push_answer(true);
        assert!(users.request_edit(ann.id).unwrap());
        assert_eq!(users.form().id, Some(ann.id));
        assert_eq!(h.dialog.prompts(), vec![CONFIRM_EDIT.to_owned()]);

        let mut form = users.form().clone();
        form.role = "healer".to_owned();
        let updated = users.submit(form).unwrap();
        assert!(matches!(updated, Submitted::Updated(ref u) if u.id == ann.id));

        assert_eq!(users.records().len(), 1);
        assert_eq!(users.get(ann.id).unwrap().role.as_str(), "healer");
        assert_eq!(
            h.messages(),
            vec!["Added User: Ann", "Editing User: Ann", "Updated User: Ann"]
        );
        assert_eq!(
            h.dialog.notifications().last().unwrap(),
            &("Updated".to_owned(), "User has been updated.".to_owned())
        );
    }

    #[test]
    fn test_declined_edit_keeps_form() {
        let h = Harness::new();
        let mut users: UsersPage = h.page(10);
        let ann = create_user(&mut users, "Ann", "a@b.com", "admin");

        h.dialog.push_answer(false);
        assert!(!users.request_edit(ann.id).unwrap());
        assert_eq!(users.form(), &UserForm::default());
        assert_eq!(h.activity.len(), 1);
    }

    #[test]
    fn test_update_of_vanished_record_is_silent() {
        let h = Harness::new();
        let mut users: UsersPage = h.page(10);
        let ann = create_user(&mut users, "Ann", "a@b.com", "admin");

        let mut stale = UserForm::from_record(&ann);
        stale.id = Some(UserId::new(1));
        stale.name = "Ghost".to_owned();

        assert_eq!(users.submit(stale).unwrap(), Submitted::Unchanged);
        assert_eq!(users.records(), &[ann]);
        assert_eq!(h.activity.len(), 1);
    }

    #[test]
    fn test_delete_confirmed_and_declined() {
        let h = Harness::new();
        let mut users: UsersPage = h.page(10);
        let ann = create_user(&mut users, "Ann", "a@b.com", "admin");

        h.dialog.push_answer(false);
        assert!(users.request_delete(ann.id).unwrap().is_none());
        assert_eq!(users.records().len(), 1);

        h.dialog.push_answer(true);
        assert_eq!(users.request_delete(ann.id).unwrap(), Some(ann.clone()));
        assert!(users.records().is_empty());

        h.dialog.push_answer(true);
        assert!(users.request_delete(ann.id).unwrap().is_none());

        assert_eq!(h.messages(), vec!["Added User: Ann", "Deleted User: Ann"]);
        assert_eq!(
            h.dialog.prompts(),
            vec![CONFIRM_DELETE.to_owned(); 3]
        );
        assert_eq!(h.store.get("totalUser").unwrap().as_deref(), Some("0"));
    }

    #[test]
    fn test_filter_resets_page_and_delete_clamps() {
        let h = Harness::new();
        let mut users: UsersPage = h.page(2);
        for i in 0..5 {
            create_user(&mut users, &format!("User {i}"), &format!("u{i}@x.io"), "dps");
        }

        users.set_page(2);
        assert_eq!(users.current_items().len(), 1);

        let last = users.current_items()[0].id;
        h.dialog.push_answer(true);
        users.request_delete(last).unwrap();
        assert_eq!(users.page_index(), 1);
        assert_eq!(users.current_items().len(), 2);

        users.set_query("user 1");
        assert_eq!(users.page_index(), 0);
        assert_eq!(users.filtered().len(), 1);
        assert!(!users.page_info().has_next_page);

        users.set_page(7);
        assert!(users.current_items().is_empty());
        users.clear_filters();
        assert_eq!(users.page_index(), 0);
        assert_eq!(users.filtered().len(), 4);
    }

    #[test]
    fn test_customer_gender_and_query() {
        let h = Harness::new();
        let mut customers: CustomersPage = h.page(10);
        for (name, email, gender) in [
            ("Diana", "diana@shop.id", "female"),
            ("Hana", "h@shop.id", "female"),
            ("Bella", "bella@shop.id", "female"),
            ("Andi", "andi@shop.id", "male"),
        ] {
            customers
                .submit(CustomerForm::new(name, email, gender))
                .unwrap();
        }

        customers.set_predicate("gender", "female");
        customers.set_query("AN");
        let names: Vec<_> = customers.filtered().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Diana", "Hana"]);

        customers.set_predicate("gender", "all");
        let names: Vec<_> = customers.filtered().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Diana", "Hana", "Andi"]);

        assert!(customers.get(CustomerId::new(1)).is_none());
    }
}
