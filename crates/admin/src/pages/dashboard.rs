//! The dashboard: every page over one shared store.

use std::rc::Rc;

use chrono::NaiveDate;
use tracing::{info, warn};

use backoffice_core::EntityKind;

use super::entity::{CustomersPage, EntityPage, ProductsPage, UsersPage};
use crate::clock::Clock;
use crate::config::BackofficeConfig;
use crate::db::Repository;
use crate::dialog::Dialog;
use crate::error::AppError;
use crate::models::{CalendarEvent, LogEntry, Record};
use crate::services::{ActivityLog, Summary};
use crate::store::KeyValueStore;

/// All dashboard pages plus the shared activity log.
pub struct Dashboard {
    store: Rc<dyn KeyValueStore>,
    activity: ActivityLog,
    users: UsersPage,
    products: ProductsPage,
    customers: CustomersPage,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("activity", &self.activity)
            .field("users", &self.users)
            .field("products", &self.products)
            .field("customers", &self.customers)
            .finish_non_exhaustive()
    }
}

impl Dashboard {
    /// Load every page and the activity log from `store`.
    ///
    /// Stored counters that disagree with their list lengths are rewritten.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the store cannot be read, or if a
    /// drifted counter cannot be rewritten.
    pub fn open(
        store: Rc<dyn KeyValueStore>,
        clock: Rc<dyn Clock>,
        dialog: Rc<dyn Dialog>,
        config: &BackofficeConfig,
    ) -> Result<Self, AppError> {
        let activity = ActivityLog::load(store.clone(), clock.clone())?;

        let users = open_page(&store, &clock, &activity, &dialog, config)?;
        let products = open_page(&store, &clock, &activity, &dialog, config)?;
        let customers = open_page(&store, &clock, &activity, &dialog, config)?;

        let dashboard = Self {
            store,
            activity,
            users,
            products,
            customers,
        };
        dashboard.reconcile_counters()?;

        info!(
            users = dashboard.users.records().len(),
            products = dashboard.products.records().len(),
            customers = dashboard.customers.records().len(),
            logs = dashboard.activity.len(),
            "Dashboard opened"
        );
        Ok(dashboard)
    }

    /// Current stored counters.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the store cannot be read.
    pub fn summary(&self) -> Result<Summary, AppError> {
        Ok(Summary::read(self.store.as_ref())?)
    }

    /// The shared activity log.
    #[must_use]
    pub const fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Activity as calendar events.
    #[must_use]
    pub fn calendar_events(&self) -> Vec<CalendarEvent> {
        self.activity.calendar_events()
    }

    /// Activity recorded on `date`.
    #[must_use]
    pub fn activity_on(&self, date: NaiveDate) -> Vec<LogEntry> {
        self.activity.on(date)
    }

    #[must_use]
    pub const fn users(&self) -> &UsersPage {
        &self.users
    }

    pub const fn users_mut(&mut self) -> &mut UsersPage {
        &mut self.users
    }

    #[must_use]
    pub const fn products(&self) -> &ProductsPage {
        &self.products
    }

    pub const fn products_mut(&mut self) -> &mut ProductsPage {
        &mut self.products
    }

    #[must_use]
    pub const fn customers(&self) -> &CustomersPage {
        &self.customers
    }

    pub const fn customers_mut(&mut self) -> &mut CustomersPage {
        &mut self.customers
    }

    fn reconcile_counters(&self) -> Result<(), AppError> {
        let stored = Summary::read(self.store.as_ref())?;
        reconcile(&self.users, stored)?;
        reconcile(&self.products, stored)?;
        reconcile(&self.customers, stored)?;
        Ok(())
    }
}

fn open_page<R: Record>(
    store: &Rc<dyn KeyValueStore>,
    clock: &Rc<dyn Clock>,
    activity: &ActivityLog,
    dialog: &Rc<dyn Dialog>,
    config: &BackofficeConfig,
) -> Result<EntityPage<R>, AppError> {
    let repository = Repository::load(store.clone(), clock.clone())?;
    Ok(EntityPage::new(
        repository,
        activity.clone(),
        dialog.clone(),
        config.page_size,
    ))
}

fn reconcile<R: Record>(page: &EntityPage<R>, stored: Summary) -> Result<(), AppError> {
    let kind: EntityKind = R::KIND;
    let actual = page.records().len();
    let recorded = stored.get(kind);
    if recorded != actual {
        warn!(%kind, recorded, actual, "Counter out of sync, rewriting");
        page.repository().sync_counter()?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::clock::ManualClock;
    use crate::dialog::AutoConfirm;
    use crate::models::{ProductForm, UserForm};
    use crate::store::MemoryStore;

    fn open(store: &Rc<MemoryStore>) -> Dashboard {
        let clock = Rc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2025, 6, 1, 8, 30, 0).single().unwrap(),
        ));
        Dashboard::open(
            store.clone(),
            clock,
            Rc::new(AutoConfirm),
            &BackofficeConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_store() {
        let store = Rc::new(MemoryStore::new());
        let dashboard = open(&store);
        assert_eq!(dashboard.summary().unwrap(), Summary::default());
        assert!(dashboard.calendar_events().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_counters_follow_pages() {
        let store = Rc::new(MemoryStore::new());
        let mut dashboard = open(&store);

        dashboard
            .users_mut()
            .submit(UserForm::new("Ann", "a@b.com", "admin"))
            .unwrap();
        dashboard
            .products_mut()
            .submit(ProductForm::new("Mug", "45.000", "keychain"))
            .unwrap();

        let summary = dashboard.summary().unwrap();
        assert_eq!(summary.total_user, 1);
        assert_eq!(summary.total_product, 1);
        assert_eq!(summary.total_customer, 0);

        let events = dashboard.calendar_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].title, "Added Product: Mug");
        let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(dashboard.activity_on(day).len(), 2);
    }

    #[test]
    fn test_open_repairs_drifted_counters() {
        let store = Rc::new(MemoryStore::new());
        store
            .set(
                "customers",
                r#"[{"id":1,"name":"Diana","email":"d@x.io","gender":"female"}]"#.to_owned(),
            )
            .unwrap();
        store.set("totalCustomer", "5".to_owned()).unwrap();

        let dashboard = open(&store);
        assert_eq!(dashboard.summary().unwrap().total_customer, 1);
        assert_eq!(dashboard.customers().records().len(), 1);
        assert!(dashboard.users().records().is_empty());
    }
}
