//! Integration tests for Backoffice.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p backoffice-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `dashboard_users` - User page flows (create, edit, delete, activity)
//! - `dashboard_products` - Product paging and price filters
//! - `dashboard_customers` - Customer search and gender filter
//! - `store_persistence` - Reload from memory and file stores
//!
//! Every test builds its own [`TestContext`], so tests never share state.

use std::path::PathBuf;
use std::rc::Rc;

use chrono::{TimeZone, Utc};

use backoffice_admin::store::{FileStore, KeyValueStore, MemoryStore};
use backoffice_admin::{BackofficeConfig, Dashboard, ManualClock, ScriptedDialog};

/// Fixed start time for every test clock: 2025-01-01T00:00:00Z.
pub const START_MILLIS: i64 = 1_735_689_600_000;

/// A dashboard over a test store with a manual clock and scripted dialog.
pub struct TestContext {
    pub store: Rc<dyn KeyValueStore>,
    pub clock: Rc<ManualClock>,
    pub dialog: Rc<ScriptedDialog>,
    pub config: BackofficeConfig,
}

impl TestContext {
    /// A context over a fresh in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_store(Rc::new(MemoryStore::new()))
    }

    /// A context over `store`.
    #[must_use]
    pub fn with_store(store: Rc<dyn KeyValueStore>) -> Self {
        let start = Utc
            .timestamp_millis_opt(START_MILLIS)
            .single()
            .unwrap_or_default();
        Self {
            store,
            clock: Rc::new(ManualClock::new(start)),
            dialog: Rc::new(ScriptedDialog::default()),
            config: BackofficeConfig::default(),
        }
    }

    /// Use `page_size` rows per page.
    #[must_use]
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.config.page_size = page_size;
        self
    }

    /// Open a dashboard over this context's store.
    ///
    /// # Panics
    ///
    /// Panics if the store cannot be read.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn open(&self) -> Dashboard {
        Dashboard::open(
            self.store.clone(),
            self.clock.clone(),
            self.dialog.clone(),
            &self.config,
        )
        .expect("dashboard should open")
    }

    /// Queue `answer` for the next confirmation prompt.
    pub fn answer(&self, answer: bool) {
        self.dialog.push_answer(answer);
    }
}

/// A unique store file path under the system temp directory.
#[must_use]
pub fn temp_store_path() -> PathBuf {
    std::env::temp_dir()
        .join("backoffice-integration-tests")
        .join(format!("{}.json", uuid::Uuid::new_v4()))
}

/// Open a [`FileStore`] at `path`.
///
/// # Panics
///
/// Panics if the file exists but cannot be read.
#[must_use]
#[allow(clippy::expect_used)]
pub fn open_file_store(path: &std::path::Path) -> Rc<dyn KeyValueStore> {
    Rc::new(FileStore::open(path).expect("store file should open"))
}
