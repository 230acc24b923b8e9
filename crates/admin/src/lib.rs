//! Backoffice dashboard library.
//!
//! The dashboard core without any UI: record pages with validated forms,
//! search and paging, an activity log, and summary counters, all written
//! through to a `localStorage`-shaped key-value store.
//!
//! # Layout
//!
//! - [`store`] - key-value storage port and backends
//! - [`db`] - generic record repository over the store
//! - [`models`] - users, products, customers, log entries
//! - [`components`] - filtering and pagination
//! - [`services`] - activity log and summary counters
//! - [`pages`] - list pages and the dashboard that owns them
//!
//! Everything is single-threaded: shared handles are `Rc`, never `Arc`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod clock;
pub mod components;
pub mod config;
pub mod db;
pub mod dialog;
pub mod error;
pub mod models;
pub mod pages;
pub mod services;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{BackofficeConfig, ConfigError, LogFormat};
pub use dialog::{AutoConfirm, Dialog, ScriptedDialog};
pub use error::AppError;
pub use pages::{Dashboard, EntityPage, Submitted};
