//! Services shared by every page.
//!
//! # Services
//!
//! - `activity` - Append-only activity log and its calendar view
//! - `summary` - Record counters shown on the dashboard

pub mod activity;
pub mod summary;

pub use activity::ActivityLog;
pub use summary::Summary;
