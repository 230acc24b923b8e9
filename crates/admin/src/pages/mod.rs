//! Dashboard pages.
//!
//! - `entity` - generic list page (users, products, customers)
//! - `dashboard` - every page over one store, plus summary and calendar

pub mod dashboard;
pub mod entity;

pub use dashboard::Dashboard;
pub use entity::{
    CONFIRM_DELETE, CONFIRM_EDIT, CustomersPage, EntityPage, ProductsPage, Submitted, UsersPage,
};
