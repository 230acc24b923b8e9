//! Core types for the Backoffice dashboard.
//!
//! This module provides type-safe wrappers for record fields.

pub mod email;
pub mod entity;
pub mod id;
pub mod price;
pub mod status;

pub use email::{Email, EmailError};
pub use entity::EntityKind;
pub use id::*;
pub use price::{Price, PriceError};
pub use status::*;
