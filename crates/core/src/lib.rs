//! Backoffice Core - Shared types library.
//!
//! This crate provides common types used across all Backoffice components:
//! - `admin` - Record repositories, filtering, pagination and the activity log
//! - `cli` - Command-line front end over a file-backed store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere, including `wasm32`.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and
//!   enumerated field values

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
