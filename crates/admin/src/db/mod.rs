//! Record persistence over the key-value store.
//!
//! # Keys
//!
//! Each record kind owns two keys (see [`EntityKind`]):
//!
//! - the list key (`users`, `products`, `customers`) - the full record list
//! - the counter key (`totalUser`, ...) - the list length
//!
//! Both are rewritten on every mutation.

pub mod repository;

use thiserror::Error;

use backoffice_core::EntityKind;

use crate::store::StoreError;

pub use repository::Repository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backing store failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// Requested record was not found.
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: i64 },
}
