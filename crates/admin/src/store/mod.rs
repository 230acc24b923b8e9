//! Key-value storage port.
//!
//! Everything the dashboard persists goes through [`KeyValueStore`], a
//! `localStorage`-shaped interface: string keys, string values, synchronous
//! `get`/`set`. Values are JSON documents.
//!
//! # Key layout
//!
//! - `users`, `products`, `customers` - JSON arrays of records
//! - `logs` - JSON array of activity entries
//! - `totalUser`, `totalProduct`, `totalCustomer` - JSON integers
//!
//! # Backends
//!
//! - [`MemoryStore`] - in-process map, used by tests
//! - [`FileStore`] - one JSON file on disk, used by the CLI
//! - `LocalStorage` - browser `localStorage` (`browser` feature)

#[cfg(feature = "browser")]
pub mod browser;
pub mod file;
pub mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[cfg(feature = "browser")]
pub use browser::LocalStorage;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by a store backend or by the JSON layer on top of it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded as JSON.
    #[error("failed to encode `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A stored value is not valid JSON or not the expected shape.
    #[error("failed to decode `{key}`: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The backend refused the operation (quota, unavailable storage, ...).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Synchronous string key-value storage.
///
/// Implementations take `&self` and manage their own interior mutability so a
/// single store can be shared (via `Rc`) by every repository and the
/// activity log.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Read and decode the JSON value stored under `key`.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] if the value is not valid JSON for `T`, or
/// any backend error from [`KeyValueStore::get`].
pub fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Decode {
            key: key.to_owned(),
            source,
        })
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] if serialization fails, or any backend
/// error from [`KeyValueStore::set`].
pub fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.to_owned(),
        source,
    })?;
    store.set(key, raw)
}

/// Load a JSON array, falling back to an empty list.
///
/// A missing key, a value that is not valid JSON, and a value that is not
/// an array all yield `Vec::new()`. Elements are decoded one by one; an
/// element that does not decode as `T` is skipped, so one bad entry never
/// hides the rest. Every fallback is logged at `warn`.
///
/// # Errors
///
/// Only backend read errors are returned.
pub fn load_list<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<T>, StoreError> {
    let items = match read_json::<Value>(store, key) {
        Ok(Some(Value::Array(items))) => items,
        Ok(None) => return Ok(Vec::new()),
        Ok(Some(_)) => {
            tracing::warn!(%key, "Stored value is not a list, starting empty");
            return Ok(Vec::new());
        }
        Err(StoreError::Decode { key, source }) => {
            tracing::warn!(%key, error = %source, "Stored list is unreadable, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(%key, index, %error, "Skipping unreadable stored entry");
                None
            }
        })
        .collect())
}

/// Load a counter, treating missing or unreadable values as zero.
///
/// # Errors
///
/// Only backend read errors are returned.
pub fn load_counter(store: &dyn KeyValueStore, key: &str) -> Result<usize, StoreError> {
    match read_json::<usize>(store, key) {
        Ok(count) => Ok(count.unwrap_or(0)),
        Err(StoreError::Decode { key, source }) => {
            tracing::warn!(%key, error = %source, "Stored counter is unreadable, using 0");
            Ok(0)
        }
        Err(e) => Err(e),
    }
}
