//! Browser `localStorage` backend (`browser` feature, `wasm32` targets).

use web_sys::Storage;

use super::{KeyValueStore, StoreError};

/// A [`KeyValueStore`] over the page's `window.localStorage`.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Attach to the current window's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] when there is no window or storage is
    /// disabled (private browsing, sandboxed iframes).
    pub fn from_window() -> Result<Self, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Backend("no window".to_owned()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Backend(format!("localStorage unavailable: {e:?}")))?
            .ok_or_else(|| StoreError::Backend("localStorage disabled".to_owned()))?;

        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Backend(format!("getItem({key}) failed: {e:?}")))
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.storage
            .set_item(key, &value)
            .map_err(|e| StoreError::Backend(format!("setItem({key}) failed: {e:?}")))
    }
}
