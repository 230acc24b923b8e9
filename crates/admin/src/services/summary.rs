//! Dashboard summary counters.
//!
//! Repositories keep `totalUser`, `totalProduct` and `totalCustomer` equal to
//! their list lengths on every mutation; this module only reads them back, or
//! rebuilds them from the stored lists.

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use backoffice_core::EntityKind;

use crate::store::{self, KeyValueStore, StoreError};

/// Record counts per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_user: usize,
    pub total_product: usize,
    pub total_customer: usize,
}

impl Summary {
    /// Read the stored counters; missing or unreadable counters read as 0.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read.
    pub fn read(store: &dyn KeyValueStore) -> Result<Self, StoreError> {
        Ok(Self {
            total_user: store::load_counter(store, EntityKind::User.counter_key())?,
            total_product: store::load_counter(store, EntityKind::Product.counter_key())?,
            total_customer: store::load_counter(store, EntityKind::Customer.counter_key())?,
        })
    }

    /// Count the stored lists and rewrite every counter to match.
    ///
    /// Elements are counted without decoding them as records, so this works
    /// for any record kind.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read or written.
    pub fn recount(store: &dyn KeyValueStore) -> Result<Self, StoreError> {
        let mut summary = Self::default();
        for kind in EntityKind::ALL {
            let count = store::load_list::<Value>(store, kind.list_key())?.len();
            store::write_json(store, kind.counter_key(), &count)?;
            summary.set(kind, count);
        }
        info!(
            users = summary.total_user,
            products = summary.total_product,
            customers = summary.total_customer,
            "Counters recounted"
        );
        Ok(summary)
    }

    /// Count for one kind.
    #[must_use]
    pub const fn get(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::User => self.total_user,
            EntityKind::Product => self.total_product,
            EntityKind::Customer => self.total_customer,
        }
    }

    const fn set(&mut self, kind: EntityKind, count: usize) {
        match kind {
            EntityKind::User => self.total_user = count,
            EntityKind::Product => self.total_product = count,
            EntityKind::Customer => self.total_customer = count,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_read_defaults_to_zero() {
        let store = MemoryStore::new();
        store.set("totalProduct", "3".to_owned()).unwrap();
        store.set("totalCustomer", "garbage".to_owned()).unwrap();

        let summary = Summary::read(&store).unwrap();
        assert_eq!(
            summary,
            Summary {
                total_user: 0,
                total_product: 3,
                total_customer: 0
            }
        );
    }

    #[test]
    fn test_recount_fixes_drift() {
        let store = MemoryStore::new();
        store.set("users", r#"[{"id":1},{"id":2}]"#.to_owned()).unwrap();
        store.set("totalUser", "9".to_owned()).unwrap();
        store.set("customers", "not a list".to_owned()).unwrap();
        store.set("totalCustomer", "4".to_owned()).unwrap();

        let summary = Summary::recount(&store).unwrap();
        assert_eq!(summary.get(EntityKind::User), 2);
        assert_eq!(summary.get(EntityKind::Customer), 0);
        assert_eq!(Summary::read(&store).unwrap(), summary);
    }

    #[test]
    fn test_serializes_with_store_names() {
        let json = serde_json::to_string(&Summary::default()).unwrap();
        assert_eq!(json, r#"{"totalUser":0,"totalProduct":0,"totalCustomer":0}"#);
    }
}
