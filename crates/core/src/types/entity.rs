//! Record kinds and their persisted key layout.

use serde::{Deserialize, Serialize};

/// The three record kinds the dashboard manages.
///
/// Each kind owns one list key and one counter key in the key-value store:
///
/// | Kind     | List key    | Counter key     |
/// |----------|-------------|-----------------|
/// | User     | `users`     | `totalUser`     |
/// | Product  | `products`  | `totalProduct`  |
/// | Customer | `customers` | `totalCustomer` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    User,
    Product,
    Customer,
}

impl EntityKind {
    /// All kinds, in dashboard order.
    pub const ALL: [Self; 3] = [Self::User, Self::Product, Self::Customer];

    /// Human label used in activity messages ("Added User: Ann").
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Product => "Product",
            Self::Customer => "Customer",
        }
    }

    /// Store key holding the JSON array of records.
    #[must_use]
    pub const fn list_key(&self) -> &'static str {
        match self {
            Self::User => "users",
            Self::Product => "products",
            Self::Customer => "customers",
        }
    }

    /// Store key holding the record count.
    #[must_use]
    pub const fn counter_key(&self) -> &'static str {
        match self {
            Self::User => "totalUser",
            Self::Product => "totalProduct",
            Self::Customer => "totalCustomer",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_distinct() {
        let mut keys: Vec<&str> = EntityKind::ALL
            .iter()
            .flat_map(|kind| [kind.list_key(), kind.counter_key()])
            .collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 6);
    }

    #[test]
    fn test_labels() {
        assert_eq!(EntityKind::User.to_string(), "User");
        assert_eq!(EntityKind::Customer.counter_key(), "totalCustomer");
    }
}
