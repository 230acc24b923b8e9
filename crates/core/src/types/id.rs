//! Newtype IDs for type-safe record references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different record kinds.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i64` with:
/// - `Serialize` as a JSON number
/// - `Deserialize` from a JSON number or a numeric string (browser form
///   round trips store ids as strings)
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`
/// - Conversion methods: `new()`, `as_i64()`
/// - `From<i64>`, `Into<i64>` and `FromStr` implementations
///
/// # Example
///
/// ```rust
/// # use backoffice_core::define_id;
/// define_id!(UserId);
/// define_id!(OrderId);
///
/// let user_id = UserId::new(1);
/// let order_id = OrderId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: UserId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ::serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                #[derive(::serde::Deserialize)]
                #[serde(untagged)]
                enum Raw {
                    Number(i64),
                    Text(String),
                }

                match Raw::deserialize(deserializer)? {
                    Raw::Number(id) => Ok(Self(id)),
                    Raw::Text(text) => text
                        .trim()
                        .parse::<i64>()
                        .map(Self)
                        .map_err(|_| {
                            <D::Error as ::serde::de::Error>::custom(format!(
                                "invalid {} `{text}`",
                                stringify!($name)
                            ))
                        }),
                }
            }
        }
    };
}

// Define record IDs
define_id!(UserId);
define_id!(ProductId);
define_id!(CustomerId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_number() {
        let id = UserId::new(1_700_000_000_000);
        assert_eq!(serde_json::to_string(&id).unwrap(), "1700000000000");
    }

    #[test]
    fn test_deserializes_number_or_numeric_string() {
        let from_number: ProductId = serde_json::from_str("42").unwrap();
        let from_text: ProductId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_number, ProductId::new(42));
        assert_eq!(from_text, from_number);
    }

    #[test]
    fn test_rejects_non_numeric_string() {
        let result: Result<CustomerId, _> = serde_json::from_str("\"abc\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_str() {
        let id: UserId = " 17 ".parse().unwrap();
        assert_eq!(id.as_i64(), 17);
        assert_eq!(id.to_string(), "17");
    }
}
