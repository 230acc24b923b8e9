//! Enumerated field values for dashboard records.
//!
//! Every enum serializes to the same lowercase string the forms submit, and
//! parses back from it with `FromStr`.

use serde::{Deserialize, Serialize};

/// Error returned when a string is not one of an enum's allowed values.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {value}")]
pub struct UnknownVariant {
    /// Which enum was being parsed (e.g. "role").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// Dashboard user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Dps,
    Support,
    Healer,
    Tanker,
    Subdps,
}

impl Role {
    /// All roles, in the order the role selector lists them.
    pub const ALL: [Self; 6] = [
        Self::Admin,
        Self::Dps,
        Self::Support,
        Self::Healer,
        Self::Tanker,
        Self::Subdps,
    ];

    /// The stored string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Dps => "dps",
            Self::Support => "support",
            Self::Healer => "healer",
            Self::Tanker => "tanker",
            Self::Subdps => "subdps",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("role", s))
    }
}

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Figure,
    Keychain,
    TShirt,
}

impl Category {
    /// All categories, in selector order.
    pub const ALL: [Self; 3] = [Self::Figure, Self::Keychain, Self::TShirt];

    /// The stored string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Figure => "figure",
            Self::Keychain => "keychain",
            Self::TShirt => "t-shirt",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("category", s))
    }
}

/// Customer gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Both genders, in selector order.
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// The stored string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|gender| gender.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("gender", s))
    }
}

/// Price bucket used by the product price filter.
///
/// - `low`: below 100.000
/// - `medium`: 100.000 to 500.000 inclusive
/// - `high`: above 500.000
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceRange {
    Low,
    Medium,
    High,
}

impl PriceRange {
    /// All ranges, cheapest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// The filter value string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PriceRange {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|range| range.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("price range", s))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_string_forms_match_serde() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{role}\""));
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_category_t_shirt_is_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Category::TShirt).unwrap(),
            "\"t-shirt\""
        );
        assert_eq!("t-shirt".parse::<Category>().unwrap(), Category::TShirt);
    }

    #[test]
    fn test_gender_round_trips() {
        for gender in Gender::ALL {
            let json = serde_json::to_string(&gender).unwrap();
            let back: Gender = serde_json::from_str(&json).unwrap();
            assert_eq!(back, gender);
        }
    }

    #[test]
    fn test_unknown_variant_error() {
        let err = "wizard".parse::<Role>().unwrap_err();
        assert_eq!(err.to_string(), "invalid role: wizard");
        assert!("Admin".parse::<Role>().is_err());
        assert!("unisex".parse::<Gender>().is_err());
        assert!("cheap".parse::<PriceRange>().is_err());
    }
}
