//! Product price as entered in the product form.
//!
//! Prices are kept exactly as typed, with `.` as the thousands separator
//! (`"150.000"` is one hundred fifty thousand rupiah). The numeric amount is
//! derived on demand and is only used for bucketing into [`PriceRange`]s.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::status::PriceRange;

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is empty or whitespace.
    #[error("price cannot be empty")]
    Empty,
}

/// A price string with locale thousands separators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Price(String);

impl Price {
    /// Upper bound (exclusive) of the `low` range.
    pub const LOW_CEILING: i64 = 100_000;
    /// Upper bound (inclusive) of the `medium` range.
    pub const MEDIUM_CEILING: i64 = 500_000;

    /// Parse a `Price` from form input.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Empty`] if the input is blank.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the price as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric amount: separators stripped, leading integer parsed.
    ///
    /// Anything after the leading integer is ignored and input without a
    /// leading integer counts as zero, so `"1.250.000"` is `1250000`,
    /// `"75000,50"` is `75000` and `"free"` is `0`. A digit run too long for
    /// a [`Decimal`] saturates to [`Decimal::MAX`] (or `MIN` when negative).
    #[must_use]
    pub fn amount(&self) -> Decimal {
        let digits: String = self.0.chars().filter(|c| *c != '.').collect();
        let digits = digits.trim_start();

        let (negative, rest) = match digits.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, digits.strip_prefix('+').unwrap_or(digits)),
        };

        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let Some(leading) = rest.get(..end).filter(|leading| !leading.is_empty()) else {
            return Decimal::ZERO;
        };

        let magnitude = leading.parse::<Decimal>().unwrap_or(Decimal::MAX);
        if negative { -magnitude } else { magnitude }
    }

    /// Which filter bucket this price falls into.
    #[must_use]
    pub fn range(&self) -> PriceRange {
        let amount = self.amount();
        if amount < Decimal::from(Self::LOW_CEILING) {
            PriceRange::Low
        } else if amount <= Decimal::from(Self::MEDIUM_CEILING) {
            PriceRange::Medium
        } else {
            PriceRange::High
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Decimal {
        Price::parse(s).unwrap().amount()
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(Price::parse(""), Err(PriceError::Empty));
        assert_eq!(Price::parse("   "), Err(PriceError::Empty));
    }

    #[test]
    fn test_amount_strips_thousands_separators() {
        assert_eq!(amount("150.000"), Decimal::from(150_000));
        assert_eq!(amount("1.250.000"), Decimal::from(1_250_000));
        assert_eq!(amount("99000"), Decimal::from(99_000));
    }

    #[test]
    fn test_amount_uses_leading_integer() {
        assert_eq!(amount("75000,50"), Decimal::from(75_000));
        assert_eq!(amount("12abc"), Decimal::from(12));
        assert_eq!(amount("-5"), Decimal::from(-5));
    }

    #[test]
    fn test_huge_prices_stay_high() {
        let price = Price::parse("99.999.999.999.999.999.999").unwrap();
        assert_eq!(price.amount(), "99999999999999999999999".parse::<Decimal>().unwrap());
        assert_eq!(price.range(), PriceRange::High);

        let absurd = Price::parse(&"9".repeat(40)).unwrap();
        assert!(absurd.amount() > Decimal::from(Price::MEDIUM_CEILING));
        assert_eq!(absurd.range(), PriceRange::High);
    }

    #[test]
    fn test_amount_defaults_to_zero() {
        assert_eq!(amount("free"), Decimal::ZERO);
        assert_eq!(amount("Rp 10.000"), Decimal::ZERO);
    }

    #[test]
    fn test_range_boundaries() {
        assert_eq!(Price::parse("99.999").unwrap().range(), PriceRange::Low);
        assert_eq!(Price::parse("100.000").unwrap().range(), PriceRange::Medium);
        assert_eq!(Price::parse("500.000").unwrap().range(), PriceRange::Medium);
        assert_eq!(Price::parse("500.001").unwrap().range(), PriceRange::High);
        assert_eq!(Price::parse("n/a").unwrap().range(), PriceRange::Low);
    }

    #[test]
    fn test_serializes_as_entered() {
        let price = Price::parse("150.000").unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "\"150.000\"");
    }
}
