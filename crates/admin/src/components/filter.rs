//! Search and field filters for record lists.
//!
//! A [`FilterSpec`] combines a free-text query with per-field [`Choice`]s:
//!
//! - the query matches, case-insensitively, as a substring of any of the
//!   record's search fields
//! - each choice is either `all` (no constraint) or an exact field value
//! - everything is ANDed together
//!
//! Filtering never reorders: the result keeps the input order.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::convert::Infallible;

use serde::Serialize;

/// Sentinel value meaning "do not constrain this field".
pub const ALL: &str = "all";

/// A record that can be searched and filtered by field name.
pub trait Searchable {
    /// Fields the free-text query is matched against.
    const SEARCH_FIELDS: &'static [&'static str];

    /// String value of `field`, or `None` if this record has no such field.
    fn field(&self, field: &str) -> Option<Cow<'_, str>>;
}

/// Accepted value for one filtered field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(untagged)]
pub enum Choice {
    /// Pass every record.
    #[default]
    All,
    /// Pass records whose field equals this value exactly.
    Exact(String),
}

impl Choice {
    /// Parse a selector value; `"all"` and the empty string mean [`Choice::All`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | ALL => Self::All,
            other => Self::Exact(other.to_owned()),
        }
    }

    /// Whether `value` (the record's field, if present) passes this choice.
    #[must_use]
    pub fn accepts(&self, value: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Exact(expected) => value == Some(expected.as_str()),
        }
    }
}

impl std::str::FromStr for Choice {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// A free-text query plus field predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    query: String,
    predicates: BTreeMap<String, Choice>,
}

impl FilterSpec {
    /// An unconstrained filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterSpec::set_query`].
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    /// Builder form of [`FilterSpec::set_predicate`].
    #[must_use]
    pub fn with_predicate(mut self, field: impl Into<String>, choice: impl Into<Choice>) -> Self {
        self.set_predicate(field, choice);
        self
    }

    /// Replace the free-text query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Constrain `field`; [`Choice::All`] removes the constraint.
    pub fn set_predicate(&mut self, field: impl Into<String>, choice: impl Into<Choice>) {
        let field = field.into();
        match choice.into() {
            Choice::All => {
                self.predicates.remove(&field);
            }
            exact @ Choice::Exact(_) => {
                self.predicates.insert(field, exact);
            }
        }
    }

    /// Drop the query and every predicate.
    pub fn clear(&mut self) {
        self.query.clear();
        self.predicates.clear();
    }

    /// The current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Choice for `field` (`All` when unconstrained).
    #[must_use]
    pub fn predicate(&self, field: &str) -> Choice {
        self.predicates.get(field).cloned().unwrap_or_default()
    }

    /// Whether this filter passes every record.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.query.is_empty() && self.predicates.is_empty()
    }

    /// Whether `record` passes the query and every predicate.
    pub fn matches<R: Searchable>(&self, record: &R) -> bool {
        self.matches_query(record)
            && self
                .predicates
                .iter()
                .all(|(field, choice)| choice.accepts(record.field(field).as_deref()))
    }

    fn matches_query<R: Searchable>(&self, record: &R) -> bool {
        let needle = self.query.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        R::SEARCH_FIELDS.iter().any(|field| {
            record
                .field(field)
                .is_some_and(|value| value.to_lowercase().contains(&needle))
        })
    }
}

/// Records passing `spec`, in their original order.
pub fn filter<'a, R: Searchable>(records: &'a [R], spec: &FilterSpec) -> Vec<&'a R> {
    records.iter().filter(|record| spec.matches(*record)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        name: &'static str,
        email: &'static str,
        tier: &'static str,
    }

    impl Searchable for Row {
        const SEARCH_FIELDS: &'static [&'static str] = &["name", "email"];

        fn field(&self, field: &str) -> Option<Cow<'_, str>> {
            match field {
                "name" => Some(Cow::Borrowed(self.name)),
                "email" => Some(Cow::Borrowed(self.email)),
                "tier" => Some(Cow::Borrowed(self.tier)),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Diana", email: "d@x.io", tier: "gold" },
            Row { name: "Bob", email: "bob@ANvil.com", tier: "silver" },
            Row { name: "Carl", email: "c@x.io", tier: "gold" },
        ]
    }

    #[test]
    fn test_unconstrained_is_identity() {
        let rows = rows();
        let spec = FilterSpec::new().with_predicate("tier", ALL);
        assert!(spec.is_unconstrained());
        let out = filter(&rows, &spec);
        assert_eq!(out, rows.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_query_is_case_insensitive_across_fields() {
        let rows = rows();
        let out = filter(&rows, &FilterSpec::new().with_query("AN"));
        let names: Vec<_> = out.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Diana", "Bob"]);
    }

    #[test]
    fn test_query_whitespace_is_part_of_the_needle() {
        let rows = rows();
        assert!(filter(&rows, &FilterSpec::new().with_query(" an")).is_empty());

        let spec = FilterSpec::new().with_query("ana ");
        assert!(!spec.is_unconstrained());
        assert!(filter(&rows, &spec).is_empty());
        assert_eq!(filter(&rows, &FilterSpec::new().with_query("ana")).len(), 1);
    }

    #[test]
    fn test_predicates_and_query_combine() {
        let rows = rows();
        let spec = FilterSpec::new().with_query("an").with_predicate("tier", "gold");
        let names: Vec<_> = filter(&rows, &spec).iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Diana"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let rows = rows();
        assert!(filter(&rows, &FilterSpec::new().with_query("zzz")).is_empty());
        assert!(filter(&rows, &FilterSpec::new().with_predicate("tier", "bronze")).is_empty());
    }

    #[test]
    fn test_unknown_field_excludes_everything() {
        let rows = rows();
        let spec = FilterSpec::new().with_predicate("colour", "red");
        assert!(filter(&rows, &spec).is_empty());
    }

    #[test]
    fn test_setting_all_removes_predicate() {
        let mut spec = FilterSpec::new().with_predicate("tier", "gold");
        assert_eq!(spec.predicate("tier"), Choice::Exact("gold".to_owned()));

        spec.set_predicate("tier", Choice::All);
        assert_eq!(spec.predicate("tier"), Choice::All);
        assert!(spec.is_unconstrained());
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!(Choice::parse("all"), Choice::All);
        assert_eq!(Choice::parse(""), Choice::All);
        assert_eq!(Choice::parse("female"), Choice::Exact("female".to_owned()));
    }
}
