// src/domain/filter.rs
use std::collections::{BTreeMap, BTreeSet};

use super::entity::FieldValue;

/// Conjunction of `field IN (values)` predicates.
///
/// Keys are column names. A key that is absent is unconstrained; a key that
/// is present with an empty value set matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    predicates: BTreeMap<String, BTreeSet<FieldValue>>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain `field` to any of `values`. Repeated values are kept once.
    pub fn with<I, V>(mut self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        self.predicates
            .entry(field.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// True when some predicate has no candidate values, so no row can match.
    pub fn matches_nothing(&self) -> bool {
        self.predicates.values().any(BTreeSet::is_empty)
    }

    pub fn predicates(&self) -> impl Iterator<Item = (&str, &BTreeSet<FieldValue>)> {
        self.predicates
            .iter()
            .map(|(field, values)| (field.as_str(), values))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.predicates.keys().map(String::as_str)
    }
}

pub fn join_values(values: &[FieldValue]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
