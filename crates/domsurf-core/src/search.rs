//! Property Search
//!
//! Generic all/some matching over a property filter. The engine knows
//! nothing about any surface; callers inject a predicate that performs
//! the actual lookup and comparison.

use crate::value::PropertyValue;

/// A set of property constraints to match against.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyFilter {
    /// Names that must merely be present.
    Names(Vec<String>),
    /// Ordered name/value pairs. A `None` value degrades that entry to a
    /// presence check.
    Pairs(Vec<(String, Option<PropertyValue>)>),
}

impl PropertyFilter {
    /// Build a presence-only filter from names.
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyFilter::Names(names.into_iter().map(Into::into).collect())
    }

    /// Build a value filter from ordered name/value pairs.
    pub fn pairs<I, S, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<Option<PropertyValue>>,
    {
        PropertyFilter::Pairs(
            pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        match self {
            PropertyFilter::Names(names) => names.is_empty(),
            PropertyFilter::Pairs(pairs) => pairs.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            PropertyFilter::Names(names) => names.len(),
            PropertyFilter::Pairs(pairs) => pairs.len(),
        }
    }
}

/// True iff the predicate holds for every filter entry.
///
/// Vacuously true for an empty filter; short-circuits on the first
/// failing entry. For `Names` entries the predicate receives no value
/// (presence check); degrading a `None` pair value to a presence check
/// is the predicate's job.
pub fn matches_all<F>(filter: &PropertyFilter, mut predicate: F) -> bool
where
    F: FnMut(&str, Option<&PropertyValue>) -> bool,
{
    match filter {
        PropertyFilter::Names(names) => names.iter().all(|name| predicate(name, None)),
        PropertyFilter::Pairs(pairs) => pairs
            .iter()
            .all(|(name, value)| predicate(name, value.as_ref())),
    }
}

/// True iff the predicate holds for at least one filter entry.
///
/// Vacuously false for an empty filter; short-circuits on the first
/// succeeding entry.
pub fn matches_some<F>(filter: &PropertyFilter, mut predicate: F) -> bool
where
    F: FnMut(&str, Option<&PropertyValue>) -> bool,
{
    match filter {
        PropertyFilter::Names(names) => names.iter().any(|name| predicate(name, None)),
        PropertyFilter::Pairs(pairs) => pairs
            .iter()
            .any(|(name, value)| predicate(name, value.as_ref())),
    }
}
