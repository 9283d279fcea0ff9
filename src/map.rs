//! Insertion-ordered maps used to describe statements.
//!
//! - [`PredicateMap`]: predicate token → [`ObjectValue`], one per statement
//! - [`LanguageMap`]: language tag → value, rendered as one tagged literal per entry
//!
//! Both wrap [`IndexMap`], so output follows insertion order. The statement
//! assembler also accepts a plain `HashMap`, in which case predicate order in
//! the output is unspecified.
//!
//! ## Examples
//!
//! ```rust
//! use turtle_encode::{LanguageMap, PredicateMap};
//!
//! let mut title = LanguageMap::new();
//! title.insert("en", "Moby Dick");
//! title.insert("de", "Moby Dick oder Der Wal");
//!
//! let mut predicates = PredicateMap::new();
//! predicates.insert("a", "<http://schema.org/Book>");
//! predicates.insert("dc:title", title);
//!
//! let keys: Vec<_> = predicates.keys().map(String::as_str).collect();
//! assert_eq!(keys, vec!["a", "dc:title"]);
//! ```

use crate::ObjectValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An ordered map of predicate tokens to object values.
///
/// # Examples
///
/// ```rust
/// use turtle_encode::{statement, PredicateMap};
///
/// let mut map = PredicateMap::new();
/// map.insert("foaf:name", "\"Alice\"");
/// map.insert("foaf:nick", None::<&str>);
///
/// assert_eq!(statement(Some("<urn:alice>"), &map), "<urn:alice> foaf:name \"Alice\" .\n");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredicateMap(IndexMap<String, ObjectValue>);

impl PredicateMap {
    #[must_use]
    pub fn new() -> Self {
        PredicateMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PredicateMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a predicate/object pair.
    ///
    /// If the map already contained this predicate, the old object is
    /// returned and the predicate keeps its original position.
    pub fn insert(
        &mut self,
        predicate: impl Into<String>,
        object: impl Into<ObjectValue>,
    ) -> Option<ObjectValue> {
        self.0.insert(predicate.into(), object.into())
    }

    #[must_use]
    pub fn get(&self, predicate: &str) -> Option<&ObjectValue> {
        self.0.get(predicate)
    }

    /// Removes a predicate, preserving the order of the remaining entries.
    pub fn remove(&mut self, predicate: &str) -> Option<ObjectValue> {
        self.0.shift_remove(predicate)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the predicates, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, ObjectValue> {
        self.0.keys()
    }

    /// Returns an iterator over the predicate/object pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ObjectValue> {
        self.0.iter()
    }
}

impl From<HashMap<String, ObjectValue>> for PredicateMap {
    fn from(map: HashMap<String, ObjectValue>) -> Self {
        PredicateMap(map.into_iter().collect())
    }
}

impl IntoIterator for PredicateMap {
    type Item = (String, ObjectValue);
    type IntoIter = indexmap::map::IntoIter<String, ObjectValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PredicateMap {
    type Item = (&'a String, &'a ObjectValue);
    type IntoIter = indexmap::map::Iter<'a, String, ObjectValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for PredicateMap
where
    K: Into<String>,
    V: Into<ObjectValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        PredicateMap(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// An ordered map of language tags to literal values.
///
/// Each entry renders as one literal tagged with its key; the empty key
/// renders an untagged literal. Values may be scalars or sequences of
/// scalars.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageMap(IndexMap<String, ObjectValue>);

impl LanguageMap {
    #[must_use]
    pub fn new() -> Self {
        LanguageMap(IndexMap::new())
    }

    pub fn insert(
        &mut self,
        lang: impl Into<String>,
        value: impl Into<ObjectValue>,
    ) -> Option<ObjectValue> {
        self.0.insert(lang.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, lang: &str) -> Option<&ObjectValue> {
        self.0.get(lang)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the tag/value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ObjectValue> {
        self.0.iter()
    }
}

impl IntoIterator for LanguageMap {
    type Item = (String, ObjectValue);
    type IntoIter = indexmap::map::IntoIter<String, ObjectValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LanguageMap {
    type Item = (&'a String, &'a ObjectValue);
    type IntoIter = indexmap::map::Iter<'a, String, ObjectValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for LanguageMap
where
    K: Into<String>,
    V: Into<ObjectValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        LanguageMap(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
