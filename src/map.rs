//! Ordered map type for MJON mappings.
//!
//! [`MjonMap`] wraps an [`IndexMap`] so that `@key:` lines are re-emitted in
//! the order they were read. Equality ignores that order: two mappings with
//! the same pairs compare equal however they were built.
//!
//! ## Examples
//!
//! ```rust
//! use serde_mjon::{MjonMap, MjonValue};
//!
//! let mut map = MjonMap::new();
//! map.insert("name".to_string(), MjonValue::from("Alice"));
//! map.insert("age".to_string(), MjonValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to MJON values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MjonMap(IndexMap<String, crate::MjonValue>);

impl MjonMap {
    #[must_use]
    pub fn new() -> Self {
        MjonMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        MjonMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// An existing key keeps its position and gets the new value; the old
    /// value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_mjon::{MjonMap, MjonValue};
    ///
    /// let mut map = MjonMap::new();
    /// assert!(map.insert("key".to_string(), MjonValue::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), MjonValue::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::MjonValue) -> Option<crate::MjonValue> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::MjonValue> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::MjonValue> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key while keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<crate::MjonValue> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::MjonValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::MjonValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::MjonValue> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::MjonValue>> for MjonMap {
    fn from(map: HashMap<String, crate::MjonValue>) -> Self {
        MjonMap(map.into_iter().collect())
    }
}

impl From<MjonMap> for HashMap<String, crate::MjonValue> {
    fn from(map: MjonMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for MjonMap {
    type Item = (String, crate::MjonValue);
    type IntoIter = indexmap::map::IntoIter<String, crate::MjonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MjonMap {
    type Item = (&'a String, &'a crate::MjonValue);
    type IntoIter = indexmap::map::Iter<'a, String, crate::MjonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::MjonValue)> for MjonMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::MjonValue)>>(iter: T) -> Self {
        MjonMap(IndexMap::from_iter(iter))
    }
}
