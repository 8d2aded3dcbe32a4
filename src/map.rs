//! String-keyed mapping type for wire dictionaries.
//!
//! This module provides [`Dict`], a wrapper around [`IndexMap`] used for
//! `dict<T>` fields. The wire treats object key order as irrelevant, but
//! `Dict` keeps insertion order so that encoding a decoded mapping reproduces
//! the keys in the order they arrived.
//!
//! ## Examples
//!
//! ```rust
//! use wirebind::Dict;
//!
//! let mut scores = Dict::new();
//! scores.insert("alice".to_string(), 3.5);
//! scores.insert("bob".to_string(), 1.0);
//!
//! assert_eq!(scores.len(), 2);
//! assert_eq!(scores.get("alice"), Some(&3.5));
//! ```

use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};

/// An ordered map of string keys to values of `T`.
///
/// # Examples
///
/// ```rust
/// use wirebind::Dict;
///
/// let mut map = Dict::new();
/// map.insert("first".to_string(), 1);
/// map.insert("second".to_string(), 2);
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone)]
pub struct Dict<T>(IndexMap<String, T>);

impl<T> Dict<T> {
    /// Creates an empty `Dict`.
    #[must_use]
    pub fn new() -> Self {
        Dict(IndexMap::new())
    }

    /// Creates an empty `Dict` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Dict(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wirebind::Dict;
    ///
    /// let mut map = Dict::new();
    /// assert!(map.insert("key".to_string(), 42).is_none());
    /// assert_eq!(map.insert("key".to_string(), 43), Some(42));
    /// ```
    pub fn insert(&mut self, key: String, value: T) -> Option<T> {
        self.0.insert(key, value)
    }

    /// Removes a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        self.0.shift_remove(key)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, T> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, T> {
        self.0.values()
    }

    /// Returns a mutable iterator over the values of the map.
    pub fn values_mut(&mut self) -> indexmap::map::ValuesMut<'_, String, T> {
        self.0.values_mut()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, T> {
        self.0.iter()
    }
}

impl<T> Default for Dict<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Key order never affects equality.
impl<T: PartialEq> PartialEq for Dict<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).map_or(false, |v| v == value))
    }
}

impl<T> From<HashMap<String, T>> for Dict<T> {
    fn from(map: HashMap<String, T>) -> Self {
        Dict(map.into_iter().collect())
    }
}

impl<T> From<BTreeMap<String, T>> for Dict<T> {
    fn from(map: BTreeMap<String, T>) -> Self {
        Dict(map.into_iter().collect())
    }
}

impl<T> From<Dict<T>> for HashMap<String, T> {
    fn from(map: Dict<T>) -> Self {
        map.0.into_iter().collect()
    }
}

impl<T> IntoIterator for Dict<T> {
    type Item = (String, T);
    type IntoIter = indexmap::map::IntoIter<String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Dict<T> {
    type Item = (&'a String, &'a T);
    type IntoIter = indexmap::map::Iter<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> FromIterator<(String, T)> for Dict<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Dict(IndexMap::from_iter(iter))
    }
}
