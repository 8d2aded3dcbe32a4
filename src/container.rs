//! Generic traversal over sequences and string-keyed mappings.
//!
//! The two traversals take an element-level function and rebuild the
//! container around its results. Nesting is handled by the caller passing a
//! function that itself traverses, so `list<list<T>>` or `dict<list<T>>`
//! need no special support:
//!
//! ```rust
//! use wirebind::container::sequence_map;
//!
//! let grid = vec![vec![1, 2], vec![3]];
//! let doubled = sequence_map(&grid, |row| sequence_map(row, |n| n * 2));
//! assert_eq!(doubled, vec![vec![2, 4], vec![6]]);
//! ```
//!
//! The `try_` variants stop at the first failing element and report its
//! index or key in the error path, so a failed decode never yields a
//! partially built container.

use crate::{Dict, Error, Result, ValueKind, Wire};
use serde_json::{Map, Value};

/// Applies `f` to every element, preserving order and length.
pub fn sequence_map<I, U, F>(input: I, f: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    input.into_iter().map(f).collect()
}

/// Applies a fallible `f` to every element, preserving order and length.
///
/// # Errors
///
/// Returns the first element error, with the element's index prefixed to
/// its path.
pub fn try_sequence_map<I, U, F>(input: I, mut f: F) -> Result<Vec<U>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<U>,
{
    input
        .into_iter()
        .enumerate()
        .map(|(index, item)| f(item).map_err(|e| e.at_index(index)))
        .collect()
}

/// Applies `f` to every value, preserving every key.
pub fn mapping_map<K, V, I, U, F>(input: I, mut f: F) -> Dict<U>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(V) -> U,
{
    input
        .into_iter()
        .map(|(key, value)| (key.as_ref().to_string(), f(value)))
        .collect()
}

/// Applies a fallible `f` to every value, preserving every key.
///
/// # Errors
///
/// Returns the first value error, with its key prefixed to the path.
pub fn try_mapping_map<K, V, I, U, F>(input: I, mut f: F) -> Result<Dict<U>>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(V) -> Result<U>,
{
    input
        .into_iter()
        .map(|(key, value)| {
            let key = key.as_ref();
            f(value)
                .map(|decoded| (key.to_string(), decoded))
                .map_err(|e| e.in_field(key))
        })
        .collect()
}

impl<T: Wire> Wire for Vec<T> {
    fn from_wire(value: &Value) -> Result<Self> {
        match value {
            Value::Array(items) => try_sequence_map(items, T::from_wire),
            _ => Err(Error::type_mismatch("array", value)),
        }
    }

    fn to_wire(&self) -> Value {
        Value::Array(sequence_map(self, T::to_wire))
    }

    fn kind() -> ValueKind {
        ValueKind::List(Box::new(T::kind()))
    }
}

impl<T: Wire> Wire for Dict<T> {
    fn from_wire(value: &Value) -> Result<Self> {
        match value {
            Value::Object(entries) => try_mapping_map(entries, T::from_wire),
            _ => Err(Error::type_mismatch("object", value)),
        }
    }

    fn to_wire(&self) -> Value {
        let entries: Map<String, Value> = mapping_map(self, T::to_wire).into_iter().collect();
        Value::Object(entries)
    }

    fn kind() -> ValueKind {
        ValueKind::Map(Box::new(T::kind()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sequence_map_preserves_order() {
        let out = sequence_map(vec!["a", "bb", "ccc"], str::len);
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_try_sequence_map_reports_index() {
        let wire = json!([1, 2, "three"]);
        let err = Vec::<i64>::from_wire(&wire).unwrap_err();
        assert_eq!(err.path(), Some("/2"));
    }

    #[test]
    fn test_nested_lists() {
        let wire = json!([[1, 2], [], [3]]);
        let grid = Vec::<Vec<i64>>::from_wire(&wire).unwrap();
        assert_eq!(grid, vec![vec![1, 2], vec![], vec![3]]);
        assert_eq!(grid.to_wire(), wire);
    }

    #[test]
    fn test_mapping_roundtrip() {
        let wire = json!({"a": [1.5], "b": [], "c": [2, 3.25]});
        let dict = Dict::<Vec<f64>>::from_wire(&wire).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.get("c"), Some(&vec![2.0, 3.25]));
        assert_eq!(dict.to_wire(), wire);
    }

    #[test]
    fn test_try_mapping_map_reports_key() {
        let wire = json!({"ok": [true], "bad": [true, null]});
        let err = Dict::<Vec<bool>>::from_wire(&wire).unwrap_err();
        assert_eq!(err.path(), Some("/bad/1"));
    }

    #[test]
    fn test_wrong_container_shape() {
        assert!(Vec::<i64>::from_wire(&json!({"a": 1})).is_err());
        assert!(Dict::<i64>::from_wire(&json!([1])).is_err());
        assert!(Vec::<i64>::from_wire(&Value::Null).is_err());
    }

    #[test]
    fn test_nullable_elements() {
        let wire = json!([1, null, 3]);
        let items = Vec::<Option<i64>>::from_wire(&wire).unwrap();
        assert_eq!(items, vec![Some(1), None, Some(3)]);
        assert_eq!(items.to_wire(), wire);
    }

    #[test]
    fn test_clone_is_independent() {
        let original: Dict<Vec<String>> = [("k".to_string(), vec!["a".to_string()])]
            .into_iter()
            .collect();
        let mut copy = original.clone();
        copy.get_mut("k").unwrap().push("b".to_string());
        copy.insert("other".to_string(), Vec::new());
        assert_eq!(original.get("k").map(Vec::len), Some(1));
        assert!(!original.contains_key("other"));
    }
}
