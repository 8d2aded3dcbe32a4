//! The codec seam shared by every bindable type.
//!
//! [`Wire`] is the adapter pair every scalar, container, enum and record
//! implements: `from_wire` decodes a borrowed JSON value into an owned Rust
//! value, `to_wire` encodes it back. Decoding never keeps a reference into
//! the input tree; every extracted value is copied or adapted.
//!
//! Cloning is plain [`Clone`]. All bindable types own their storage, so a
//! clone shares nothing with its source.
//!
//! ## Nullable values
//!
//! `Option<T>` is the nullable form of any `T`: wire `null` decodes to
//! `None`, and `None` encodes to `null`. Cloning `None` never touches `T`.
//!
//! ```rust
//! use wirebind::Wire;
//! use serde_json::{json, Value};
//!
//! let value: Option<i64> = Wire::from_wire(&Value::Null).unwrap();
//! assert_eq!(value, None);
//! assert_eq!(Some(5i64).to_wire(), json!(5));
//! ```

use crate::Result;
use serde_json::Value;
use std::fmt;

/// A type with a fixed JSON wire representation.
pub trait Wire: Clone + Sized {
    /// Decodes `value` into an owned instance.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` does not have the shape this type expects.
    fn from_wire(value: &Value) -> Result<Self>;

    /// Encodes this value as wire JSON.
    fn to_wire(&self) -> Value;

    /// Describes this type's wire shape.
    fn kind() -> ValueKind;
}

/// The wire shape of a bound type, as reported by field descriptors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    /// Any JSON number (`f64`/`f32`).
    Number,
    /// Whole JSON numbers only.
    Integer,
    String,
    /// Pass-through JSON of unknown shape.
    Json,
    /// Whole seconds since the Unix epoch.
    Timestamp,
    /// A closed enum, by type name.
    Enum(&'static str),
    /// A nested record, by type name.
    Record(&'static str),
    List(Box<ValueKind>),
    Map(Box<ValueKind>),
    Nullable(Box<ValueKind>),
}

impl ValueKind {
    /// Returns `true` if wire `null` is a valid value of this kind.
    #[must_use]
    pub fn accepts_null(&self) -> bool {
        matches!(self, ValueKind::Nullable(_) | ValueKind::Json | ValueKind::Enum(_))
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::Number => write!(f, "number"),
            ValueKind::Integer => write!(f, "int"),
            ValueKind::String => write!(f, "string"),
            ValueKind::Json => write!(f, "json"),
            ValueKind::Timestamp => write!(f, "Date"),
            ValueKind::Enum(name) | ValueKind::Record(name) => write!(f, "{}", name),
            ValueKind::List(item) => write!(f, "list<{}>", item),
            ValueKind::Map(item) => write!(f, "dict<{}>", item),
            ValueKind::Nullable(inner) => write!(f, "?{}", inner),
        }
    }
}

impl<T: Wire> Wire for Option<T> {
    fn from_wire(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_wire(other).map(Some),
        }
    }

    fn to_wire(&self) -> Value {
        match self {
            Some(inner) => inner.to_wire(),
            None => Value::Null,
        }
    }

    fn kind() -> ValueKind {
        ValueKind::Nullable(Box::new(T::kind()))
    }
}

impl<T: Wire> Wire for Box<T> {
    fn from_wire(value: &Value) -> Result<Self> {
        T::from_wire(value).map(Box::new)
    }

    fn to_wire(&self) -> Value {
        (**self).to_wire()
    }

    fn kind() -> ValueKind {
        T::kind()
    }
}

/// Serde adapter that routes a field through its wire codec.
///
/// Records and enums declared with the crate macros already implement
/// `Serialize`/`Deserialize` this way; use the module directly for other
/// `Wire` types inside serde-derived structs:
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use wirebind::Timestamp;
///
/// #[derive(Serialize, Deserialize)]
/// struct Envelope {
///     #[serde(with = "wirebind::wire::as_wire")]
///     sent: Timestamp,
/// }
///
/// let envelope: Envelope = serde_json::from_str(r#"{"sent": 60}"#).unwrap();
/// assert_eq!(envelope.sent.timestamp_millis(), 60_000);
/// ```
pub mod as_wire {
    use super::Wire;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Wire,
        S: Serializer,
    {
        value.to_wire().serialize(serializer)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Wire,
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        T::from_wire(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_option_null_roundtrip() {
        let none: Option<bool> = Wire::from_wire(&Value::Null).unwrap();
        assert_eq!(none, None);
        assert_eq!(none.to_wire(), Value::Null);

        let some: Option<bool> = Wire::from_wire(&json!(true)).unwrap();
        assert_eq!(some, Some(true));
        assert_eq!(some.to_wire(), json!(true));
    }

    #[test]
    fn test_option_propagates_shape_errors() {
        let result: Result<Option<bool>> = Wire::from_wire(&json!("yes"));
        assert!(result.is_err());
    }

    #[test]
    fn test_kind_display() {
        let kind = ValueKind::Map(Box::new(ValueKind::List(Box::new(ValueKind::Record(
            "Complex",
        )))));
        assert_eq!(kind.to_string(), "dict<list<Complex>>");
        assert_eq!(<Option<i64>>::kind().to_string(), "?int");
    }

    #[test]
    fn test_accepts_null() {
        assert!(<Option<String>>::kind().accepts_null());
        assert!(!String::kind().accepts_null());
        assert!(ValueKind::Json.accepts_null());
    }
}
