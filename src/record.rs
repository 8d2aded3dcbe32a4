//! Record decoding and encoding driven by per-field optionality regimes.
//!
//! A record is a named, ordered set of fields. Each field has a Rust name, a
//! fixed wire key and one of three [`Regime`]s:
//!
//! | Regime | Rust type | Decode | Encode |
//! |--------|-----------|--------|--------|
//! | required | `T` | key must exist | always emitted |
//! | nullable | `Option<T>` | absent or `null` → `None` | always emitted, `null` for `None` |
//! | partial | [`Partial<T>`] | absent → unset, `null` → explicit null | emitted only if assigned |
//!
//! [`ObjectReader`] and [`ObjectWriter`] implement the regimes once; the
//! [`wire_record!`](crate::wire_record) macro emits a [`Record`] impl that
//! calls them field by field, in declaration order.
//!
//! Decoding builds the record from scratch and returns it only when every
//! field succeeded, so a failed decode never exposes a half-built record.

use crate::{Error, Partial, Result, ValueKind, Wire};
use serde_json::{Map, Value};
use std::fmt;

/// How a field treats absence and `null`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Regime {
    Required,
    Nullable,
    Partial,
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regime::Required => write!(f, "required"),
            Regime::Nullable => write!(f, "nullable"),
            Regime::Partial => write!(f, "partial"),
        }
    }
}

/// Static description of one record field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Rust field name.
    pub name: &'static str,
    /// Wire key.
    pub key: &'static str,
    pub regime: Regime,
    /// Wire shape of the field's value, ignoring the regime.
    pub kind: ValueKind,
    pub description: &'static str,
}

/// Static description of a record type: its name and fields in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    /// Looks up a field by wire key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Looks up a field by Rust name.
    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Wire keys in declaration order.
    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.key).collect()
    }

    /// Wire keys that every encoding contains (required and nullable).
    #[must_use]
    pub fn always_emitted_keys(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|field| field.regime != Regime::Partial)
            .map(|field| field.key)
            .collect()
    }

    /// Returns `true` if the record has at least one partial field.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.fields.iter().any(|field| field.regime == Regime::Partial)
    }
}

/// A record type with a fixed field layout.
///
/// Usually implemented through [`wire_record!`](crate::wire_record).
pub trait Record: Wire {
    /// Type name, as reported in errors and descriptors.
    const NAME: &'static str;

    /// Field layout in declaration order.
    fn descriptor() -> RecordDescriptor;

    /// Decodes the record from a wire object.
    ///
    /// # Errors
    ///
    /// Fails on a missing required key or a wrongly shaped value; unknown
    /// keys are ignored.
    fn from_json(object: &Map<String, Value>) -> Result<Self>;

    /// Encodes the record as a wire object, keys in declaration order.
    fn to_json(&self) -> Map<String, Value>;

    /// Wire keys of the partial fields that have been assigned.
    fn assigned_keys(&self) -> Vec<&'static str>;
}

/// Decodes any record from a wire value, which must be an object.
///
/// # Errors
///
/// Returns [`Error::InvalidRecord`] for non-object values, otherwise any
/// error from [`Record::from_json`].
pub fn decode_record<R: Record>(value: &Value) -> Result<R> {
    match value {
        Value::Object(object) => {
            tracing::trace!(record = R::NAME, keys = object.len(), "decoding record");
            R::from_json(object)
        }
        other => Err(Error::invalid_record(
            R::NAME,
            &format!("expected object, found {}", crate::error::json_kind(other)),
        )),
    }
}

/// Encodes any record as a wire value.
pub fn encode_record<R: Record>(record: &R) -> Value {
    tracing::trace!(record = R::NAME, "encoding record");
    Value::Object(record.to_json())
}

/// Reads fields out of a wire object according to their regime.
///
/// Every error is tagged with the field's key.
pub struct ObjectReader<'a> {
    record: &'static str,
    object: &'a Map<String, Value>,
}

impl<'a> ObjectReader<'a> {
    pub fn new(record: &'static str, object: &'a Map<String, Value>) -> Self {
        ObjectReader { record, object }
    }

    /// Reads a field that must be present.
    ///
    /// # Errors
    ///
    /// Fails if the key is absent or its value does not decode as `T`.
    pub fn required<T: Wire>(&self, key: &str) -> Result<T> {
        let value = self
            .object
            .get(key)
            .ok_or_else(|| Error::missing_field(self.record, key))?;
        T::from_wire(value).map_err(|e| e.in_field(key))
    }

    /// Reads a field that may be absent or `null`.
    ///
    /// # Errors
    ///
    /// Fails if a present, non-null value does not decode as `T`.
    pub fn nullable<T: Wire>(&self, key: &str) -> Result<Option<T>> {
        match self.object.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::from_wire(value).map(Some).map_err(|e| e.in_field(key)),
        }
    }

    /// Reads a field whose presence is tracked.
    ///
    /// # Errors
    ///
    /// Fails if a present, non-null value does not decode as `T`.
    pub fn partial<T: Wire>(&self, key: &str) -> Result<Partial<T>> {
        Partial::from_wire_entry(self.object.get(key)).map_err(|e| e.in_field(key))
    }
}

/// Builds a wire object field by field according to each regime.
#[derive(Debug, Default)]
pub struct ObjectWriter {
    object: Map<String, Value>,
}

impl ObjectWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits a required field.
    pub fn required<T: Wire>(&mut self, key: &str, value: &T) {
        self.object.insert(key.to_string(), value.to_wire());
    }

    /// Emits a nullable field, as `null` when it holds no value.
    pub fn nullable<T: Wire>(&mut self, key: &str, value: &Option<T>) {
        self.object.insert(key.to_string(), value.to_wire());
    }

    /// Emits a partial field only if it was assigned.
    pub fn partial<T: Wire>(&mut self, key: &str, value: &Partial<T>) {
        if let Some(wire) = value.to_wire_entry() {
            self.object.insert(key.to_string(), wire);
        }
    }

    /// Returns the finished object.
    #[must_use]
    pub fn finish(self) -> Map<String, Value> {
        self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_required_missing_key() {
        let map = object(json!({"other": 1}));
        let reader = ObjectReader::new("Sample", &map);
        let err = reader.required::<i64>("count").unwrap_err();
        assert_eq!(err, Error::missing_field("Sample", "count"));
    }

    #[test]
    fn test_required_wrong_shape_has_path() {
        let map = object(json!({"count": "ten"}));
        let reader = ObjectReader::new("Sample", &map);
        let err = reader.required::<i64>("count").unwrap_err();
        assert_eq!(err.path(), Some("/count"));
    }

    #[test]
    fn test_nullable_absent_and_null() {
        let map = object(json!({"a": null, "b": 2}));
        let reader = ObjectReader::new("Sample", &map);
        assert_eq!(reader.nullable::<i64>("a").unwrap(), None);
        assert_eq!(reader.nullable::<i64>("b").unwrap(), Some(2));
        assert_eq!(reader.nullable::<i64>("c").unwrap(), None);
    }

    #[test]
    fn test_partial_three_states() {
        let map = object(json!({"a": null, "b": 2}));
        let reader = ObjectReader::new("Sample", &map);
        assert!(reader.partial::<i64>("a").unwrap().is_null());
        assert_eq!(reader.partial::<i64>("b").unwrap().get(), Some(&2));
        assert!(!reader.partial::<i64>("c").unwrap().is_present());
    }

    #[test]
    fn test_writer_regimes() {
        let mut writer = ObjectWriter::new();
        writer.required("a", &1i64);
        writer.nullable::<i64>("b", &None);
        writer.partial::<i64>("c", &Partial::unset());
        writer.partial::<i64>("d", &Partial::null());
        writer.partial("e", &Partial::value(true));
        let out = Value::Object(writer.finish());
        assert_eq!(out, json!({"a": 1, "b": null, "d": null, "e": true}));
    }

    #[test]
    fn test_writer_keeps_declaration_order() {
        let mut writer = ObjectWriter::new();
        writer.required("zeta", &1i64);
        writer.required("alpha", &2i64);
        let keys: Vec<_> = writer.finish().keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_descriptor_queries() {
        let descriptor = RecordDescriptor {
            name: "Sample",
            description: "",
            fields: vec![
                FieldDescriptor {
                    name: "count",
                    key: "count",
                    regime: Regime::Required,
                    kind: ValueKind::Integer,
                    description: "",
                },
                FieldDescriptor {
                    name: "next_page",
                    key: "next_page",
                    regime: Regime::Partial,
                    kind: ValueKind::String,
                    description: "",
                },
            ],
        };
        assert_eq!(descriptor.keys(), vec!["count", "next_page"]);
        assert_eq!(descriptor.always_emitted_keys(), vec!["count"]);
        assert!(descriptor.is_partial());
        assert_eq!(descriptor.field("next_page").map(|f| f.regime), Some(Regime::Partial));
        assert!(descriptor.field_by_name("missing").is_none());
    }
}
