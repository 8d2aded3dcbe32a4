//! # wirebind
//!
//! Typed JSON data binding for code that talks to remote APIs.
//!
//! ## What is it?
//!
//! `wirebind` converts typed records between Rust values and a JSON wire
//! format, tolerating the wire's looser shape: missing keys, unknown enum
//! tags and nullable fields. Every record and enum follows one contract for
//! decoding, encoding and cloning.
//!
//! ## Key Features
//!
//! - **Three optionality regimes**: required, nullable and partial fields,
//!   where partial fields remember whether they were ever assigned
//! - **Forward-compatible enums**: unknown tags decode to a `Null` sentinel
//!   instead of failing
//! - **Composable containers**: lists and string-keyed dictionaries nest to
//!   any depth, with error paths pointing at the failing element
//! - **Exact wire conventions**: snake_case keys fixed per field, timestamps
//!   as whole epoch seconds rounded up, pass-through JSON left untouched
//! - **Serde compatible**: generated types implement `Serialize` and
//!   `Deserialize`
//!
//! ## Quick Start
//!
//! ```rust
//! use wirebind::{from_str, to_string, wire_enum, wire_record, Timestamp};
//!
//! wire_enum! {
//!     pub enum Status {
//!         Active = "active" => "In use",
//!         Retired = "retired",
//!     }
//! }
//!
//! wire_record! {
//!     pub struct Device {
//!         required id: i64 = "id",
//!         required status: Status = "status",
//!         required seen_at: Timestamp = "seen_at",
//!         nullable owner: String = "owner",
//!         partial note: String = "note",
//!     }
//! }
//!
//! let device: Device = from_str(
//!     r#"{"id": 7, "status": "paused", "seen_at": 1700000000, "owner": null}"#,
//! )
//! .unwrap();
//!
//! // Unknown tag: sentinel, not an error.
//! assert_eq!(device.status, Status::Null);
//! // Absent partial key stays absent on the way out.
//! assert_eq!(
//!     to_string(&device).unwrap(),
//!     r#"{"id":7,"status":null,"seen_at":1700000000,"owner":null}"#
//! );
//! ```
//!
//! ## Partial Records
//!
//! ```rust
//! use wirebind::{to_value, wire_record};
//! use serde_json::json;
//!
//! wire_record! {
//!     pub struct ProfilePatch {
//!         partial display_name: String = "display_name",
//!         partial avatar_url: String = "avatar_url",
//!     }
//! }
//!
//! let mut patch = ProfilePatch::default();
//! assert_eq!(to_value(&patch), json!({}));
//!
//! patch.avatar_url.set_null();
//! assert_eq!(to_value(&patch), json!({"avatar_url": null}));
//! ```
//!
//! ## Cloning
//!
//! Every bound type owns its storage, so `clone()` is a deep copy: mutating
//! a cloned list, map, nested record, pass-through JSON tree or timestamp
//! never affects the original. Partial fields keep their presence state.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber:
//! `debug` when an enum value falls back to its sentinel or a top-level
//! decode fails, `trace` per record decoded or encoded.
//!
//! ## Format Reference
//!
//! See the [`format`] module for the wire conventions in full.

pub mod container;
pub mod enumeration;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod presence;
pub mod record;
pub mod scalar;
pub mod wire;

pub use enumeration::{select_options_json, EnumEntry, SelectOption, WireEnum};
pub use error::{Error, Result};
pub use map::Dict;
pub use options::{OptionKey, OptionLabels, WireOptions};
pub use presence::Partial;
pub use record::{FieldDescriptor, Record, RecordDescriptor, Regime};
pub use scalar::{Json, Timestamp};
pub use wire::{ValueKind, Wire};

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;

    /// Unset partial field for macro-generated `Default` impls.
    #[must_use]
    pub fn unset_partial<T>() -> crate::Partial<T> {
        crate::Partial::unset()
    }
}

use serde_json::Value;
use std::io;

/// Decode any `T: Wire` from a wire JSON value.
///
/// The result owns all of its data; later changes to `value` cannot affect it.
///
/// # Examples
///
/// ```rust
/// use wirebind::from_value;
/// use serde_json::json;
///
/// let ids: Vec<i64> = from_value(&json!([1, 2, 3])).unwrap();
/// assert_eq!(ids, vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Returns an error if the value does not have the shape `T` expects.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T: Wire>(value: &Value) -> Result<T> {
    T::from_wire(value).map_err(|err| {
        tracing::debug!(
            kind = %T::kind(),
            path = err.path().unwrap_or("/"),
            error = %err,
            "wire decode failed"
        );
        err
    })
}

/// Encode any `T: Wire` as a wire JSON value.
///
/// # Examples
///
/// ```rust
/// use wirebind::{to_value, Timestamp};
/// use serde_json::json;
///
/// let ts = Timestamp::from_seconds(90).unwrap();
/// assert_eq!(to_value(&ts), json!(90));
/// ```
#[must_use]
pub fn to_value<T: Wire>(value: &T) -> Value {
    value.to_wire()
}

/// Decode an instance of type `T` from a string of JSON text.
///
/// # Examples
///
/// ```rust
/// use wirebind::{from_str, Dict};
///
/// let counts: Dict<i64> = from_str(r#"{"a": 1, "b": 2}"#).unwrap();
/// assert_eq!(counts.get("b"), Some(&2));
/// ```
///
/// # Errors
///
/// Returns an error if the text is not valid JSON or does not decode as `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T: Wire>(s: &str) -> Result<T> {
    let value: Value = serde_json::from_str(s)?;
    from_value(&value)
}

/// Decode an instance of type `T` from bytes of JSON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid JSON or do not decode as `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T: Wire>(v: &[u8]) -> Result<T> {
    let value: Value = serde_json::from_slice(v)?;
    from_value(&value)
}

/// Decode an instance of type `T` from an I/O stream of JSON text.
///
/// # Examples
///
/// ```rust
/// use wirebind::from_reader;
/// use std::io::Cursor;
///
/// let flags: Vec<bool> = from_reader(Cursor::new(b"[true, false]")).unwrap();
/// assert_eq!(flags, vec![true, false]);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid JSON, or it
/// does not decode as `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: Wire,
{
    let value: Value = serde_json::from_reader(reader)?;
    from_value(&value)
}

/// Encode any `T: Wire` as compact JSON text.
///
/// # Errors
///
/// Returns an error only if the JSON writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T: Wire>(value: &T) -> Result<String> {
    to_string_with_options(value, WireOptions::default())
}

/// Encode any `T: Wire` as pretty-printed JSON text.
///
/// # Errors
///
/// Returns an error only if the JSON writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T: Wire>(value: &T) -> Result<String> {
    to_string_with_options(value, WireOptions::pretty())
}

/// Encode any `T: Wire` as JSON text laid out per `options`.
///
/// # Errors
///
/// Returns an error only if the JSON writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T: Wire>(value: &T, options: WireOptions) -> Result<String> {
    let mut buffer = Vec::with_capacity(128);
    to_writer_with_options(&mut buffer, value, options)?;
    String::from_utf8(buffer).map_err(|e| Error::custom(e.to_string()))
}

/// Encode any `T: Wire` as compact JSON text into a writer.
///
/// # Examples
///
/// ```rust
/// use wirebind::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec![Some(1i64), None]).unwrap();
/// assert_eq!(buffer, b"[1,null]");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: Wire,
{
    to_writer_with_options(writer, value, WireOptions::default())
}

/// Encode any `T: Wire` as JSON text into a writer, laid out per `options`.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(writer: W, value: &T, options: WireOptions) -> Result<()>
where
    W: io::Write,
    T: Wire,
{
    use serde::Serialize;

    let wire = value.to_wire();
    if options.pretty {
        let indent = " ".repeat(options.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        wire.serialize(&mut serializer)?;
    } else {
        let mut serializer = serde_json::Serializer::new(writer);
        wire.serialize(&mut serializer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    wire_enum! {
        enum Tone {
            Calm = "calm",
            Loud = "loud",
        }
    }

    wire_record! {
        struct Point {
            required x: i64 = "x",
            required y: i64 = "y",
        }
    }

    wire_record! {
        struct Shape {
            required name: String = "name",
            required points: Vec<Point> = "points",
            nullable tone: Tone = "tone",
        }
    }

    #[test]
    fn test_from_str_to_string() {
        let text = r#"{"name":"tri","points":[{"x":0,"y":0},{"x":1,"y":2}],"tone":"calm"}"#;
        let shape: Shape = from_str(text).unwrap();
        assert_eq!(shape.points.len(), 2);
        assert_eq!(shape.tone, Some(Tone::Calm));
        assert_eq!(to_string(&shape).unwrap(), text);
    }

    #[test]
    fn test_pretty_printing() {
        let point = Point { x: 1, y: 2 };
        let text = to_string_pretty(&point).unwrap();
        assert_eq!(text, "{\n  \"x\": 1,\n  \"y\": 2\n}");
        let back: Point = from_str(&text).unwrap();
        assert_eq!(back, point);
    }

    #[test]
    fn test_custom_indent() {
        let options = WireOptions::pretty().with_indent(0);
        let text = to_string_with_options(&vec![1i64], options).unwrap();
        assert_eq!(text, "[\n1\n]");
    }

    #[test]
    fn test_syntax_error() {
        let err = from_str::<Point>("{\"x\": 1,").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_from_slice() {
        let point: Point = from_slice(br#"{"x": -1, "y": 4}"#).unwrap();
        assert_eq!(point, Point { x: -1, y: 4 });
    }

    #[test]
    fn test_decode_does_not_borrow_input() {
        let mut wire = json!({"name": "sq", "points": [{"x": 1, "y": 1}], "tone": null});
        let shape: Shape = from_value(&wire).unwrap();
        wire["points"][0]["x"] = json!(99);
        wire["name"] = json!("changed");
        assert_eq!(shape.points[0].x, 1);
        assert_eq!(shape.name, "sq");
    }

    #[test]
    fn test_nested_error_path() {
        let wire = json!({"name": "bad", "points": [{"x": 1, "y": 1}, {"x": 2}], "tone": null});
        let err = from_value::<Shape>(&wire).unwrap_err();
        assert!(matches!(err, Error::MissingField { .. }));
        assert_eq!(err.path(), Some("/points/1"));
    }
}
