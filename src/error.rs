//! Error types for wire decoding and encoding.
//!
//! Decoding is the only direction that can fail. Encoding a typed value into
//! wire JSON is infallible; text output can still fail on I/O.
//!
//! ## Error Categories
//!
//! - **Missing fields**: a required key is absent from the wire object
//! - **Type mismatches**: a wire value has the wrong JSON shape for its field
//! - **Invalid records**: the wire value for a record is not an object
//! - **JSON / I/O errors**: text parsing or writer failures
//!
//! Unknown enum tags are never errors; they decode to the enum's sentinel.
//!
//! ## Error Context
//!
//! Nested decode failures carry a JSON-pointer style path to the offending
//! value, built as the error unwinds through records and containers:
//!
//! ```rust
//! use wirebind::{from_value, Error};
//! use serde_json::json;
//!
//! let err = from_value::<Vec<Vec<bool>>>(&json!([[true], [false, 3]])).unwrap_err();
//! assert_eq!(err.path(), Some("/1/1"));
//! assert!(err.to_string().contains("expected boolean"));
//! ```

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while binding wire JSON.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed JSON text
    #[error("JSON syntax error: {0}")]
    Json(String),

    /// A required key is absent from the wire object
    #[error("missing required field `{key}` in {record}{}", display_path(.path))]
    MissingField {
        record: String,
        key: String,
        path: String,
    },

    /// The wire value has the wrong JSON shape
    #[error("type mismatch at {}: expected {expected}, found {found}", root_path(.path))]
    TypeMismatch {
        path: String,
        expected: String,
        found: String,
    },

    /// A record could not be built from the wire value
    #[error("invalid {record}{}: {reason}", display_path(.path))]
    InvalidRecord {
        record: String,
        reason: String,
        path: String,
    },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" at {}", path)
    }
}

fn root_path(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

impl Error {
    /// Creates a missing-field error for a required key of `record`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wirebind::Error;
    ///
    /// let err = Error::missing_field("Account", "user_id");
    /// assert!(err.to_string().contains("`user_id`"));
    /// ```
    pub fn missing_field(record: &str, key: &str) -> Self {
        Error::MissingField {
            record: record.to_string(),
            key: key.to_string(),
            path: String::new(),
        }
    }

    /// Creates a type mismatch error, describing `found` by its JSON shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wirebind::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::type_mismatch("string", &json!(42));
    /// assert!(err.to_string().contains("expected string, found number"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &Value) -> Self {
        Error::TypeMismatch {
            path: String::new(),
            expected: expected.to_string(),
            found: json_kind(found).to_string(),
        }
    }

    /// Creates an error for a record whose wire value cannot be bound.
    pub fn invalid_record(record: &str, reason: &str) -> Self {
        Error::InvalidRecord {
            record: record.to_string(),
            reason: reason.to_string(),
            path: String::new(),
        }
    }

    /// Creates a JSON syntax error.
    pub fn json(msg: &str) -> Self {
        Error::Json(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wirebind::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Prefixes the error path with an object key.
    ///
    /// Called while unwinding, so the outermost key ends up first.
    #[must_use]
    pub fn in_field(self, key: &str) -> Self {
        self.prefix_path(&escape_pointer(key))
    }

    /// Prefixes the error path with a sequence index.
    #[must_use]
    pub fn at_index(self, index: usize) -> Self {
        self.prefix_path(&index.to_string())
    }

    /// Returns the path to the offending value, if the error carries one.
    ///
    /// The root value has path `""`, which is reported as `None`.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::MissingField { path, .. }
            | Error::TypeMismatch { path, .. }
            | Error::InvalidRecord { path, .. }
                if !path.is_empty() =>
            {
                Some(path)
            }
            _ => None,
        }
    }

    fn prefix_path(mut self, segment: &str) -> Self {
        match &mut self {
            Error::MissingField { path, .. }
            | Error::TypeMismatch { path, .. }
            | Error::InvalidRecord { path, .. } => {
                path.insert_str(0, segment);
                path.insert(0, '/');
            }
            _ => {}
        }
        self
    }
}

// RFC 6901 escaping so keys containing '/' stay unambiguous.
fn escape_pointer(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

/// Short name of a JSON value's shape, used in mismatch messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.to_string())
        } else {
            Error::Json(err.to_string())
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
