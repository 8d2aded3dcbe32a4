//! Scalar adapters between wire JSON primitives and Rust scalars.
//!
//! ## Scalar Kinds
//!
//! | Wire | Rust | Notes |
//! |------|------|-------|
//! | `true` / `false` | `bool` | identity |
//! | number | `f64`, `f32` | any JSON number; whole values encode as integers |
//! | number | `i64`, `i32`, `u32`, `u64`, ... | whole numbers only; `3.0` is accepted |
//! | string | `String` | identity |
//! | anything | [`Json`] | passed through unexamined |
//! | number | [`Timestamp`] | whole seconds since the Unix epoch |
//!
//! ## Timestamps
//!
//! Decoding multiplies wire seconds by 1000 to build a millisecond instant.
//! Encoding divides the instant's milliseconds by 1000 and rounds **up**:
//!
//! ```rust
//! use wirebind::{Timestamp, Wire};
//! use serde_json::json;
//!
//! let ts = Timestamp::from_wire(&json!(1000)).unwrap();
//! assert_eq!(ts.timestamp_millis(), 1_000_000);
//! assert_eq!(ts.to_wire(), json!(1000));
//!
//! let late = Timestamp::from_millis(1_000_001).unwrap();
//! assert_eq!(late.to_wire(), json!(1001));
//! ```

use crate::error::json_kind;
use crate::{Error, Result, ValueKind, Wire};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;
use std::ops::{Deref, DerefMut};

impl Wire for bool {
    fn from_wire(value: &Value) -> Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| Error::type_mismatch("boolean", value))
    }

    fn to_wire(&self) -> Value {
        Value::Bool(*self)
    }

    fn kind() -> ValueKind {
        ValueKind::Bool
    }
}

impl Wire for String {
    fn from_wire(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s.clone()),
            _ => Err(Error::type_mismatch("string", value)),
        }
    }

    fn to_wire(&self) -> Value {
        Value::String(self.clone())
    }

    fn kind() -> ValueKind {
        ValueKind::String
    }
}

impl Wire for f64 {
    fn from_wire(value: &Value) -> Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| Error::type_mismatch("number", value))
    }

    // Whole values encode as JSON integers so `5` decodes and re-encodes as
    // `5`, not `5.0`. Non-finite floats have no JSON form and encode as null.
    fn to_wire(&self) -> Value {
        let f = *self;
        if f.is_finite() && f.fract() == 0.0 {
            if f >= i64::MIN as f64 && f < i64::MAX as f64 {
                return Value::from(f as i64);
            }
            if f >= 0.0 && f < u64::MAX as f64 {
                return Value::from(f as u64);
            }
        }
        Number::from_f64(f).map_or(Value::Null, Value::Number)
    }

    fn kind() -> ValueKind {
        ValueKind::Number
    }
}

impl Wire for f32 {
    fn from_wire(value: &Value) -> Result<Self> {
        f64::from_wire(value).map(|f| f as f32)
    }

    // Widen through the shortest decimal form so 0.1f32 encodes as 0.1.
    fn to_wire(&self) -> Value {
        self.to_string()
            .parse::<f64>()
            .map_or(Value::Null, |f| f.to_wire())
    }

    fn kind() -> ValueKind {
        ValueKind::Number
    }
}

/// Reads a whole number as `i128`, accepting whole-valued floats.
fn whole_number(value: &Value) -> Option<i128> {
    let number = match value {
        Value::Number(n) => n,
        _ => return None,
    };
    if let Some(i) = number.as_i64() {
        return Some(i128::from(i));
    }
    if let Some(u) = number.as_u64() {
        return Some(i128::from(u));
    }
    let f = number.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= u64::MAX as f64 {
        Some(f as i128)
    } else {
        None
    }
}

macro_rules! integer_wire {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Wire for $ty {
                fn from_wire(value: &Value) -> Result<Self> {
                    whole_number(value)
                        .and_then(|n| <$ty>::try_from(n).ok())
                        .ok_or_else(|| Error::type_mismatch(stringify!($ty), value))
                }

                fn to_wire(&self) -> Value {
                    Value::from(*self)
                }

                fn kind() -> ValueKind {
                    ValueKind::Integer
                }
            }
        )*
    };
}

integer_wire!(i8, i16, i32, i64, u8, u16, u32, u64);

/// Pass-through JSON of unknown shape.
///
/// Decoding and encoding copy the value unexamined. Because the codec cannot
/// know the shape, `clone` copies the whole tree; nested arrays and objects
/// of a clone share no storage with the source.
///
/// # Examples
///
/// ```rust
/// use wirebind::{Json, Wire};
/// use serde_json::json;
///
/// let original = Json::from_wire(&json!({"tags": ["a", "b"]})).unwrap();
/// let mut copy = original.clone();
/// copy["tags"][0] = json!("z");
///
/// assert_eq!(original["tags"][0], json!("a"));
/// ```
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Json(pub Value);

impl Json {
    /// Wraps a JSON value.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Json(value)
    }

    /// Unwraps the inner JSON value.
    #[must_use]
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl Deref for Json {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.0
    }
}

impl DerefMut for Json {
    fn deref_mut(&mut self) -> &mut Value {
        &mut self.0
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        Json(value)
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        json.0
    }
}

impl Wire for Json {
    fn from_wire(value: &Value) -> Result<Self> {
        Ok(Json(value.clone()))
    }

    fn to_wire(&self) -> Value {
        self.0.clone()
    }

    fn kind() -> ValueKind {
        ValueKind::Json
    }
}

impl Wire for Value {
    fn from_wire(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }

    fn to_wire(&self) -> Value {
        self.clone()
    }

    fn kind() -> ValueKind {
        ValueKind::Json
    }
}

/// A calendar instant with millisecond resolution, carried on the wire as
/// whole seconds since the Unix epoch.
///
/// The default value is the epoch itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Builds an instant from milliseconds since the epoch.
    ///
    /// Returns `None` when the value is outside chrono's representable range.
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Timestamp)
    }

    /// Builds an instant from whole seconds since the epoch.
    #[must_use]
    pub fn from_seconds(seconds: i64) -> Option<Self> {
        seconds.checked_mul(1000).and_then(Self::from_millis)
    }

    /// Milliseconds since the epoch; sub-millisecond precision is dropped.
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Whole seconds since the epoch, rounded up.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wirebind::Timestamp;
    ///
    /// assert_eq!(Timestamp::from_millis(5_000).unwrap().wire_seconds(), 5);
    /// assert_eq!(Timestamp::from_millis(5_001).unwrap().wire_seconds(), 6);
    /// assert_eq!(Timestamp::from_millis(-1_500).unwrap().wire_seconds(), -1);
    /// ```
    #[must_use]
    pub fn wire_seconds(&self) -> i64 {
        let millis = self.timestamp_millis();
        let seconds = millis.div_euclid(1000);
        if millis.rem_euclid(1000) > 0 {
            seconds + 1
        } else {
            seconds
        }
    }

    /// Returns the underlying chrono instant.
    #[must_use]
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Replaces the instant in place.
    pub fn set(&mut self, instant: DateTime<Utc>) {
        self.0 = instant;
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Timestamp(instant)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl Wire for Timestamp {
    fn from_wire(value: &Value) -> Result<Self> {
        let number = match value {
            Value::Number(n) => n,
            _ => return Err(Error::type_mismatch("seconds since epoch", value)),
        };
        let millis = match number.as_i64() {
            Some(seconds) => seconds.checked_mul(1000),
            // Fractional seconds keep whole milliseconds only.
            None => number
                .as_f64()
                .map(|f| (f * 1000.0).trunc())
                .filter(|ms| ms.is_finite() && ms.abs() < i64::MAX as f64)
                .map(|ms| ms as i64),
        };
        millis
            .and_then(Timestamp::from_millis)
            .ok_or_else(|| Error::TypeMismatch {
                path: String::new(),
                expected: "timestamp within range".to_string(),
                found: format!("{} {}", json_kind(value), number),
            })
    }

    fn to_wire(&self) -> Value {
        Value::from(self.wire_seconds())
    }

    fn kind() -> ValueKind {
        ValueKind::Timestamp
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.wire_seconds())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Timestamp::from_wire(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bool() {
        assert!(bool::from_wire(&json!(true)).unwrap());
        assert!(bool::from_wire(&json!(1)).is_err());
        assert_eq!(false.to_wire(), json!(false));
    }

    #[test]
    fn test_string() {
        assert_eq!(String::from_wire(&json!("hi")).unwrap(), "hi");
        assert!(String::from_wire(&Value::Null).is_err());
    }

    #[test]
    fn test_integers() {
        assert_eq!(i64::from_wire(&json!(42)).unwrap(), 42);
        assert_eq!(i64::from_wire(&json!(42.0)).unwrap(), 42);
        assert!(i64::from_wire(&json!(42.5)).is_err());
        assert!(u8::from_wire(&json!(300)).is_err());
        assert!(u32::from_wire(&json!(-1)).is_err());
        assert_eq!(u64::from_wire(&json!(u64::MAX)).unwrap(), u64::MAX);
        assert_eq!(7i32.to_wire(), json!(7));
    }

    #[test]
    fn test_integer_error_names_type() {
        let err = i32::from_wire(&json!("7")).unwrap_err();
        assert!(err.to_string().contains("expected i32, found string"));
    }

    #[test]
    fn test_floats() {
        assert_eq!(f64::from_wire(&json!(3.5)).unwrap(), 3.5);
        assert_eq!(f64::from_wire(&json!(3)).unwrap(), 3.0);
        assert_eq!(2.5f64.to_wire(), json!(2.5));
        assert_eq!(f64::NAN.to_wire(), Value::Null);
        assert_eq!(f32::from_wire(&json!(1.5)).unwrap(), 1.5f32);
    }

    #[test]
    fn test_whole_floats_encode_as_integers() {
        let five = f64::from_wire(&json!(5)).unwrap();
        assert_eq!(five.to_wire(), json!(5));
        assert!(five.to_wire().is_i64());
        assert_eq!((-3.0f64).to_wire(), json!(-3));
        assert_eq!(1e19f64.to_wire(), json!(10_000_000_000_000_000_000u64));
        assert_eq!(1e300f64.to_wire(), json!(1e300));
        assert_eq!(0.5f64.to_wire(), json!(0.5));
    }

    #[test]
    fn test_f32_keeps_shortest_decimal() {
        let tenth = f32::from_wire(&json!(0.1)).unwrap();
        assert_eq!(tenth.to_wire(), json!(0.1));
        assert_eq!(7.0f32.to_wire(), json!(7));
        assert_eq!(f32::INFINITY.to_wire(), Value::Null);
    }

    #[test]
    fn test_json_passthrough() {
        let wire = json!({"a": [1, {"b": null}], "c": "d"});
        let blob = Json::from_wire(&wire).unwrap();
        assert_eq!(blob.to_wire(), wire);
        assert_eq!(Json::from_wire(&Value::Null).unwrap(), Json(Value::Null));
    }

    #[test]
    fn test_json_clone_is_deep() {
        let original = Json(json!({"nested": {"list": [1, 2, 3]}}));
        let mut copy = original.clone();
        copy["nested"]["list"]
            .as_array_mut()
            .unwrap()
            .push(json!(4));
        assert_eq!(original["nested"]["list"], json!([1, 2, 3]));
        assert_eq!(copy["nested"]["list"], json!([1, 2, 3, 4]));
    }

    #[test]
    fn test_timestamp_decode() {
        let ts = Timestamp::from_wire(&json!(1000)).unwrap();
        assert_eq!(ts.timestamp_millis(), 1_000_000);
        assert_eq!(ts.to_wire(), json!(1000));
    }

    #[test]
    fn test_timestamp_fractional_seconds() {
        let ts = Timestamp::from_wire(&json!(1.5)).unwrap();
        assert_eq!(ts.timestamp_millis(), 1500);
        assert_eq!(ts.to_wire(), json!(2));
    }

    #[test]
    fn test_timestamp_ceiling() {
        assert_eq!(Timestamp::from_millis(999).unwrap().wire_seconds(), 1);
        assert_eq!(Timestamp::from_millis(1000).unwrap().wire_seconds(), 1);
        assert_eq!(Timestamp::from_millis(0).unwrap().wire_seconds(), 0);
        assert_eq!(Timestamp::from_millis(-999).unwrap().wire_seconds(), 0);
        assert_eq!(Timestamp::from_millis(-1000).unwrap().wire_seconds(), -1);
    }

    #[test]
    fn test_timestamp_rejects_non_numbers() {
        assert!(Timestamp::from_wire(&json!("1000")).is_err());
        assert!(Timestamp::from_wire(&Value::Null).is_err());
        assert!(Timestamp::from_wire(&json!(i64::MAX)).is_err());
    }

    #[test]
    fn test_timestamp_clone_independent() {
        let original = Timestamp::from_seconds(10).unwrap();
        let mut copy = original;
        copy.set(*Timestamp::from_seconds(20).unwrap().as_datetime());
        assert_eq!(original.wire_seconds(), 10);
        assert_eq!(copy.wire_seconds(), 20);
    }

    #[test]
    fn test_timestamp_serde() {
        let ts = Timestamp::from_seconds(1_700_000_000).unwrap();
        assert_eq!(serde_json::to_value(ts).unwrap(), json!(1_700_000_000));
        let back: Timestamp = serde_json::from_value(json!(1_700_000_000)).unwrap();
        assert_eq!(back, ts);
    }
}
