//! Presence tracking for sparse (partial) record fields.
//!
//! A partial field has three distinguishable states:
//!
//! | State | Decoded from | Encodes as |
//! |-------|--------------|------------|
//! | unset | key absent | key omitted |
//! | null | `"key": null` | `"key": null` |
//! | value | `"key": <value>` | `"key": <value>` |
//!
//! A partial field starts unset only in a freshly built or freshly decoded
//! record. Every assignment, including assigning `null` or the value it
//! already holds, marks the field present. `Partial` has no public
//! constructor or method that produces the unset state, so an assigned
//! field never reverts to unset; a fresh record is the only way back.
//!
//! ```rust
//! use wirebind::{wire_record, Partial};
//!
//! wire_record! {
//!     pub struct Query {
//!         partial limit: i64 = "limit",
//!     }
//! }
//!
//! let mut query = Query::default();
//! assert!(!query.limit.is_present());
//!
//! query.limit.set_null();
//! assert!(query.limit.is_present());
//! assert!(query.limit.is_null());
//!
//! query.limit = Partial::value(10);
//! assert_eq!(query.limit.get(), Some(&10));
//! ```
//!
//! The unset state cannot be built directly:
//!
//! ```compile_fail
//! use wirebind::Partial;
//!
//! let limit: Partial<i64> = Partial::unset();
//! ```
//!
//! ```compile_fail
//! use wirebind::Partial;
//!
//! let limit: Partial<i64> = Partial::default();
//! ```

use crate::{Result, ValueKind, Wire};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Slot<T> {
    Unset,
    Null,
    Value(T),
}

/// A field that remembers whether it was ever assigned.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Partial<T> {
    slot: Slot<T>,
}

impl<T> Partial<T> {
    /// An unassigned field. Public code reaches this state only through a
    /// fresh record.
    #[must_use]
    pub(crate) const fn unset() -> Self {
        Partial { slot: Slot::Unset }
    }

    /// A field explicitly assigned `null`.
    #[must_use]
    pub const fn null() -> Self {
        Partial { slot: Slot::Null }
    }

    /// A field assigned `value`.
    #[must_use]
    pub const fn value(value: T) -> Self {
        Partial {
            slot: Slot::Value(value),
        }
    }

    /// Assigns a value and marks the field present.
    pub fn set(&mut self, value: T) {
        self.slot = Slot::Value(value);
    }

    /// Assigns `null` and marks the field present.
    pub fn set_null(&mut self) {
        self.slot = Slot::Null;
    }

    /// Assigns a value or `null` and marks the field present.
    pub fn assign(&mut self, value: Option<T>) {
        self.slot = match value {
            Some(v) => Slot::Value(v),
            None => Slot::Null,
        };
    }

    /// Returns `true` if the field was assigned, even to `null`.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        !matches!(self.slot, Slot::Unset)
    }

    /// Returns `true` if the field was explicitly assigned `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self.slot, Slot::Null)
    }

    /// Returns the assigned value, if any.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        match &self.slot {
            Slot::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the assigned value mutably, if any.
    ///
    /// Mutating through the reference keeps the field present.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match &mut self.slot {
            Slot::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Presence and value together: `None` when unset, `Some(None)` for an
    /// explicit null, `Some(Some(v))` for a value.
    #[must_use]
    pub fn as_option(&self) -> Option<Option<&T>> {
        match &self.slot {
            Slot::Unset => None,
            Slot::Null => Some(None),
            Slot::Value(v) => Some(Some(v)),
        }
    }

    /// Consumes the field, returning the same three-state view by value.
    #[must_use]
    pub fn into_option(self) -> Option<Option<T>> {
        match self.slot {
            Slot::Unset => None,
            Slot::Null => Some(None),
            Slot::Value(v) => Some(Some(v)),
        }
    }
}

impl<T> From<T> for Partial<T> {
    fn from(value: T) -> Self {
        Partial::value(value)
    }
}

impl<T: Wire> Partial<T> {
    /// Decodes a possibly absent wire value.
    ///
    /// An absent key leaves the field unset; a present `null` is recorded as
    /// an explicit null whatever `T` is.
    ///
    /// # Errors
    ///
    /// Returns an error if a present, non-null value does not decode as `T`.
    pub(crate) fn from_wire_entry(value: Option<&Value>) -> Result<Self> {
        match value {
            None => Ok(Partial::unset()),
            Some(Value::Null) => Ok(Partial::null()),
            Some(other) => T::from_wire(other).map(Partial::value),
        }
    }

    /// Encodes the field, or `None` if the key must be omitted.
    #[must_use]
    pub fn to_wire_entry(&self) -> Option<Value> {
        match &self.slot {
            Slot::Unset => None,
            Slot::Null => Some(Value::Null),
            Slot::Value(v) => Some(v.to_wire()),
        }
    }

    /// Describes the wire shape of a present value.
    #[must_use]
    pub fn kind() -> ValueKind {
        ValueKind::Nullable(Box::new(T::kind()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_state() {
        let field: Partial<String> = Partial::unset();
        assert!(!field.is_present());
        assert!(!field.is_null());
        assert_eq!(field.get(), None);
        assert_eq!(field.as_option(), None);
    }

    #[test]
    fn test_assignments_mark_present() {
        let mut field = Partial::unset();
        field.set(3);
        assert_eq!(field.as_option(), Some(Some(&3)));

        field.set(3);
        assert!(field.is_present());

        field.assign(None);
        assert_eq!(field.as_option(), Some(None));

        field.assign(Some(4));
        assert_eq!(field.into_option(), Some(Some(4)));
    }

    #[test]
    fn test_wire_entry_three_states() {
        let unset = Partial::<bool>::from_wire_entry(None).unwrap();
        assert_eq!(unset.to_wire_entry(), None);

        let null = Partial::<bool>::from_wire_entry(Some(&Value::Null)).unwrap();
        assert!(null.is_null());
        assert_eq!(null.to_wire_entry(), Some(Value::Null));

        let value = Partial::<bool>::from_wire_entry(Some(&json!(true))).unwrap();
        assert_eq!(value.get(), Some(&true));
        assert_eq!(value.to_wire_entry(), Some(json!(true)));
    }

    #[test]
    fn test_wire_entry_shape_error() {
        assert!(Partial::<bool>::from_wire_entry(Some(&json!("no"))).is_err());
    }

    #[test]
    fn test_clone_preserves_state() {
        let unset: Partial<Vec<i32>> = Partial::unset();
        assert!(!unset.clone().is_present());

        let original = Partial::value(vec![1, 2]);
        let mut copy = original.clone();
        copy.get_mut().unwrap().push(3);
        assert_eq!(original.get(), Some(&vec![1, 2]));
        assert_eq!(copy.get(), Some(&vec![1, 2, 3]));
    }
}
