//! Closed enums bound to lowercase wire tags.
//!
//! Every [`WireEnum`] reserves ordinal 0 for its sentinel (`Null`), which
//! stands for both "no value" and "a tag this build does not know". The
//! sentinel has no wire tag and encodes as `null`; any unrecognized wire
//! value, including `null` and `""`, decodes to it. Decoding an enum never
//! fails, which keeps readers forward compatible with tags added later.
//!
//! The tag table is fixed at declaration time, usually through
//! [`wire_enum!`](crate::wire_enum):
//!
//! ```rust
//! use wirebind::{wire_enum, WireEnum};
//!
//! wire_enum! {
//!     pub enum Color {
//!         Red = "red" => "Warm",
//!         Blue = "blue",
//!     }
//! }
//!
//! assert_eq!(Color::from_tag(Some("blue")), Color::Blue);
//! assert_eq!(Color::from_tag(Some("green")), Color::Null);
//! assert_eq!(Color::Red.to_tag(), Some("red"));
//! assert_eq!(Color::Null.to_tag(), None);
//! assert_eq!(Color::Blue.description(), "");
//! ```

use crate::options::{OptionKey, OptionLabels};
use serde_json::{Map, Value};
use std::fmt::Debug;
use std::hash::Hash;

/// One known tag of a [`WireEnum`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumEntry<E: 'static> {
    pub variant: E,
    pub tag: &'static str,
    pub description: &'static str,
}

/// A closed enum with a sentinel at ordinal 0 and a fixed tag table.
///
/// Implementors supply the table; the codec operations are provided.
pub trait WireEnum: Copy + Eq + Hash + Debug + Sized + 'static {
    /// Type name, as reported in descriptors.
    const NAME: &'static str;

    /// Description of the enum type itself; empty if none.
    const DESCRIPTION: &'static str = "";

    /// The sentinel variant.
    const NULL: Self;

    /// Known tags in declaration order; never contains the sentinel.
    const ENTRIES: &'static [EnumEntry<Self>];

    /// Position in declaration order; the sentinel is 0.
    fn ordinal(self) -> usize;

    /// Returns `true` for the sentinel.
    fn is_null(self) -> bool {
        self == Self::NULL
    }

    /// Wire tag of a known variant; `None` for the sentinel.
    fn to_tag(self) -> Option<&'static str> {
        Self::entry(self).map(|entry| entry.tag)
    }

    /// Resolves a wire tag; unknown, empty or absent tags give the sentinel.
    fn from_tag(tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return Self::NULL;
        };
        match Self::ENTRIES.iter().find(|entry| entry.tag == tag) {
            Some(entry) => entry.variant,
            None => {
                tracing::debug!(
                    enum_name = Self::NAME,
                    tag,
                    "unknown enum tag, using sentinel"
                );
                Self::NULL
            }
        }
    }

    /// Human-readable description; empty if none was configured.
    fn description(self) -> &'static str {
        Self::entry(self).map_or("", |entry| entry.description)
    }

    /// Every variant, sentinel first.
    fn variants() -> Vec<Self> {
        std::iter::once(Self::NULL)
            .chain(Self::ENTRIES.iter().map(|entry| entry.variant))
            .collect()
    }

    /// Select options for every known variant, in declaration order.
    fn options() -> Vec<SelectOption<Self>> {
        Self::ENTRIES
            .iter()
            .map(|entry| SelectOption {
                variant: entry.variant,
                ordinal: entry.variant.ordinal(),
                tag: entry.tag,
                description: entry.description,
            })
            .collect()
    }

    #[doc(hidden)]
    fn entry(self) -> Option<&'static EnumEntry<Self>> {
        Self::ENTRIES.iter().find(|entry| entry.variant == self)
    }
}

/// A `(key, description)` pair offered to a user interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption<E> {
    pub variant: E,
    pub ordinal: usize,
    pub tag: &'static str,
    pub description: &'static str,
}

impl<E> SelectOption<E> {
    /// Renders this option as a JSON object labeled by `labels`.
    #[must_use]
    pub fn to_json(&self, labels: &OptionLabels) -> Value {
        let key = match labels.key {
            OptionKey::Ordinal => Value::from(self.ordinal),
            OptionKey::Tag => Value::from(self.tag),
        };
        let mut object = Map::new();
        object.insert(labels.key_field.clone(), key);
        object.insert(
            labels.value_field.clone(),
            Value::from(self.description),
        );
        Value::Object(object)
    }
}

/// Builds the select-option array for `E`, one object per known variant.
///
/// # Examples
///
/// ```rust
/// use wirebind::{select_options_json, wire_enum, OptionLabels};
/// use serde_json::json;
///
/// wire_enum! {
///     pub enum Size {
///         Small = "small" => "S",
///         Large = "large" => "L",
///     }
/// }
///
/// let options = select_options_json::<Size>(&OptionLabels::new("id", "label"));
/// assert_eq!(
///     options,
///     json!([{"id": 1, "label": "S"}, {"id": 2, "label": "L"}])
/// );
/// ```
#[must_use]
pub fn select_options_json<E: WireEnum>(labels: &OptionLabels) -> Value {
    Value::Array(
        E::options()
            .iter()
            .map(|option| option.to_json(labels))
            .collect(),
    )
}

/// Decodes an enum from any wire value; non-strings give the sentinel.
pub fn decode_enum<E: WireEnum>(value: &Value) -> E {
    match value {
        Value::String(tag) => E::from_tag(Some(tag)),
        Value::Null => E::NULL,
        other => {
            tracing::debug!(
                enum_name = E::NAME,
                found = crate::error::json_kind(other),
                "non-string enum value, using sentinel"
            );
            E::NULL
        }
    }
}

/// Encodes an enum as its tag, or `null` for the sentinel.
pub fn encode_enum<E: WireEnum>(variant: E) -> Value {
    variant.to_tag().map_or(Value::Null, Value::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Level {
        Null,
        Low,
        High,
    }

    impl WireEnum for Level {
        const NAME: &'static str = "Level";
        const NULL: Self = Level::Null;
        const ENTRIES: &'static [EnumEntry<Self>] = &[
            EnumEntry {
                variant: Level::Low,
                tag: "low",
                description: "Low priority",
            },
            EnumEntry {
                variant: Level::High,
                tag: "high",
                description: "",
            },
        ];

        fn ordinal(self) -> usize {
            self as usize
        }
    }

    #[test]
    fn test_known_tags_roundtrip() {
        for tag in ["low", "high"] {
            let level = Level::from_tag(Some(tag));
            assert_eq!(level.to_tag(), Some(tag));
        }
    }

    #[test]
    fn test_unknown_tags_give_sentinel() {
        for tag in [None, Some(""), Some("unknown_tag"), Some("LOW")] {
            let level = Level::from_tag(tag);
            assert_eq!(level, Level::Null);
            assert!(level.is_null());
            assert_eq!(level.to_tag(), None);
        }
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Level::Low.description(), "Low priority");
        assert_eq!(Level::High.description(), "");
        assert_eq!(Level::Null.description(), "");
    }

    #[test]
    fn test_options_exclude_sentinel() {
        let options = Level::options();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].variant, Level::Low);
        assert_eq!(options[0].ordinal, 1);
        assert_eq!(options[1].ordinal, 2);
        assert_eq!(options[1].description, "");
    }

    #[test]
    fn test_variants_start_with_sentinel() {
        assert_eq!(Level::variants(), vec![Level::Null, Level::Low, Level::High]);
    }

    #[test]
    fn test_decode_encode_values() {
        assert_eq!(decode_enum::<Level>(&json!("high")), Level::High);
        assert_eq!(decode_enum::<Level>(&json!(2)), Level::Null);
        assert_eq!(decode_enum::<Level>(&Value::Null), Level::Null);
        assert_eq!(encode_enum(Level::Low), json!("low"));
        assert_eq!(encode_enum(Level::Null), Value::Null);
    }

    #[test]
    fn test_select_options_by_tag() {
        let labels = OptionLabels::default().with_key(OptionKey::Tag);
        let options = select_options_json::<Level>(&labels);
        assert_eq!(
            options,
            json!([
                {"key": "low", "value": "Low priority"},
                {"key": "high", "value": ""}
            ])
        );
    }
}
