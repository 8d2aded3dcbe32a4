//! Declarative macros that bind Rust types to the wire.
//!
//! - [`wire_enum!`] declares a closed enum with its sentinel and tag table.
//! - [`wire_record!`] declares a record struct and its field layout.
//!
//! Both also implement `serde::Serialize` / `serde::Deserialize` by routing
//! through the wire codec, so generated types nest inside serde structures.

/// Declares a closed enum bound to wire tags.
///
/// A `Null` sentinel is inserted at ordinal 0 and is the `Default`. Each
/// variant names its wire tag and may add a description after `=>`. An
/// optional description for the whole enum follows the name.
///
/// ```rust
/// use wirebind::{wire_enum, Wire, WireEnum};
/// use serde_json::json;
///
/// wire_enum! {
///     /// Delivery speed.
///     pub enum Shipping: "Delivery speed" {
///         Standard = "standard" => "3-5 days",
///         Express = "express" => "Next day",
///         Pickup = "pickup",
///     }
/// }
///
/// assert_eq!(Shipping::default(), Shipping::Null);
/// assert_eq!(Shipping::Express.ordinal(), 2);
/// assert_eq!(Shipping::DESCRIPTION, "Delivery speed");
/// assert_eq!(Shipping::from_wire(&json!("pickup")).unwrap(), Shipping::Pickup);
/// assert_eq!(Shipping::Null.to_wire(), json!(null));
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident $(: $enum_desc:literal)? {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $tag:literal $(=> $desc:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            /// Absent or unrecognized wire value.
            #[default]
            Null,
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $crate::WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const DESCRIPTION: &'static str = $crate::__wire_description!($($enum_desc)?);
            const NULL: Self = $name::Null;
            const ENTRIES: &'static [$crate::EnumEntry<Self>] = &[
                $(
                    $crate::EnumEntry {
                        variant: $name::$variant,
                        tag: $tag,
                        description: $crate::__wire_description!($($desc)?),
                    },
                )*
            ];

            fn ordinal(self) -> usize {
                self as usize
            }
        }

        impl $crate::Wire for $name {
            fn from_wire(value: &$crate::__private::serde_json::Value) -> $crate::Result<Self> {
                Ok($crate::enumeration::decode_enum(value))
            }

            fn to_wire(&self) -> $crate::__private::serde_json::Value {
                $crate::enumeration::encode_enum(*self)
            }

            fn kind() -> $crate::ValueKind {
                $crate::ValueKind::Enum(stringify!($name))
            }
        }

        $crate::__wire_serde!($name);
    };
}

/// Declares a record struct bound to a wire object.
///
/// Each field starts with its regime (`required`, `nullable` or `partial`),
/// then the Rust name and value type, then `=` and the wire key. A field
/// description may follow after `=>`. The value type is wrapped according
/// to the regime: `nullable` fields are `Option<T>`, `partial` fields are
/// [`Partial<T>`](crate::Partial).
///
/// `Default` builds the fresh record: required fields take their type's
/// default, nullable fields are `None` and partial fields are unset.
///
/// ```rust
/// use wirebind::{wire_record, Record};
/// use serde_json::json;
///
/// wire_record! {
///     /// A page of search results.
///     pub struct SearchPage: "One page of results" {
///         required total: i64 = "total",
///         nullable next_cursor: String = "next_cursor" => "Absent on the last page",
///         partial debug: wirebind::Json = "debug",
///     }
/// }
///
/// let page = SearchPage {
///     total: 3,
///     ..SearchPage::default()
/// };
/// assert!(!page.debug.is_present());
/// assert_eq!(
///     serde_json::Value::Object(page.to_json()),
///     json!({"total": 3, "next_cursor": null})
/// );
/// assert_eq!(SearchPage::descriptor().keys(), vec!["total", "next_cursor", "debug"]);
/// ```
#[macro_export]
macro_rules! wire_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $(: $record_desc:literal)? {
            $(
                $(#[$field_meta:meta])*
                $regime:ident $field:ident : $ty:ty = $key:literal $(=> $desc:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $crate::__wire_field_type!($regime $ty),
            )*
        }

        // A fresh record is the only source of unset partial fields.
        impl ::std::default::Default for $name {
            fn default() -> Self {
                $name {
                    $( $field: $crate::__wire_default!($regime), )*
                }
            }
        }

        impl $crate::Record for $name {
            const NAME: &'static str = stringify!($name);

            fn descriptor() -> $crate::RecordDescriptor {
                $crate::RecordDescriptor {
                    name: stringify!($name),
                    description: $crate::__wire_description!($($record_desc)?),
                    fields: vec![
                        $(
                            $crate::FieldDescriptor {
                                name: stringify!($field),
                                key: $key,
                                regime: $crate::__wire_regime!($regime),
                                kind: <$ty as $crate::Wire>::kind(),
                                description: $crate::__wire_description!($($desc)?),
                            },
                        )*
                    ],
                }
            }

            #[allow(unused_variables)]
            fn from_json(
                object: &$crate::__private::serde_json::Map<
                    ::std::string::String,
                    $crate::__private::serde_json::Value,
                >,
            ) -> $crate::Result<Self> {
                let reader = $crate::record::ObjectReader::new(stringify!($name), object);
                Ok($name {
                    $( $field: reader.$regime($key)?, )*
                })
            }

            #[allow(unused_mut)]
            fn to_json(
                &self,
            ) -> $crate::__private::serde_json::Map<
                ::std::string::String,
                $crate::__private::serde_json::Value,
            > {
                let mut writer = $crate::record::ObjectWriter::new();
                $( writer.$regime($key, &self.$field); )*
                writer.finish()
            }

            #[allow(unused_mut)]
            fn assigned_keys(&self) -> ::std::vec::Vec<&'static str> {
                let mut keys = ::std::vec::Vec::new();
                $(
                    if $crate::__wire_assigned!($regime, &self.$field) {
                        keys.push($key);
                    }
                )*
                keys
            }
        }

        impl $crate::Wire for $name {
            fn from_wire(value: &$crate::__private::serde_json::Value) -> $crate::Result<Self> {
                $crate::record::decode_record(value)
            }

            fn to_wire(&self) -> $crate::__private::serde_json::Value {
                $crate::record::encode_record(self)
            }

            fn kind() -> $crate::ValueKind {
                $crate::ValueKind::Record(stringify!($name))
            }
        }

        $crate::__wire_serde!($name);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __wire_description {
    () => {
        ""
    };
    ($desc:literal) => {
        $desc
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __wire_field_type {
    (required $ty:ty) => { $ty };
    (nullable $ty:ty) => { ::std::option::Option<$ty> };
    (partial $ty:ty) => { $crate::Partial<$ty> };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __wire_default {
    (required) => {
        ::std::default::Default::default()
    };
    (nullable) => {
        ::std::option::Option::None
    };
    (partial) => {
        $crate::__private::unset_partial()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __wire_regime {
    (required) => {
        $crate::Regime::Required
    };
    (nullable) => {
        $crate::Regime::Nullable
    };
    (partial) => {
        $crate::Regime::Partial
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __wire_assigned {
    (required, $field:expr) => {
        false
    };
    (nullable, $field:expr) => {
        false
    };
    (partial, $field:expr) => {
        $crate::Partial::is_present($field)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __wire_serde {
    ($name:ident) => {
        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::wire::as_wire::serialize(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::wire::as_wire::deserialize(deserializer)
            }
        }
    };
}
