//! Wire Format Reference
//!
//! This module documents the JSON conventions every bound type follows on
//! the wire. It contains no code.
//!
//! # Overview
//!
//! The wire is plain JSON (RFC 8259). Binding never adds envelopes, type
//! tags or version fields: a record is an object, a list is an array, a
//! dictionary is an object, and scalars are JSON primitives.
//!
//! # Records
//!
//! A record encodes as an object whose keys are the fields' wire keys, in
//! declaration order. Keys are fixed per field (conventionally snake_case)
//! and never derived from the Rust field name at run time.
//!
//! ```text
//! {"id": 7, "status": "active", "seen_at": 1700000000, "owner": null}
//! ```
//!
//! Keys not declared by the record are ignored on decode and never
//! reproduced on encode. Decoding a non-object value as a record fails.
//!
//! ## Optionality Regimes
//!
//! | Regime | Key absent on decode | `null` on decode | Encode |
//! |--------|----------------------|------------------|--------|
//! | required | error | decoded by the value type | always emitted |
//! | nullable | `None` | `None` | always emitted, `null` for `None` |
//! | partial | unset | explicit null | emitted only once assigned |
//!
//! A required field of enum type decodes `null` to the sentinel; a required
//! field of pass-through JSON keeps the `null`; other required scalars
//! reject it.
//!
//! ## Partial Records
//!
//! A record with partial fields is a sparse object. A fresh instance encodes
//! as `{}` when all of its fields are partial. Each assignment, even of
//! `null` or of the current value, adds exactly that key to the encoding.
//!
//! ```text
//! fresh               -> {}
//! value = true        -> {"value": true}
//! value = null        -> {"value": null}
//! ```
//!
//! # Scalars
//!
//! | Kind | Wire | Notes |
//! |------|------|-------|
//! | bool | `true` / `false` | |
//! | int | number | whole-valued floats such as `3.0` accepted |
//! | number | number | whole values encode as integers, non-finite as `null` |
//! | string | string | |
//! | json | any | passed through unexamined |
//! | timestamp | number | seconds since the Unix epoch |
//!
//! # Timestamps
//!
//! The wire carries whole seconds since the Unix epoch. In memory an instant
//! has millisecond resolution.
//!
//! - Decode: `millis = seconds * 1000`. Fractional wire seconds keep whole
//!   milliseconds and drop the rest.
//! - Encode: `seconds = ceil(millis / 1000)`, also for instants before the
//!   epoch.
//!
//! ```text
//! wire 1000        -> 1_000_000 ms -> wire 1000
//! 1_000_001 ms     -> wire 1001
//! -1_500 ms        -> wire -1
//! ```
//!
//! # Enums
//!
//! A known variant encodes as its lowercase tag string. The sentinel encodes
//! as `null`. Decoding `null`, `""`, an unknown tag or any non-string value
//! yields the sentinel and never fails.
//!
//! ```text
//! "express"   -> Shipping::Express -> "express"
//! "teleport"  -> Shipping::Null    -> null
//! ```
//!
//! # Containers
//!
//! Lists encode as arrays in element order. Dictionaries encode as objects
//! with string keys, in insertion order. Both nest to any depth, and a
//! container element may be any bound type, including nullable ones:
//!
//! ```text
//! dict<list<Complex>>   {"a": [{...}, {...}], "b": []}
//! list<?int>            [1, null, 3]
//! ```
//!
//! # Select Options
//!
//! An enum's select options render as an array with one object per known
//! variant, in declaration order. The sentinel is never listed. The default
//! labels are:
//!
//! ```text
//! [{"key": 1, "value": "First"}, {"key": 2, "value": ""}]
//! ```
//!
//! `key` is the 1-based ordinal unless [`OptionKey::Tag`](crate::OptionKey)
//! is chosen; `value` is the variant description, empty if none.
//!
//! # Error Paths
//!
//! Decode errors carry a JSON Pointer (RFC 6901) to the offending value,
//! built from object keys and array indices, e.g. `/items/2/flag`. The root
//! value has no path. Keys containing `~` or `/` are escaped as `~0` and
//! `~1`.
