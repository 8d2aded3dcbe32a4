//! Configuration for text output and select-option rendering.
//!
//! - [`WireOptions`]: how `to_string_with_options` lays out JSON text
//! - [`OptionLabels`]: field names and key style of rendered select options
//!
//! ## Examples
//!
//! ```rust
//! use wirebind::{to_string_with_options, WireOptions};
//!
//! let options = WireOptions::pretty().with_indent(4);
//! let text = to_string_with_options(&vec![1i64, 2], options).unwrap();
//! assert_eq!(text, "[\n    1,\n    2\n]");
//! ```

/// Layout of JSON text produced by the `to_string*` / `to_writer*` helpers.
///
/// Layout never changes the wire value, only whitespace.
///
/// # Examples
///
/// ```rust
/// use wirebind::WireOptions;
///
/// let compact = WireOptions::new();
/// assert!(!compact.pretty);
///
/// let pretty = WireOptions::pretty();
/// assert_eq!(pretty.indent, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireOptions {
    pub indent: usize,
    pub pretty: bool,
}

impl Default for WireOptions {
    fn default() -> Self {
        WireOptions {
            indent: 2,
            pretty: false,
        }
    }
}

impl WireOptions {
    /// Creates default options (compact output).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with newlines and indentation.
    #[must_use]
    pub fn pretty() -> Self {
        WireOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Default is 2. Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// What identifies a variant in a rendered select option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OptionKey {
    /// The variant's ordinal (1-based; 0 is the sentinel).
    #[default]
    Ordinal,
    /// The variant's wire tag.
    Tag,
}

/// Field names and key style for select options rendered as JSON.
///
/// The default renders `{"key": <ordinal>, "value": <description>}`.
///
/// # Examples
///
/// ```rust
/// use wirebind::{OptionKey, OptionLabels};
///
/// let labels = OptionLabels::new("id", "text").with_key(OptionKey::Tag);
/// assert_eq!(labels.key_field, "id");
/// assert_eq!(labels.key, OptionKey::Tag);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionLabels {
    pub key_field: String,
    pub value_field: String,
    pub key: OptionKey,
}

impl Default for OptionLabels {
    fn default() -> Self {
        OptionLabels {
            key_field: "key".to_string(),
            value_field: "value".to_string(),
            key: OptionKey::default(),
        }
    }
}

impl OptionLabels {
    /// Labels options with the given key and value field names.
    #[must_use]
    pub fn new(key_field: &str, value_field: &str) -> Self {
        OptionLabels {
            key_field: key_field.to_string(),
            value_field: value_field.to_string(),
            key: OptionKey::default(),
        }
    }

    /// Chooses what identifies each variant.
    #[must_use]
    pub fn with_key(mut self, key: OptionKey) -> Self {
        self.key = key;
        self
    }
}
