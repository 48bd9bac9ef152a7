//! Declarative combobox configuration.
//!
//! Every knob of [`Combobox`](crate::combobox::Combobox) can be described in a
//! [`ComboboxConfig`], which deserializes from TOML (or any serde format).
//! Missing keys take the same defaults as [`Combobox::new`](crate::combobox::Combobox::new).
//!
//! ```toml
//! label = "Toppings"
//! multiple = true
//! use_tags = true
//! searchable = true
//! creatable = true
//! value = ["cheese"]
//! options = [
//!     "olives",
//!     { value = "cheese", label = "Extra cheese" },
//! ]
//! ```

use crate::option::{OptionItem, Scalar};
use crate::value::Selection;
use serde::Deserialize;

/// Placeholder shown when nothing is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Select an option";

/// Rows visible in the open list before it scrolls.
pub const DEFAULT_MAX_VISIBLE: usize = 8;

/// Errors loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The text is not a valid configuration.
    #[error("invalid combobox configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Where the label sits relative to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPosition {
    /// On its own line above the field.
    #[default]
    Above,
    /// To the left of the field, on the same line.
    Before,
}

/// An initial value as written in configuration: one scalar or a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InitialValue {
    /// A single value.
    One(Scalar),
    /// Several values.
    Many(Vec<Scalar>),
}

impl InitialValue {
    /// Coerce into a selection of the given mode. A scalar becomes a
    /// one-element list in multi mode; a list keeps its first element in
    /// single mode.
    pub fn into_selection(self, multiple: bool) -> Selection {
        let selection = match self {
            InitialValue::One(v) => Selection::Single(Some(String::from(v))),
            InitialValue::Many(vs) => Selection::multiple(vs.into_iter().map(String::from)),
        };
        selection.into_mode(multiple)
    }
}

/// Full configuration of a combobox.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComboboxConfig {
    /// Label text; empty for none.
    pub label: String,
    /// Label placement.
    pub label_position: LabelPosition,
    /// Shown when nothing is selected.
    pub placeholder: String,
    /// Ignore all interaction.
    pub disabled: bool,
    /// Available options, in display order.
    pub options: Vec<OptionItem>,
    /// Initial selection.
    pub value: Option<InitialValue>,
    /// Select a list of values instead of one.
    pub multiple: bool,
    /// Show a search line that filters the options.
    pub searchable: bool,
    /// Offer to create an option from unmatched search text.
    pub creatable: bool,
    /// Multi only: draw a checkbox on every row.
    pub use_checkboxes: bool,
    /// Multi only: draw selected values as removable tags.
    pub use_tags: bool,
    /// An empty selection fails validation.
    pub required: bool,
    /// Replaces the default validation message.
    pub error_message: String,
    /// Rows visible before the list scrolls.
    pub max_visible: usize,
}

impl Default for ComboboxConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            label_position: LabelPosition::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            disabled: false,
            options: Vec::new(),
            value: None,
            multiple: false,
            searchable: false,
            creatable: false,
            use_checkboxes: false,
            use_tags: false,
            required: false,
            error_message: String::new(),
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

impl ComboboxConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// The initial selection, coerced to this configuration's mode.
    pub fn initial_selection(&self) -> Selection {
        match &self.value {
            Some(v) => v.clone().into_selection(self.multiple),
            None => Selection::empty(self.multiple),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = ComboboxConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, ComboboxConfig::default());
        assert_eq!(cfg.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(cfg.max_visible, DEFAULT_MAX_VISIBLE);
    }

    #[test]
    fn parses_full_config() {
        let cfg = ComboboxConfig::from_toml_str(
            r#"
            label = "Toppings"
            label_position = "before"
            multiple = true
            use_tags = true
            required = true
            error_message = "Pick one"
            value = ["cheese", "cheese", "olives"]
            options = ["olives", { value = "cheese", label = "Extra cheese" }]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.label, "Toppings");
        assert_eq!(cfg.label_position, LabelPosition::Before);
        assert!(cfg.multiple && cfg.use_tags && cfg.required);
        assert_eq!(cfg.options[1], OptionItem::new("cheese", "Extra cheese"));
        assert_eq!(cfg.initial_selection(), Selection::multiple(["cheese", "olives"]));
    }

    #[test]
    fn scalar_value_in_multi_mode_becomes_list() {
        let cfg = ComboboxConfig::from_toml_str("multiple = true\nvalue = 3").unwrap();
        assert_eq!(cfg.initial_selection(), Selection::multiple(["3"]));
    }

    #[test]
    fn list_value_in_single_mode_keeps_first() {
        let cfg = ComboboxConfig::from_toml_str(r#"value = ["b", "c"]"#).unwrap();
        assert_eq!(cfg.initial_selection(), Selection::single("b"));
    }

    #[test]
    fn rejects_wrong_types() {
        let err = ComboboxConfig::from_toml_str("multiple = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
