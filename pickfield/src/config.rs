//! Field configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{Appearance, Color, Palette};

/// Slot in prompt formats that receives the typed text.
pub const FORMAT_SLOT: &str = "{}";

/// How a single-select field treats text that is already present when it
/// first appears.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefillPolicy {
    /// Treat the text as typed and submitted: the top-ranked option is
    /// confirmed, or the raw text when adding is allowed. Text that matches
    /// nothing stays in the field unconfirmed.
    #[default]
    Submit,
    /// Confirm the text verbatim, matching or not.
    Keep,
}

/// Per-field configuration shared by both widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Text shown while the query is empty.
    pub placeholder: String,

    /// Allow committing free text that is not one of the options.
    pub allow_add_new: bool,

    /// Shown when nothing matches and adding is disabled.
    pub no_match_text: String,

    /// Label of the "add new" row; `{}` is replaced with the typed text.
    pub add_new_format: String,

    /// Maximum selections for a multi-select. Ignored by single-select.
    pub max_selections: usize,

    /// Initial-text handling for single-select.
    pub prefill: PrefillPolicy,

    pub palette: Palette,

    /// Fixed border color replacing the state-driven one.
    pub border_override: Option<Color>,

    pub appearance: Appearance,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            allow_add_new: false,
            no_match_text: "No match".to_string(),
            add_new_format: "Add {}".to_string(),
            max_selections: 3,
            prefill: PrefillPolicy::default(),
            palette: Palette::default(),
            border_override: None,
            appearance: Appearance::default(),
        }
    }
}

impl FieldConfig {
    /// Create a new config with the given placeholder.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Default::default()
        }
    }

    /// Allow adding values that are not in the option list.
    pub fn allow_add_new(mut self, allow: bool) -> Self {
        self.allow_add_new = allow;
        self
    }

    /// Set the no-match message.
    pub fn no_match_text(mut self, text: impl Into<String>) -> Self {
        self.no_match_text = text.into();
        self
    }

    /// Set the add-new label format. Must contain `{}`.
    pub fn add_new_format(mut self, format: impl Into<String>) -> Self {
        self.add_new_format = format.into();
        self
    }

    /// Set the multi-select capacity.
    pub fn max_selections(mut self, max: usize) -> Self {
        self.max_selections = max;
        self
    }

    /// Set the prefill policy.
    pub fn prefill(mut self, policy: PrefillPolicy) -> Self {
        self.prefill = policy;
        self
    }

    /// Set the palette.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Pin the border to a fixed color.
    pub fn border_override(mut self, color: Color) -> Self {
        self.border_override = Some(color);
        self
    }

    /// Set sizing and decoration.
    pub fn appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Check values a single-select needs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.add_new_format.contains(FORMAT_SLOT) {
            return Err(ConfigError::MissingPlaceholder(self.add_new_format.clone()));
        }
        Ok(())
    }

    /// Check values a multi-select needs, including capacity.
    pub fn validate_multi(&self) -> Result<(), ConfigError> {
        self.validate()?;
        if self.max_selections == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }

    /// Label for the add-new row.
    pub fn add_new_label(&self, text: &str) -> String {
        self.add_new_format.replacen(FORMAT_SLOT, text, 1)
    }
}

/// Invalid field configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A multi-select that can hold nothing.
    #[error("max_selections must be at least 1")]
    ZeroCapacity,

    /// The add-new format has nowhere to put the typed text.
    #[error("add-new format '{0}' has no '{{}}' slot")]
    MissingPlaceholder(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = FieldConfig::new("City");
        assert_eq!(config.validate_multi(), Ok(()));
        assert_eq!(config.max_selections, 3);
        assert_eq!(config.add_new_label("Rome"), "Add Rome");
    }

    #[test]
    fn test_zero_capacity_rejected_for_multi_only() {
        let config = FieldConfig::default().max_selections(0);
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.validate_multi(), Err(ConfigError::ZeroCapacity));
    }

    #[test]
    fn test_format_without_slot_rejected() {
        let config = FieldConfig::default().add_new_format("Add it");
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingPlaceholder("Add it".to_string()))
        );
    }

    #[test]
    fn test_only_first_slot_substituted() {
        let config = FieldConfig::default().add_new_format("+ {} ({})");
        assert_eq!(config.add_new_label("x"), "+ x ({})");
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: FieldConfig = serde_json::from_str(
            r##"{"allow_add_new": true, "prefill": "keep", "border_override": "#ff0000"}"##,
        )
        .unwrap();
        assert!(config.allow_add_new);
        assert_eq!(config.prefill, PrefillPolicy::Keep);
        assert_eq!(config.border_override, Some(Color::rgb(255, 0, 0)));
        assert_eq!(config.no_match_text, "No match");
    }
}
