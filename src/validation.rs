//! Settings validation
//!
//! Validation never fails: every problem found in a settings map is collected
//! into a [`ValidationError`] and processing carries on with the next entry.
//! The host decides whether any of them blocks saving the field definition.
//!
//! A key must first be declared in the [`SettingsSchema`]. Known keys are then
//! checked against [`SETTING_RULES`]; a key without a rule (`query`) passes on
//! schema membership alone.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::config::{SettingsSchema, keys};

// =============================================================================
// Value Kinds
// =============================================================================

/// Shape a setting value is expected to have
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Boolean,
    String,
    /// Sequence or keyed mapping
    Array,
}

impl ValueKind {
    /// Whether `value` has this shape
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            ValueKind::Boolean => value.is_boolean(),
            ValueKind::String => value.is_string(),
            ValueKind::Array => value.is_array() || value.is_object(),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Boolean => "a boolean",
            ValueKind::String => "a string",
            ValueKind::Array => "an array",
        })
    }
}

// =============================================================================
// Rule Table
// =============================================================================

/// Type rule applied to one known setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingRule {
    pub setting: &'static str,
    pub expected: ValueKind,
}

const fn rule(setting: &'static str, expected: ValueKind) -> SettingRule {
    SettingRule { setting, expected }
}

/// Type rules by setting name
pub const SETTING_RULES: &[SettingRule] = &[
    rule(keys::IS_MULTISELECT, ValueKind::Boolean),
    rule(keys::DELIMITER, ValueKind::String),
    rule(keys::BASIC_OPTIONS, ValueKind::Array),
    rule(keys::DB_OPTIONS, ValueKind::Array),
    rule(keys::OPTIONS, ValueKind::Array),
    rule(keys::OPTIONS_BY_IDENTIFIER, ValueKind::Array),
];

/// Rule for `setting`, if it has one
#[must_use]
pub fn rule_for(setting: &str) -> Option<&'static SettingRule> {
    SETTING_RULES.iter().find(|r| r.setting == setting)
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A problem found in one settings entry
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Setting '{setting}' is unknown")]
    UnknownSetting { setting: String },

    #[error("Setting '{setting}' value must be {expected}")]
    InvalidSettingType { setting: String, expected: ValueKind },
}

impl ValidationError {
    pub fn unknown(setting: impl Into<String>) -> Self {
        ValidationError::UnknownSetting {
            setting: setting.into(),
        }
    }

    pub fn invalid_type(setting: impl Into<String>, expected: ValueKind) -> Self {
        ValidationError::InvalidSettingType {
            setting: setting.into(),
            expected,
        }
    }

    /// Name of the offending setting
    pub fn setting(&self) -> &str {
        match self {
            ValidationError::UnknownSetting { setting }
            | ValidationError::InvalidSettingType { setting, .. } => setting,
        }
    }

    /// Untranslated message with a `%setting%` placeholder
    pub fn template(&self) -> &'static str {
        match self {
            ValidationError::UnknownSetting { .. } => "Setting '%setting%' is unknown",
            ValidationError::InvalidSettingType { expected, .. } => match expected {
                ValueKind::Boolean => "Setting '%setting%' value must be a boolean",
                ValueKind::String => "Setting '%setting%' value must be a string",
                ValueKind::Array => "Setting '%setting%' value must be an array",
            },
        }
    }

    /// Placeholder values for [`template`](Self::template)
    pub fn parameters(&self) -> HashMap<&'static str, String> {
        HashMap::from([("setting", self.setting().to_string())])
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Validate every entry of a settings map
///
/// Errors come back in the map's iteration order. An empty result means the
/// map is valid. Cross-setting consistency is not checked.
///
/// # Example
///
/// ```rust
/// use enhanced_selection::{SettingsSchema, validate_settings};
/// use serde_json::json;
///
/// let settings = json!({ "isMultiselect": "yes", "colour": "red" });
/// let errors = validate_settings(&SettingsSchema::shared(), settings.as_object().unwrap());
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors[0].to_string(), "Setting 'isMultiselect' value must be a boolean");
/// assert_eq!(errors[1].to_string(), "Setting 'colour' is unknown");
/// ```
#[must_use]
pub fn validate_settings(schema: &SettingsSchema, settings: &Map<String, Value>) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (name, value) in settings {
        if !schema.contains(name) {
            debug!("Rejecting unknown setting '{name}'");
            errors.push(ValidationError::unknown(name));
            continue;
        }

        if let Some(rule) = rule_for(name) {
            if !rule.expected.matches(value) {
                debug!("Setting '{name}' must be {}, got {value}", rule.expected);
                errors.push(ValidationError::invalid_type(name, rule.expected));
            }
        }
    }

    errors
}

// =============================================================================
// Tests
// =============================================================================
