//! Settings schema for the selection field type
//!
//! # Overview
//!
//! The schema is a fixed table of [`SettingDefinition`]s, one per recognized
//! setting, each carrying the declared [`SettingType`] and a default value.
//! It is built once per process and shared read-only:
//!
//! ```rust
//! use enhanced_selection::SettingsSchema;
//!
//! let schema = SettingsSchema::shared();
//! assert!(schema.contains("isMultiselect"));
//! assert!(!schema.contains("selectionContentTypes"));
//! assert_eq!(schema.names().next(), Some("isMultiselect"));
//! ```
//!
//! # Defaults
//!
//! `delimiter` and `query` default to `false`, which the host reads as
//! "unset". List settings default to `[]` and `optionsByIdentifier` to `{}`.
//!
//! ```rust
//! use enhanced_selection::SettingsSchema;
//! use serde_json::{json, Map};
//!
//! let mut settings = Map::new();
//! settings.insert("isMultiselect".into(), json!(true));
//!
//! let merged = SettingsSchema::shared().apply_defaults(&settings);
//! assert_eq!(merged["isMultiselect"], json!(true));
//! assert_eq!(merged["delimiter"], json!(false));
//! assert_eq!(merged["options"], json!([]));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::sync::{Arc, OnceLock};

// =============================================================================
// Setting Names
// =============================================================================

/// Names of the settings recognized by the selection field type.
pub mod keys {
    pub const IS_MULTISELECT: &str = "isMultiselect";
    pub const DELIMITER: &str = "delimiter";
    pub const QUERY: &str = "query";
    pub const BASIC_OPTIONS: &str = "basicOptions";
    pub const DB_OPTIONS: &str = "dbOptions";
    pub const OPTIONS: &str = "options";
    pub const OPTIONS_BY_IDENTIFIER: &str = "optionsByIdentifier";
}

// =============================================================================
// Setting Types
// =============================================================================

/// Declared type of a setting
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SettingType {
    Boolean,
    String,
    Array,
}

impl SettingType {
    /// Type name as declared in the schema
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SettingType::Boolean => "boolean",
            SettingType::String => "string",
            SettingType::Array => "array",
        }
    }
}

// =============================================================================
// Setting Definition
// =============================================================================

/// One entry of the settings schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingDefinition {
    /// Setting name as it appears in a settings map
    pub name: String,

    /// Declared type
    #[serde(rename = "type")]
    pub setting_type: SettingType,

    /// Default value
    pub default: Value,
}

impl SettingDefinition {
    pub fn new(name: impl Into<String>, setting_type: SettingType, default: Value) -> Self {
        Self {
            name: name.into(),
            setting_type,
            default,
        }
    }

    /// Boolean setting
    pub fn boolean(name: impl Into<String>, default: bool) -> Self {
        Self::new(name, SettingType::Boolean, Value::Bool(default))
    }

    /// String setting that starts out unset
    pub fn unset_string(name: impl Into<String>) -> Self {
        Self::new(name, SettingType::String, Value::Bool(false))
    }

    /// Ordered list setting, empty by default
    pub fn list(name: impl Into<String>) -> Self {
        Self::new(name, SettingType::Array, json!([]))
    }

    /// Keyed mapping setting, empty by default
    pub fn mapping(name: impl Into<String>) -> Self {
        Self::new(name, SettingType::Array, json!({}))
    }
}

// =============================================================================
// Settings Schema
// =============================================================================

static SHARED: OnceLock<Arc<SettingsSchema>> = OnceLock::new();

/// Ordered table of every recognized setting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsSchema {
    definitions: Vec<SettingDefinition>,
}

impl Default for SettingsSchema {
    fn default() -> Self {
        Self::new(vec![
            SettingDefinition::boolean(keys::IS_MULTISELECT, false),
            SettingDefinition::unset_string(keys::DELIMITER),
            SettingDefinition::unset_string(keys::QUERY),
            SettingDefinition::list(keys::BASIC_OPTIONS),
            SettingDefinition::list(keys::DB_OPTIONS),
            SettingDefinition::list(keys::OPTIONS),
            SettingDefinition::mapping(keys::OPTIONS_BY_IDENTIFIER),
        ])
    }
}

impl SettingsSchema {
    /// Build a schema from explicit definitions, keeping their order
    pub fn new(definitions: Vec<SettingDefinition>) -> Self {
        Self { definitions }
    }

    /// The process-wide schema of the selection field type
    ///
    /// Built on first use; every caller receives the same instance.
    pub fn shared() -> Arc<SettingsSchema> {
        SHARED
            .get_or_init(|| Arc::new(SettingsSchema::default()))
            .clone()
    }

    /// Look up a setting definition by name
    pub fn get(&self, name: &str) -> Option<&SettingDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// Whether `name` is a recognized setting
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Setting names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|d| d.name.as_str())
    }

    /// All definitions in declaration order
    pub fn definitions(&self) -> &[SettingDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Settings map holding every default value
    pub fn defaults(&self) -> Map<String, Value> {
        self.definitions
            .iter()
            .map(|d| (d.name.clone(), d.default.clone()))
            .collect()
    }

    /// Fill in defaults for settings missing from `settings`
    ///
    /// Present entries are kept as-is, including unknown ones.
    pub fn apply_defaults(&self, settings: &Map<String, Value>) -> Map<String, Value> {
        let mut merged = settings.clone();
        for definition in &self.definitions {
            merged
                .entry(definition.name.clone())
                .or_insert_with(|| definition.default.clone());
        }
        merged
    }
}

// =============================================================================
// Tests
// =============================================================================
