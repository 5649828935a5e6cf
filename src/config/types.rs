//! Typed view over a selection field's settings

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::config::SettingsSchema;
use crate::error::{Error, Result};
use crate::validation::validate_settings;

/// Settings of one selection field definition
///
/// Built from a raw settings map with [`FieldSettings::from_settings`], which
/// validates the map and fills in defaults first. `delimiter` and `query`
/// are `None` while unset.
///
/// # Example
///
/// ```rust
/// use enhanced_selection::{FieldSettings, SettingsSchema};
/// use serde_json::json;
///
/// let raw = json!({
///     "isMultiselect": true,
///     "options": ["red", "green"],
///     "optionsByIdentifier": { "red": "Red", "green": "Green" }
/// });
///
/// let settings = FieldSettings::from_settings(
///     &SettingsSchema::shared(),
///     raw.as_object().unwrap(),
/// )?;
///
/// assert!(settings.is_multiselect);
/// assert_eq!(settings.delimiter, None);
/// assert_eq!(settings.label_for("red"), Some("Red"));
/// # Ok::<(), enhanced_selection::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSettings {
    pub is_multiselect: bool,

    #[serde(default, with = "unset_string", skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,

    #[serde(default, with = "unset_string", skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    pub basic_options: Vec<String>,

    pub db_options: Vec<String>,

    pub options: Vec<String>,

    pub options_by_identifier: BTreeMap<String, String>,
}

impl FieldSettings {
    /// Validate `settings`, apply defaults and read them into a typed value
    ///
    /// Any accumulated validation error aborts with [`Error::InvalidSettings`].
    /// List settings must be sequences here even though validation also
    /// accepts mappings for them.
    pub fn from_settings(schema: &SettingsSchema, settings: &Map<String, Value>) -> Result<Self> {
        let errors = validate_settings(schema, settings);
        if !errors.is_empty() {
            return Err(Error::InvalidSettings(errors));
        }

        let merged = schema.apply_defaults(settings);
        serde_json::from_value(Value::Object(merged))
            .map_err(|e| Error::Parse(format!("field settings: {e}")))
    }

    /// Convert back to a raw settings map
    ///
    /// Unset `delimiter` and `query` are left out so the map reads back through
    /// [`from_settings`](Self::from_settings).
    pub fn to_settings(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(Error::Parse(format!(
                "field settings serialized to {other} instead of an object"
            ))),
        }
    }

    /// Display label configured for an option identifier
    pub fn label_for(&self, identifier: &str) -> Option<&str> {
        self.options_by_identifier
            .get(identifier)
            .map(String::as_str)
    }
}

/// `false` stands for an unset string setting.
mod unset_string {
    use super::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Flag(bool),
    }

    pub fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(text) => serializer.serialize_str(text),
            None => serializer.serialize_bool(false),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Text(text)) => Ok(Some(text)),
            Some(Raw::Flag(false)) | None => Ok(None),
            Some(Raw::Flag(true)) => Err(serde::de::Error::custom(
                "expected a string or false for an unset setting",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings_map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_empty_map_yields_defaults() {
        let settings =
            FieldSettings::from_settings(&SettingsSchema::default(), &Map::new()).unwrap();

        assert_eq!(settings, FieldSettings::default());
    }

    #[test]
    fn test_string_settings_are_read() {
        let raw = settings_map(json!({
            "delimiter": ",",
            "query": "SELECT identifier, name FROM colours",
            "dbOptions": ["teal"]
        }));

        let settings = FieldSettings::from_settings(&SettingsSchema::default(), &raw).unwrap();

        assert_eq!(settings.delimiter.as_deref(), Some(","));
        assert_eq!(
            settings.query.as_deref(),
            Some("SELECT identifier, name FROM colours")
        );
        assert_eq!(settings.db_options, vec!["teal".to_string()]);
    }

    #[test]
    fn test_invalid_map_is_rejected_with_every_error() {
        let raw = settings_map(json!({
            "isMultiselect": "yes",
            "colour": "red"
        }));

        let err = FieldSettings::from_settings(&SettingsSchema::default(), &raw).unwrap_err();

        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_mapping_options_do_not_fit_typed_view() {
        let raw = settings_map(json!({ "options": { "a": "A" } }));

        let err = FieldSettings::from_settings(&SettingsSchema::default(), &raw).unwrap_err();

        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_to_settings_leaves_out_unset_strings() {
        let settings = FieldSettings {
            is_multiselect: true,
            options: vec!["a".into()],
            ..Default::default()
        };

        let raw = settings.to_settings().unwrap();

        assert!(!raw.contains_key("delimiter"));
        assert!(!raw.contains_key("query"));
        assert_eq!(raw["isMultiselect"], json!(true));
        assert_eq!(raw["options"], json!(["a"]));
        assert_eq!(raw["optionsByIdentifier"], json!({}));
    }

    #[test]
    fn test_default_settings_read_back() {
        let schema = SettingsSchema::default();
        let raw = FieldSettings::default().to_settings().unwrap();

        assert!(validate_settings(&schema, &raw).is_empty());

        let settings = FieldSettings::from_settings(&schema, &raw).unwrap();
        assert_eq!(settings, FieldSettings::default());
    }

    #[test]
    fn test_set_strings_read_back() {
        let schema = SettingsSchema::default();
        let original = FieldSettings {
            delimiter: Some(" | ".into()),
            query: Some("SELECT 1".into()),
            ..Default::default()
        };

        let raw = original.to_settings().unwrap();

        assert_eq!(raw["delimiter"], json!(" | "));
        assert_eq!(FieldSettings::from_settings(&schema, &raw).unwrap(), original);
    }

    #[test]
    fn test_deserialize_without_unset_strings() {
        let settings: FieldSettings = serde_json::from_value(json!({
            "isMultiselect": false,
            "basicOptions": [],
            "dbOptions": [],
            "options": ["a"],
            "optionsByIdentifier": {}
        }))
        .unwrap();

        assert_eq!(settings.delimiter, None);
        assert_eq!(settings.query, None);
        assert_eq!(settings.options, vec!["a".to_string()]);
    }

    #[test]
    fn test_deserialize_false_as_unset() {
        let settings: FieldSettings = serde_json::from_value(json!({
            "isMultiselect": false,
            "delimiter": false,
            "query": false,
            "basicOptions": [],
            "dbOptions": [],
            "options": [],
            "optionsByIdentifier": {}
        }))
        .unwrap();

        assert_eq!(settings, FieldSettings::default());
    }
}
