//! Field type contract and the enhanced selection field type
//!
//! [`FieldType`] is the surface a host content repository drives: it binds the
//! implementation by [`identifier`](FieldType::identifier), validates field
//! definition settings, and converts values at its persistence boundary.
//! [`SelectionFieldType`] implements it for multi-value option selections.
//!
//! # Example
//!
//! ```rust
//! use enhanced_selection::{FieldInput, FieldType, SelectionFieldType, SelectionValue};
//! use serde_json::json;
//!
//! let field_type = SelectionFieldType::new();
//! assert_eq!(field_type.identifier(), "owenhancedselection");
//!
//! // Editor submits a single legacy id
//! let value = field_type.accept_input(FieldInput::from(5))?;
//! assert_eq!(value.identifiers(), ["5"]);
//!
//! // Persistence boundary
//! let hash = field_type.to_hash(&value);
//! assert_eq!(hash, Some(vec!["5".to_string()]));
//! assert_eq!(field_type.from_hash(hash), value);
//! assert_eq!(field_type.to_hash(&field_type.empty_value()), None);
//! # Ok::<(), enhanced_selection::Error>(())
//! ```

use log::{debug, warn};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::config::SettingsSchema;
use crate::error::{Error, Result};
use crate::storage::HashCodec;
use crate::validation::{ValidationError, validate_settings};
use crate::value::{FieldInput, SelectionValue, json_type_name};

/// Identifier the selection field type registers under
pub const FIELD_TYPE_IDENTIFIER: &str = "owenhancedselection";

// =============================================================================
// Field Type Contract
// =============================================================================

/// Contract between a host content repository and a field type
///
/// Every operation is a pure function of its arguments, so implementations
/// are shared freely between threads.
pub trait FieldType: Send + Sync {
    /// In-memory value of a field
    type Value;

    /// Storage representation of a non-empty value
    ///
    /// Hashes travel as `Option<Self::Hash>`, `None` being the absence sentinel.
    type Hash;

    /// Identifier binding this implementation to field definitions
    fn identifier(&self) -> &str;

    /// Schema of the settings a field definition may carry
    fn settings_schema(&self) -> &SettingsSchema;

    /// Validate field definition settings, collecting every problem found
    fn validate_field_settings(&self, settings: &Map<String, Value>) -> Vec<ValidationError>;

    /// Fill in schema defaults for settings missing from `settings`
    fn apply_default_settings(&self, settings: &Map<String, Value>) -> Map<String, Value> {
        self.settings_schema().apply_defaults(settings)
    }

    /// Human-readable name of a value, used for content names and URL aliases
    fn name(&self, value: &Self::Value) -> String;

    /// Value used when a field definition provides no default
    fn empty_value(&self) -> Self::Value;

    fn is_empty_value(&self, value: &Self::Value) -> bool;

    /// Key used to order field values across content items
    fn sort_key(&self, value: &Self::Value) -> String;

    /// Rebuild a value from its storage representation
    fn from_hash(&self, hash: Option<Self::Hash>) -> Self::Value;

    /// Storage representation of a value, `None` when the value is empty
    fn to_hash(&self, value: &Self::Value) -> Option<Self::Hash>;

    /// Whether the host should index this field for search
    fn is_searchable(&self) -> bool {
        false
    }
}

// =============================================================================
// Selection Field Type
// =============================================================================

/// Multi-value selection of option identifiers
#[derive(Debug, Clone)]
pub struct SelectionFieldType {
    schema: Arc<SettingsSchema>,
}

impl Default for SelectionFieldType {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionFieldType {
    /// Field type using the process-wide settings schema
    #[must_use]
    pub fn new() -> Self {
        Self::with_schema(SettingsSchema::shared())
    }

    /// Field type validating against `schema`
    #[must_use]
    pub fn with_schema(schema: Arc<SettingsSchema>) -> Self {
        Self { schema }
    }

    /// Wrap a bare identifier into a value; pass anything else through
    ///
    /// Only [`FieldInput::Scalar`] and raw JSON integers are wrapped. A raw JSON
    /// string is not treated as an identifier: it passes through unchanged and
    /// is rejected by [`check_structure`](Self::check_structure). Hosts holding a
    /// single string identifier submit it as `FieldInput::from(id)`. Nothing is
    /// validated here.
    #[must_use]
    pub fn coerce_input(&self, input: FieldInput) -> FieldInput {
        match input {
            FieldInput::Scalar(identifier) => {
                debug!("Wrapping bare identifier '{identifier}' into a selection value");
                FieldInput::Value(SelectionValue::single(identifier))
            }
            FieldInput::Raw(Value::Number(n)) if n.is_i64() || n.is_u64() => {
                debug!("Wrapping bare identifier {n} into a selection value");
                FieldInput::Value(SelectionValue::single(n.to_string()))
            }
            other => other,
        }
    }

    /// Fail unless the input's identifiers form a sequence
    ///
    /// Raw arrays and objects with an `identifiers` array pass. Element types
    /// and emptiness are not inspected.
    pub fn check_structure(&self, input: &FieldInput) -> Result<()> {
        let actual = match input {
            FieldInput::Value(_) => return Ok(()),
            FieldInput::Raw(Value::Array(_)) => return Ok(()),
            FieldInput::Raw(Value::Object(fields)) => match fields.get("identifiers") {
                Some(Value::Array(_)) => return Ok(()),
                Some(other) => json_type_name(other),
                None => "null",
            },
            other => other.type_name(),
        };

        warn!("Rejecting selection input: identifiers must be an array, got {actual}");
        Err(structure_error(actual))
    }

    /// Coerce, check and convert host input into a value
    pub fn accept_input(&self, input: FieldInput) -> Result<SelectionValue> {
        let input = self.coerce_input(input);
        self.check_structure(&input)?;

        match input {
            FieldInput::Value(value) => Ok(value),
            FieldInput::Raw(Value::Array(items)) => identifiers_from(items),
            FieldInput::Raw(Value::Object(mut fields)) => match fields.remove("identifiers") {
                Some(Value::Array(items)) => identifiers_from(items),
                other => Err(structure_error(other.as_ref().map_or("null", json_type_name))),
            },
            other => Err(structure_error(other.type_name())),
        }
    }

    /// Encode a value's hash with `codec`
    pub fn encode_hash<C: HashCodec>(&self, codec: &C, value: &SelectionValue) -> Result<String> {
        codec.encode(&self.to_hash(value))
    }

    /// Decode a hash with `codec` and rebuild the value
    pub fn decode_hash<C: HashCodec>(&self, codec: &C, content: &str) -> Result<SelectionValue> {
        Ok(self.from_hash(codec.decode(content)?))
    }
}

impl FieldType for SelectionFieldType {
    type Value = SelectionValue;
    type Hash = Vec<String>;

    fn identifier(&self) -> &str {
        FIELD_TYPE_IDENTIFIER
    }

    fn settings_schema(&self) -> &SettingsSchema {
        &self.schema
    }

    fn validate_field_settings(&self, settings: &Map<String, Value>) -> Vec<ValidationError> {
        validate_settings(&self.schema, settings)
    }

    fn name(&self, value: &SelectionValue) -> String {
        value.joined()
    }

    fn empty_value(&self) -> SelectionValue {
        SelectionValue::empty()
    }

    fn is_empty_value(&self, value: &SelectionValue) -> bool {
        value.is_empty()
    }

    // Same join as `name`; the `delimiter` setting is not consulted.
    fn sort_key(&self, value: &SelectionValue) -> String {
        value.joined()
    }

    fn from_hash(&self, hash: Option<Vec<String>>) -> SelectionValue {
        match hash {
            Some(identifiers) => SelectionValue::from(identifiers),
            None => {
                debug!("No stored hash, using the empty value");
                self.empty_value()
            }
        }
    }

    fn to_hash(&self, value: &SelectionValue) -> Option<Vec<String>> {
        if self.is_empty_value(value) {
            return None;
        }
        Some(value.identifiers().to_vec())
    }

    fn is_searchable(&self) -> bool {
        true
    }
}

fn structure_error(actual: &str) -> Error {
    Error::InvalidValueStructure {
        property: "identifiers".to_string(),
        expected: "array".to_string(),
        actual: actual.to_string(),
    }
}

fn identifiers_from(items: Vec<Value>) -> Result<SelectionValue> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(identifier) => Ok(identifier),
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
            other => Err(Error::InvalidIdentifier {
                index,
                actual: json_type_name(&other).to_string(),
            }),
        })
        .collect::<Result<Vec<_>>>()
        .map(SelectionValue::from)
}

// =============================================================================
// Tests
// =============================================================================
