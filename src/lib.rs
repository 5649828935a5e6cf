//! # enhanced-selection - Enhanced Selection Field Type
//!
//! A schema-validated, multi-value selection field type for content
//! repositories. A field stores the ordered identifiers of the options an
//! editor picked; the host drives everything through the [`FieldType`] trait.
//!
//! ## Features
//!
//! - **Settings Schema**: Fixed, process-wide table of recognized settings with defaults
//! - **Settings Validation**: Every problem collected, never a hard failure
//! - **Input Normalization**: Bare identifiers wrapped, shapes checked before storage
//! - **Hash Conversion**: Values to and from the host's storage representation
//! - **Hash Codecs**: JSON by default, YAML with the `yaml` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use enhanced_selection::{FieldType, SelectionFieldType, SelectionValue};
//! use serde_json::json;
//!
//! let field_type = SelectionFieldType::new();
//!
//! // Field definition settings
//! let settings = json!({
//!     "isMultiselect": true,
//!     "options": ["red", "green", "blue"],
//!     "optionsByIdentifier": { "red": "Red", "green": "Green", "blue": "Blue" }
//! });
//! let errors = field_type.validate_field_settings(settings.as_object().unwrap());
//! assert!(errors.is_empty());
//!
//! // Field values
//! let value = SelectionValue::new(["red", "blue"]);
//! assert_eq!(field_type.name(&value), "red blue");
//! assert!(field_type.is_searchable());
//! ```
//!
//! ## Validation Errors
//!
//! Settings problems come back as a list; structural problems with a value
//! are returned as [`Error`]:
//!
//! ```rust
//! use enhanced_selection::{FieldInput, FieldType, SelectionFieldType, ValidationError};
//! use serde_json::json;
//!
//! let field_type = SelectionFieldType::new();
//!
//! let settings = json!({ "options": "a,b,c", "colour": "red" });
//! let errors = field_type.validate_field_settings(settings.as_object().unwrap());
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[1], ValidationError::unknown("colour"));
//!
//! let err = field_type
//!     .check_structure(&FieldInput::Scalar("5".into()))
//!     .unwrap_err();
//! assert!(err.is_structure_error());
//! ```
//!
//! ## Hash Encoding
//!
//! ```rust
//! use enhanced_selection::{JsonCodec, SelectionFieldType, SelectionValue};
//!
//! # fn example() -> enhanced_selection::Result<()> {
//! let field_type = SelectionFieldType::new();
//! let codec = JsonCodec::new();
//!
//! let text = field_type.encode_hash(&codec, &SelectionValue::new(["a", "b"]))?;
//! assert_eq!(text, r#"["a","b"]"#);
//!
//! let value = field_type.decode_hash(&codec, "null")?;
//! assert!(value.is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// Core modules
mod error;
mod field_type;
pub mod storage;
mod validation;
mod value;

// Grouped modules
pub mod config;

// Re-exports from core
pub use error::{Error, Result};
pub use field_type::{FIELD_TYPE_IDENTIFIER, FieldType, SelectionFieldType};
pub use storage::{HashCodec, JsonCodec, SelectionHash};
pub use validation::{SETTING_RULES, SettingRule, ValidationError, ValueKind, rule_for, validate_settings};
pub use value::{FieldInput, SelectionValue};

#[cfg(feature = "yaml")]
pub use storage::YamlCodec;

// Re-exports from config
pub use config::{FieldSettings, SettingDefinition, SettingType, SettingsSchema};
