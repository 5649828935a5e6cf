//! Selection values and the raw input they are built from

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifiers selected in one field
///
/// Immutable once built; the host replaces a value wholesale. An empty
/// identifier list is the field's empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionValue {
    identifiers: Vec<String>,
}

impl SelectionValue {
    /// The empty value
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Value holding a single identifier (single-select submissions)
    pub fn single(identifier: impl Into<String>) -> Self {
        Self {
            identifiers: vec![identifier.into()],
        }
    }

    /// Value holding `identifiers` in the given order
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identifiers: identifiers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn into_identifiers(self) -> Vec<String> {
        self.identifiers
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.identifiers.iter().any(|i| i == identifier)
    }

    /// Identifiers joined by single spaces
    #[must_use]
    pub fn joined(&self) -> String {
        self.identifiers.join(" ")
    }
}

impl fmt::Display for SelectionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

impl From<Vec<String>> for SelectionValue {
    fn from(identifiers: Vec<String>) -> Self {
        Self { identifiers }
    }
}

// =============================================================================
// Field Input
// =============================================================================

/// Payload a host submits for a selection field
///
/// Normalized by `coerce_input` and checked by `check_structure` before it is
/// turned into a [`SelectionValue`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    /// One bare identifier
    Scalar(String),
    /// An already built value
    Value(SelectionValue),
    /// Untyped payload, such as a decoded form submission
    ///
    /// Only a bare integer is wrapped into a value here; a bare string is not
    /// and fails the structure check. Use [`FieldInput::Scalar`] for a single
    /// string identifier.
    Raw(Value),
}

impl FieldInput {
    /// JSON type name of the payload, used in error reports
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldInput::Scalar(_) => "string",
            FieldInput::Value(_) => "SelectionValue",
            FieldInput::Raw(value) => json_type_name(value),
        }
    }
}

impl From<SelectionValue> for FieldInput {
    fn from(value: SelectionValue) -> Self {
        FieldInput::Value(value)
    }
}

impl From<i64> for FieldInput {
    fn from(identifier: i64) -> Self {
        FieldInput::Scalar(identifier.to_string())
    }
}

impl From<u64> for FieldInput {
    fn from(identifier: u64) -> Self {
        FieldInput::Scalar(identifier.to_string())
    }
}

impl From<i32> for FieldInput {
    fn from(identifier: i32) -> Self {
        FieldInput::Scalar(identifier.to_string())
    }
}

impl From<&str> for FieldInput {
    fn from(identifier: &str) -> Self {
        FieldInput::Scalar(identifier.to_string())
    }
}

impl From<String> for FieldInput {
    fn from(identifier: String) -> Self {
        FieldInput::Scalar(identifier)
    }
}

impl From<Value> for FieldInput {
    fn from(value: Value) -> Self {
        FieldInput::Raw(value)
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "double",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
