//! Error types for the enhanced selection field type
//!
//! Settings problems are not errors in this sense: they are collected as
//! [`ValidationError`]s and handed back to the host. The variants here abort
//! the operation that raised them.

use crate::validation::ValidationError;
use thiserror::Error;

/// Result type alias for field type operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the field type
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Value Errors
    // -------------------------------------------------------------------------
    #[error("Argument '{property}' is invalid: expected value to be of type '{expected}', got '{actual}'")]
    InvalidValueStructure {
        property: String,
        expected: String,
        actual: String,
    },

    #[error("Identifier at position {index} must be a string or an integer, got '{actual}'")]
    InvalidIdentifier { index: usize, actual: String },

    // -------------------------------------------------------------------------
    // Settings Errors
    // -------------------------------------------------------------------------
    #[error("Field settings are invalid: {}", join_errors(.0))]
    InvalidSettings(Vec<ValidationError>),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Failed to serialize data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to parse hash: {0}")]
    Parse(String),
}

impl Error {
    /// Check if this error was raised by a structural check on a value
    #[must_use]
    pub fn is_structure_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidValueStructure { .. } | Error::InvalidIdentifier { .. }
        )
    }

    /// Validation errors carried by this error, if any
    #[must_use]
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Error::InvalidSettings(errors) => errors,
            _ => &[],
        }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
