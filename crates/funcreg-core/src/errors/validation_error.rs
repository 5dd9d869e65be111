//! Field-level validation errors for `Function` records.

use super::error_code::{self, RegistryErrorCode};

/// A record violated one of its declared field constraints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("function name must not be empty")]
    EmptyName,

    #[error("field {field} is {actual} chars, limit is {max}")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("field {field} contains a NUL character")]
    NulCharacter { field: &'static str },

    #[error("spec of {name} is not a valid JSON manifest: {message}")]
    InvalidManifest { name: String, message: String },
}

impl RegistryErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
