//! Length and presence checks mirroring the table's CHECK constraints.

use super::limits::{FIELD_MAX_LEN, NAME_MAX_LEN, SPEC_MAX_LEN};
use super::Function;
use crate::errors::ValidationError;

/// SQLite's `length()` stops at the first NUL, so a NUL-bearing value would be
/// measured differently by the table. Such values are rejected outright.
fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::NulCharacter { field });
    }
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::FieldTooLong { field, max, actual });
    }
    Ok(())
}

impl Function {
    /// Check the record against its declared constraints.
    /// Returns the first violation found, in column order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        check_len("name", &self.name, NAME_MAX_LEN)?;
        check_len("spec", &self.spec, SPEC_MAX_LEN)?;
        check_len("framework", &self.framework, FIELD_MAX_LEN)?;
        check_len("description", &self.description, FIELD_MAX_LEN)?;
        check_len("type", &self.kind, FIELD_MAX_LEN)?;
        check_len("help_message", &self.help_message, FIELD_MAX_LEN)?;
        check_len("animated_gif", &self.animated_gif, FIELD_MAX_LEN)?;
        check_len("status", &self.status, FIELD_MAX_LEN)?;
        Ok(())
    }
}

/// Validate a bare status value before a status-only update.
pub fn validate_status(status: &str) -> Result<(), ValidationError> {
    check_len("status", status, FIELD_MAX_LEN)
}
