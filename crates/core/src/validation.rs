//! Field validation helpers for incoming record data.

use crate::error::CoreError;

/// Trim `value` and fail with [`CoreError::Validation`] if nothing is left.
pub fn require_non_empty(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field, treating absence as the empty string.
pub fn trimmed_or_empty(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}
