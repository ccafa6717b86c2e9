//! Boundary normalization helpers.
//!
//! Query parameters arrive as strings; these helpers turn them into typed
//! values or an error naming the offending parameter. Anything that fails
//! normalization is an error at this boundary, never a silent default.

use crate::error::{ApiError, ApiResult};

/// Trait for validating non-empty strings.
pub trait ValidateNonEmpty {
    /// Validate that the value is non-empty and not whitespace-only.
    fn validate_non_empty(&self, field_name: &str) -> ApiResult<()>;
}

impl ValidateNonEmpty for str {
    fn validate_non_empty(&self, field_name: &str) -> ApiResult<()> {
        if self.trim().is_empty() {
            return Err(ApiError::missing_field(field_name));
        }
        Ok(())
    }
}

impl ValidateNonEmpty for String {
    fn validate_non_empty(&self, field_name: &str) -> ApiResult<()> {
        self.as_str().validate_non_empty(field_name)
    }
}

/// Normalize a boolean-ish string ("true"/"false"/"1"/"0", case-insensitive).
pub fn parse_boolish(field_name: &str, raw: &str) -> ApiResult<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ApiError::invalid_input(format!(
            "Parameter '{}' must be a boolean, got '{}'",
            field_name, raw
        ))),
    }
}

/// Normalize a non-negative integer string.
pub fn parse_count(field_name: &str, raw: &str) -> ApiResult<u32> {
    raw.parse::<u32>().map_err(|_| {
        ApiError::invalid_input(format!(
            "Parameter '{}' must be a non-negative integer, got '{}'",
            field_name, raw
        ))
    })
}

/// Normalize a single-character string.
pub fn parse_single_char(field_name: &str, raw: &str) -> ApiResult<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ApiError::invalid_input(format!(
            "Parameter '{}' must be exactly one character, got '{}'",
            field_name, raw
        ))),
    }
}
