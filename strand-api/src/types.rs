//! Request and response types for the Strand REST API.
//!
//! Query-parameter structs keep every field as a raw `Option<String>` so the
//! boundary can normalize boolean-ish and numeric strings itself and report
//! a 400 naming the offending parameter, instead of letting the extractor
//! reject the whole query opaquely.

use serde::{Deserialize, Serialize};
use strand_core::{FilterPredicate, StringRecord};
use utoipa::ToSchema;

use crate::error::{ApiError, ApiResult};
use crate::validation::{parse_boolish, parse_count, parse_single_char};

// ============================================================================
// CREATE
// ============================================================================

/// Body of `POST /api/v1/strings`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStringRequest {
    /// The string to analyze and store. At most 65535 characters.
    pub value: String,
}

// ============================================================================
// STRUCTURED LIST
// ============================================================================

/// Raw query parameters of `GET /api/v1/strings`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListStringsParams {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
    pub page: Option<String>,
}

impl ListStringsParams {
    /// Normalize the raw parameters into a filter predicate plus the
    /// requested page (1-based, defaulting to 1).
    ///
    /// Each parameter that fails normalization produces an error naming that
    /// parameter. The crossed-bounds check runs through the shared predicate
    /// validation, so `min_length > max_length` is rejected here exactly as
    /// on the natural-language path.
    pub fn normalize(&self) -> ApiResult<(FilterPredicate, u32)> {
        let predicate = FilterPredicate {
            is_palindrome: self
                .is_palindrome
                .as_deref()
                .map(|raw| parse_boolish("is_palindrome", raw))
                .transpose()?,
            min_length: self
                .min_length
                .as_deref()
                .map(|raw| parse_count("min_length", raw))
                .transpose()?,
            max_length: self
                .max_length
                .as_deref()
                .map(|raw| parse_count("max_length", raw))
                .transpose()?,
            word_count: self
                .word_count
                .as_deref()
                .map(|raw| parse_count("word_count", raw))
                .transpose()?,
            contains_character: self
                .contains_character
                .as_deref()
                .map(|raw| parse_single_char("contains_character", raw))
                .transpose()?,
        };

        predicate.validate().map_err(ApiError::from)?;

        let page = self
            .page
            .as_deref()
            .map(|raw| parse_count("page", raw))
            .transpose()?
            .unwrap_or(1);

        Ok((predicate, page))
    }
}

/// Pagination metadata for the structured list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub last_page: u32,
    pub total: u64,
}

/// Response of `GET /api/v1/strings`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListStringsResponse {
    pub data: Vec<StringRecord>,
    /// Number of records on this page.
    pub count: u64,
    /// Echo of the filters that were applied, in canonical form.
    pub filters_applied: FilterPredicate,
    pub pagination: PaginationMeta,
}

// ============================================================================
// NATURAL-LANGUAGE FILTER
// ============================================================================

/// Raw query parameters of `GET /api/v1/strings/filter-by-natural-language`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NaturalQueryParams {
    pub query: Option<String>,
}

/// Echo of how the natural-language phrase was interpreted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InterpretedQuery {
    /// The phrase exactly as received.
    pub original: String,
    /// The canonical predicate the phrase was translated into.
    pub parsed_filters: FilterPredicate,
}

/// Response of the natural-language filter endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NaturalQueryResponse {
    pub data: Vec<StringRecord>,
    /// Number of matching records (the scan is not paginated).
    pub count: u64,
    pub interpreted_query: InterpretedQuery,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_normalize_empty_params_gives_empty_predicate() {
        let (predicate, page) = ListStringsParams::default().normalize().unwrap();
        assert!(predicate.is_empty());
        assert_eq!(page, 1);
    }

    #[test]
    fn test_normalize_full_params() {
        let params = ListStringsParams {
            is_palindrome: Some("true".to_string()),
            min_length: Some("3".to_string()),
            max_length: Some("10".to_string()),
            word_count: Some("1".to_string()),
            contains_character: Some("x".to_string()),
            page: Some("2".to_string()),
        };
        let (predicate, page) = params.normalize().unwrap();
        assert_eq!(predicate.is_palindrome, Some(true));
        assert_eq!(predicate.min_length, Some(3));
        assert_eq!(predicate.max_length, Some(10));
        assert_eq!(predicate.word_count, Some(1));
        assert_eq!(predicate.contains_character, Some('x'));
        assert_eq!(page, 2);
    }

    #[test]
    fn test_normalize_rejects_bad_boolean_naming_field() {
        let params = ListStringsParams {
            is_palindrome: Some("maybe".to_string()),
            ..Default::default()
        };
        let err = params.normalize().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("is_palindrome"));
    }

    #[test]
    fn test_normalize_rejects_negative_and_non_numeric_counts() {
        for raw in ["-1", "abc", "1.5"] {
            let params = ListStringsParams {
                min_length: Some(raw.to_string()),
                ..Default::default()
            };
            let err = params.normalize().unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidInput);
            assert!(err.message.contains("min_length"), "raw = {raw:?}");
        }
    }

    #[test]
    fn test_normalize_rejects_multi_char_contains_character() {
        let params = ListStringsParams {
            contains_character: Some("ab".to_string()),
            ..Default::default()
        };
        let err = params.normalize().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("contains_character"));
    }

    #[test]
    fn test_normalize_crossed_bounds_is_conflict() {
        let params = ListStringsParams {
            min_length: Some("10".to_string()),
            max_length: Some("5".to_string()),
            ..Default::default()
        };
        let err = params.normalize().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConflictingFilters);
    }
}
