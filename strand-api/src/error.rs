//! Error Types for the Strand API
//!
//! This module defines error handling for the API layer:
//! - ApiError struct for structured error responses
//! - ErrorCode enum for categorizing errors
//! - IntoResponse implementation for Axum HTTP responses
//!
//! All errors are serialized as JSON with appropriate HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use strand_core::{FilterError, QueryError, StoreError};

// ============================================================================
// ERROR CODE ENUM
// ============================================================================

/// Error codes for API responses.
///
/// Each error code maps to a specific HTTP status code. The split between
/// 400 and 422 is deliberate: malformed query parameters are a 400, while a
/// request that parsed but cannot be satisfied (invalid create body,
/// conflicting filter bounds) is a 422.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================================================
    // Bad Request (400)
    // ========================================================================
    /// Request contains a malformed parameter
    InvalidInput,

    /// Required field or parameter is missing
    MissingField,

    /// No natural-language rule matched the query phrase
    UnparseableQuery,

    // ========================================================================
    // Unprocessable (422)
    // ========================================================================
    /// Request body failed validation
    ValidationFailed,

    /// Filters parsed but contradict each other (min_length > max_length)
    ConflictingFilters,

    // ========================================================================
    // Not Found (404)
    // ========================================================================
    /// No record exists for the given value
    RecordNotFound,

    /// A parsed query matched zero records
    NoMatches,

    // ========================================================================
    // Conflict (409)
    // ========================================================================
    /// A record with the same content hash already exists
    RecordAlreadyExists,

    // ========================================================================
    // Server Errors (500)
    // ========================================================================
    /// Internal server error
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidInput
            | ErrorCode::MissingField
            | ErrorCode::UnparseableQuery => StatusCode::BAD_REQUEST,

            ErrorCode::ValidationFailed | ErrorCode::ConflictingFilters => {
                StatusCode::UNPROCESSABLE_ENTITY
            }

            ErrorCode::RecordNotFound | ErrorCode::NoMatches => StatusCode::NOT_FOUND,

            ErrorCode::RecordAlreadyExists => StatusCode::CONFLICT,

            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a default message for this error code.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "Invalid input data",
            ErrorCode::MissingField => "Required field is missing",
            ErrorCode::UnparseableQuery => "Unable to parse natural language query",
            ErrorCode::ValidationFailed => "Request validation failed",
            ErrorCode::ConflictingFilters => "Query parsed but resulted in conflicting filters",
            ErrorCode::RecordNotFound => "String does not exist in the system",
            ErrorCode::NoMatches => "No matching strings found in the system",
            ErrorCode::RecordAlreadyExists => "String already exists in the system",
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ============================================================================
// API ERROR STRUCT
// ============================================================================

/// Structured error response for API operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApiError {
    /// Error code categorizing the error
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details (field errors, parsed filters, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create a new API error with the given code, using the default message.
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.default_message().to_string(),
            details: None,
        }
    }

    /// Add additional details to the error.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }

    // ========================================================================
    // Convenience constructors for common errors
    // ========================================================================

    /// Create an InvalidInput error naming the offending field.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Create a MissingField error.
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingField,
            format!("Required field '{}' is missing", field),
        )
    }

    /// Create a ValidationFailed error.
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    /// Create a RecordNotFound error.
    pub fn record_not_found() -> Self {
        Self::from_code(ErrorCode::RecordNotFound)
    }

    /// Create an InternalError.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// ============================================================================
// AXUM INTEGRATION
// ============================================================================

/// Implement IntoResponse for ApiError to enable automatic error handling in
/// Axum. This allows ApiError to be returned directly from handlers:
/// ```ignore
/// async fn handler() -> Result<Json<Response>, ApiError> {
///     Err(ApiError::record_not_found())
/// }
/// ```
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self);
        (status, body).into_response()
    }
}

// ============================================================================
// CONVERSIONS FROM CORE ERRORS
// ============================================================================

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::from_code(ErrorCode::RecordNotFound),
            StoreError::AlreadyExists { .. } => {
                ApiError::from_code(ErrorCode::RecordAlreadyExists)
            }
            StoreError::LockPoisoned => {
                tracing::error!("store lock poisoned");
                ApiError::internal_error("Storage is unavailable")
            }
        }
    }
}

impl From<FilterError> for ApiError {
    fn from(err: FilterError) -> Self {
        match err {
            FilterError::ConflictingBounds { min, max } => {
                ApiError::from_code(ErrorCode::ConflictingFilters).with_details(
                    serde_json::json!({ "min_length": min, "max_length": max }),
                )
            }
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Unparseable { .. } => ApiError::from_code(ErrorCode::UnparseableQuery),
            QueryError::NoMatches => ApiError::from_code(ErrorCode::NoMatches),
            QueryError::Filter(filter_err) => filter_err.into(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON serialization error: {:?}", err);
        ApiError::invalid_input(format!("Invalid JSON: {}", err))
    }
}

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
