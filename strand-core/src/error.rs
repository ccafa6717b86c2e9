//! Error types for Strand operations

use thiserror::Error;

/// Storage layer errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Record not found: {id}")]
    NotFound { id: String },

    #[error("Record already exists: {id}")]
    AlreadyExists { id: String },

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Filter predicate errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Conflicting length bounds: min_length {min} > max_length {max}")]
    ConflictingBounds { min: u32, max: u32 },
}

/// Natural-language query errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("No recognized pattern in query: {phrase}")]
    Unparseable { phrase: String },

    #[error("No records match the parsed query")]
    NoMatches,

    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Master error type for all Strand errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StrandError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),
}

/// Result type alias for Strand operations.
pub type StrandResult<T> = Result<T, StrandError>;

// =============================================================================
// TESTS
// =============================================================================
