//! Strand Core - Records, Derived Properties, and Filter Model
//!
//! Pure data structures and pure functions. All other crates depend on this.
//! No I/O lives here: hashing, property computation, and predicate matching
//! are all total functions over their inputs.

pub mod error;
pub mod filter;
pub mod record;

pub use error::{FilterError, QueryError, StoreError, StrandError, StrandResult};
pub use filter::FilterPredicate;
pub use record::{
    compute_content_hash, compute_properties, DerivedProperties, StringRecord, MAX_VALUE_CHARS,
};

/// Timestamp type using UTC timezone.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Hex-encoded SHA-256 digest of a record's raw content, used as primary key.
pub type ContentHash = String;
