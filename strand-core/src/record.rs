//! String records and derived property computation.
//!
//! A record's identity is the SHA-256 digest of its raw bytes, so two inserts
//! of the same value collide on the primary key rather than duplicating.
//! Every character-level field here counts Unicode scalar values (`char`s),
//! never bytes - `length`, `unique_characters`, and the frequency map all
//! share that unit.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Maximum accepted value length, in characters.
pub const MAX_VALUE_CHARS: usize = 65535;

// ============================================================================
// CONTENT HASHING
// ============================================================================

/// Compute the SHA-256 hash of a value, returning the hex-encoded digest.
///
/// Case-sensitive and byte-exact: `"Abc"` and `"abc"` hash differently.
pub fn compute_content_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

// ============================================================================
// DERIVED PROPERTIES
// ============================================================================

/// Fixed set of attributes computed once from a string's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DerivedProperties {
    /// Number of characters (Unicode scalar values) in the value.
    pub length: u32,

    /// Whether the lowercased value equals its own reverse. Whitespace and
    /// punctuation are compared as-is, never stripped.
    pub is_palindrome: bool,

    /// Number of distinct characters, case-sensitive.
    pub unique_characters: u32,

    /// Number of maximal runs of alphanumeric-or-underscore characters.
    pub word_count: u32,

    /// Hex-encoded SHA-256 digest, duplicated from the record id for
    /// self-description.
    pub sha256_hash: String,

    /// Occurrence count per distinct character, case-sensitive.
    /// Invariant: the counts sum to `length`.
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub character_frequency_map: BTreeMap<char, u32>,
}

/// Compute the derived properties of a value.
///
/// Total and deterministic: any string is valid input, including the empty
/// string (length 0, palindrome, zero words, empty frequency map), and
/// identical inputs always produce identical output.
pub fn compute_properties(value: &str) -> DerivedProperties {
    let lowered: Vec<char> = value.to_lowercase().chars().collect();
    let reversed: Vec<char> = lowered.iter().rev().copied().collect();
    let is_palindrome = lowered == reversed;

    let mut frequency: BTreeMap<char, u32> = BTreeMap::new();
    let mut length: u32 = 0;
    for c in value.chars() {
        *frequency.entry(c).or_insert(0) += 1;
        length += 1;
    }
    let unique_characters = frequency.len() as u32;

    DerivedProperties {
        length,
        is_palindrome,
        unique_characters,
        word_count: count_words(value),
        sha256_hash: compute_content_hash(value),
        character_frequency_map: frequency,
    }
}

/// Count maximal runs of word characters (alphanumeric or underscore).
fn count_words(value: &str) -> u32 {
    let mut count = 0;
    let mut in_word = false;
    for c in value.chars() {
        let is_word_char = c.is_alphanumeric() || c == '_';
        if is_word_char && !in_word {
            count += 1;
        }
        in_word = is_word_char;
    }
    count
}

// ============================================================================
// STRING RECORD
// ============================================================================

/// A stored string keyed by its content hash.
///
/// Records are created once and never mutated; there is no update operation.
/// Two records with equal `value` have equal `id` and are the same entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StringRecord {
    /// Hex-encoded SHA-256 digest of `value`. Primary key.
    pub id: String,

    /// The original string, unmodified.
    pub value: String,

    /// Derived properties, computed at creation and frozen.
    pub properties: DerivedProperties,

    /// Creation timestamp, immutable.
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Build a record from a value, computing its hash and properties.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let properties = compute_properties(&value);
        Self {
            id: properties.sha256_hash.clone(),
            value,
            properties,
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
