//! Canonical filter predicate over derived properties.
//!
//! A predicate is an unordered conjunction of optional constraints. It is the
//! shared currency between the structured-filter endpoint and the
//! natural-language interpreter: both paths build one of these, and the store
//! evaluates it record by record via [`FilterPredicate::matches`].

use serde::{Deserialize, Serialize};

use crate::error::FilterError;
use crate::record::DerivedProperties;

/// Conjunction of constraints over derived properties.
///
/// Absent fields impose no restriction. An empty predicate matches every
/// record, but callers that require at least one constraint (the
/// natural-language path) must check [`FilterPredicate::is_empty`] and report
/// "unable to parse" rather than scanning unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FilterPredicate {
    /// Match records whose palindrome flag equals this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    /// Inclusive lower bound on `length`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,

    /// Inclusive upper bound on `length`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    /// Exact `word_count` match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u32>,

    /// Require this character to occur at least once (frequency map count
    /// greater than zero). Case-sensitive.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub contains_character: Option<char>,
}

impl FilterPredicate {
    /// True if no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// Check internal consistency: when both length bounds are present,
    /// `min_length` must not exceed `max_length`.
    pub fn validate(&self) -> Result<(), FilterError> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(FilterError::ConflictingBounds { min, max });
            }
        }
        Ok(())
    }

    /// Evaluate the predicate against one record's properties.
    ///
    /// Logical AND across all present constraints. `contains_character` is
    /// answered from the frequency map with count > 0, keeping the contract
    /// aligned with the data model rather than re-scanning the value.
    pub fn matches(&self, props: &DerivedProperties) -> bool {
        if let Some(expected) = self.is_palindrome {
            if props.is_palindrome != expected {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if props.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if props.length > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if props.word_count != count {
                return false;
            }
        }
        if let Some(c) = self.contains_character {
            if props
                .character_frequency_map
                .get(&c)
                .copied()
                .unwrap_or(0)
                == 0
            {
                return false;
            }
        }
        true
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::compute_properties;

    #[test]
    fn test_empty_predicate_matches_everything() {
        let predicate = FilterPredicate::default();
        assert!(predicate.is_empty());
        assert!(predicate.matches(&compute_properties("anything")));
        assert!(predicate.matches(&compute_properties("")));
    }

    #[test]
    fn test_constraints_are_conjunctive() {
        let predicate = FilterPredicate {
            is_palindrome: Some(true),
            word_count: Some(1),
            ..Default::default()
        };
        assert!(predicate.matches(&compute_properties("Racecar")));
        // Palindrome but two words.
        assert!(!predicate.matches(&compute_properties("aba aba")));
        // Single word but not a palindrome.
        assert!(!predicate.matches(&compute_properties("hello")));
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        let predicate = FilterPredicate {
            min_length: Some(5),
            max_length: Some(5),
            ..Default::default()
        };
        assert!(predicate.matches(&compute_properties("hello")));
        assert!(!predicate.matches(&compute_properties("hell")));
        assert!(!predicate.matches(&compute_properties("hellos")));
    }

    #[test]
    fn test_contains_character_is_case_sensitive() {
        let predicate = FilterPredicate {
            contains_character: Some('a'),
            ..Default::default()
        };
        assert!(predicate.matches(&compute_properties("banana")));
        assert!(!predicate.matches(&compute_properties("BANANA")));
        assert!(!predicate.matches(&compute_properties("split")));
    }

    #[test]
    fn test_validate_rejects_crossed_bounds() {
        let predicate = FilterPredicate {
            min_length: Some(10),
            max_length: Some(5),
            ..Default::default()
        };
        assert_eq!(
            predicate.validate(),
            Err(FilterError::ConflictingBounds { min: 10, max: 5 })
        );

        let predicate = FilterPredicate {
            min_length: Some(5),
            max_length: Some(10),
            ..Default::default()
        };
        assert!(predicate.validate().is_ok());
    }

    #[test]
    fn test_validate_ignores_single_bound() {
        let predicate = FilterPredicate {
            min_length: Some(1000),
            ..Default::default()
        };
        assert!(predicate.validate().is_ok());
    }

    #[test]
    fn test_serialization_skips_absent_constraints() {
        let predicate = FilterPredicate {
            is_palindrome: Some(true),
            contains_character: Some('z'),
            ..Default::default()
        };
        let json = serde_json::to_value(&predicate).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"is_palindrome": true, "contains_character": "z"})
        );
    }
}
