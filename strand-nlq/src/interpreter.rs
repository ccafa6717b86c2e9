//! Phrase-to-predicate interpretation.

use serde::Serialize;
use strand_core::{FilterPredicate, QueryError};

use crate::rules::RULES;

/// Outcome of a successful parse: the accumulated predicate plus the names of
/// the rules that fired, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedQuery {
    pub predicate: FilterPredicate,
    pub matched_rules: Vec<&'static str>,
}

/// Parse a free-text phrase into a filter predicate.
///
/// All rules are evaluated over the lowercased phrase; their outputs
/// accumulate into one conjunctive predicate. Errors:
/// - [`QueryError::Unparseable`] when no rule fires (an empty predicate is
///   never treated as "match everything"),
/// - [`QueryError::Filter`] when the accumulated bounds conflict
///   (`min_length > max_length`).
pub fn parse(phrase: &str) -> Result<ParsedQuery, QueryError> {
    let lowered = phrase.to_lowercase();
    let mut predicate = FilterPredicate::default();
    let mut matched_rules = Vec::new();

    for rule in RULES {
        if (rule.apply)(&lowered, &mut predicate) {
            matched_rules.push(rule.name);
        }
    }

    if predicate.is_empty() {
        return Err(QueryError::Unparseable {
            phrase: phrase.to_string(),
        });
    }

    predicate.validate()?;

    Ok(ParsedQuery {
        predicate,
        matched_rules,
    })
}

// =============================================================================
// TESTS
// =============================================================================
