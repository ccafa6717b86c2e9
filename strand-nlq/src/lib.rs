//! Strand NLQ - Natural-Language Filter Query Interpreter
//!
//! Translates a restricted free-text phrase into a canonical
//! [`FilterPredicate`](strand_core::FilterPredicate).
//!
//! Architecture:
//! ```text
//! Phrase ("all single word palindromic strings")
//!     ↓ lowercase
//! Rule table (ordered, independent lexical rules)
//!     ↓ fold left-to-right into one predicate
//! FilterPredicate (+ matched rule names)
//!     ↓ consistency check
//! ParsedQuery | QueryError
//! ```
//!
//! This is not an NLP system: the rule set is closed, and a phrase that fires
//! no rule is an error ("unable to parse"), never a match-everything query.

pub mod interpreter;
pub mod rules;

pub use interpreter::{parse, ParsedQuery};
pub use rules::{rule_names, RULES};
