//! The lexical rule table.
//!
//! Each rule inspects the lowercased phrase independently and writes at most
//! one predicate field. Rules are not mutually exclusive - several may fire on
//! one phrase, accumulating into a single conjunctive predicate.
//!
//! Table order is load-bearing for `contains_character`: "first vowel" runs
//! after "containing the letter X" and overwrites it when both fire.

use once_cell::sync::Lazy;
use regex::Regex;
use strand_core::FilterPredicate;

/// One predicate-producing lexical rule.
pub struct Rule {
    /// Stable rule name, used in logs and the parse echo.
    pub name: &'static str,
    /// Inspect the lowercased phrase; on a hit, write the target field into
    /// the accumulator and return true.
    pub apply: fn(&str, &mut FilterPredicate) -> bool,
}

/// Matches "longer than N character(s)" with a decimal N.
static LONGER_THAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"longer than (\d+) characters?").expect("longer-than pattern is valid")
});

/// Matches "containing the letter X" for a single lowercase letter X.
static CONTAINING_LETTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"containing the letter ([a-z])").expect("containing-letter pattern is valid")
});

fn apply_palindrome(phrase: &str, out: &mut FilterPredicate) -> bool {
    // Stem match covers "palindrome", "palindromic", "palindromes", ...
    if phrase.contains("palindrom") {
        out.is_palindrome = Some(true);
        return true;
    }
    false
}

fn apply_single_word(phrase: &str, out: &mut FilterPredicate) -> bool {
    if phrase.contains("single word") {
        out.word_count = Some(1);
        return true;
    }
    false
}

fn apply_longer_than(phrase: &str, out: &mut FilterPredicate) -> bool {
    let Some(captures) = LONGER_THAN_RE.captures(phrase) else {
        return false;
    };
    // "longer than N" is strict, so N + 1 is the inclusive lower bound. A
    // count that does not fit in u32 fails the rule rather than firing with
    // a mangled bound.
    let Ok(n) = captures[1].parse::<u32>() else {
        return false;
    };
    out.min_length = Some(n.saturating_add(1));
    true
}

fn apply_containing_letter(phrase: &str, out: &mut FilterPredicate) -> bool {
    let Some(captures) = CONTAINING_LETTER_RE.captures(phrase) else {
        return false;
    };
    // The capture group is a single ASCII letter by construction.
    out.contains_character = captures[1].chars().next();
    true
}

fn apply_first_vowel(phrase: &str, out: &mut FilterPredicate) -> bool {
    // A fixed lexical trigger for the literal constant 'a'. It does not
    // search any stored string for its actual first vowel.
    if phrase.contains("first vowel") {
        out.contains_character = Some('a');
        return true;
    }
    false
}

/// The ordered rule table, folded left-to-right over the phrase.
pub static RULES: &[Rule] = &[
    Rule {
        name: "palindrome",
        apply: apply_palindrome,
    },
    Rule {
        name: "single_word",
        apply: apply_single_word,
    },
    Rule {
        name: "longer_than",
        apply: apply_longer_than,
    },
    Rule {
        name: "containing_letter",
        apply: apply_containing_letter,
    },
    Rule {
        name: "first_vowel",
        apply: apply_first_vowel,
    },
];

/// Names of all rules, in evaluation order.
pub fn rule_names() -> Vec<&'static str> {
    RULES.iter().map(|r| r.name).collect()
}

// =============================================================================
// TESTS
// =============================================================================
