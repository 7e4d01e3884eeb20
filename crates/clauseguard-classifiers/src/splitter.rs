//! Clause splitting

use clauseguard_core::Clause;

/// Clause delimiter. Abbreviations and decimals are not special-cased.
pub const CLAUSE_DELIMITER: char = '.';

/// Split `text` on every literal `.`.
///
/// Empty segments are kept, including the trailing one produced by final
/// punctuation; callers decide what to do with them.
pub fn split_clauses(text: &str) -> Vec<Clause> {
    text.split(CLAUSE_DELIMITER).map(Clause::new).collect()
}
