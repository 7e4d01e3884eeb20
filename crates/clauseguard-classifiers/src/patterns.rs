//! Trigger-phrase classifier

use crate::classifier::ClauseClassifier;
use aho_corasick::{AhoCorasick, MatchKind};
use clauseguard_core::{Classification, Clause, Error, Result};
use clauseguard_rules::RuleTable;
use std::sync::Arc;
use tracing::debug;

/// Matches clauses against the trigger phrases of a rule table.
///
/// Matching is case-sensitive substring containment, so a phrase embedded
/// in a longer word still matches. When several phrases occur in one
/// clause the rule listed first in the table wins, wherever the phrases
/// sit in the text.
pub struct PhraseClassifier {
    name: String,
    rules: Arc<RuleTable>,
    phrases: AhoCorasick,
}

impl PhraseClassifier {
    /// Create a new phrase classifier over `rules`
    pub fn new(name: impl Into<String>, rules: Arc<RuleTable>) -> Result<Self> {
        // Standard semantics are required for overlapping search.
        let phrases = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(rules.phrases())
            .map_err(|e| Error::rules(format!("Failed to build phrase matcher: {}", e)))?;

        Ok(Self {
            name: name.into(),
            rules,
            phrases,
        })
    }

    /// Index of the highest-priority rule whose phrase occurs in `text`
    pub fn first_match(&self, text: &str) -> Option<usize> {
        self.phrases
            .find_overlapping_iter(text)
            .map(|m| m.pattern().as_usize())
            .min()
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }
}

impl ClauseClassifier for PhraseClassifier {
    fn classify(&self, clause: &Clause) -> Classification {
        match self.first_match(&clause.raw) {
            Some(idx) => {
                let rule = self.rules.rules()[idx].clone();
                debug!(
                    classifier = %self.name,
                    phrase = %rule.trigger_phrase,
                    severity = rule.severity.label(),
                    "Clause matched rule"
                );
                Classification::matched(clause.clone(), rule)
            }
            None => Classification::safe(clause.clone()),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
