//! End-to-end review pipeline

use crate::classifier::ClauseClassifier;
use crate::patterns::PhraseClassifier;
use crate::report::ReportBuilder;
use crate::splitter::split_clauses;
use clauseguard_core::{Classification, ContractReport, Result};
use clauseguard_rules::RuleTable;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Split, classify and report over one document.
///
/// Holds no per-document state, so one pipeline can serve any number of
/// requests concurrently.
pub struct ReviewPipeline {
    classifier: Arc<dyn ClauseClassifier>,
    builder: ReportBuilder,
}

impl ReviewPipeline {
    /// Create a pipeline around any classifier
    pub fn new(classifier: Arc<dyn ClauseClassifier>) -> Self {
        Self {
            classifier,
            builder: ReportBuilder::new(),
        }
    }

    /// Create a pipeline matching trigger phrases from `rules`
    pub fn from_rules(rules: Arc<RuleTable>) -> Result<Self> {
        let name = rules.name.clone();
        let classifier = PhraseClassifier::new(name, rules)?;
        Ok(Self::new(Arc::new(classifier)))
    }

    /// Pipeline over the built-in rule table
    pub fn builtin() -> Result<Self> {
        Self::from_rules(Arc::new(RuleTable::builtin()))
    }

    /// Classify every non-empty clause of `text`, in document order
    pub fn classify_text(&self, text: &str) -> Vec<Classification> {
        split_clauses(text)
            .iter()
            .filter(|clause| !clause.is_empty())
            .map(|clause| self.classifier.classify(clause))
            .collect()
    }

    /// Produce the full report for `text`
    pub fn analyze(&self, text: &str) -> ContractReport {
        let start = Instant::now();

        let classifications = self.classify_text(text);
        for classification in &classifications {
            metrics::counter!("clauseguard_clauses_total", "level" => classification.level.as_str())
                .increment(1);
        }

        let report = self.builder.build(&classifications);
        let latency_us = start.elapsed().as_micros() as u64;
        metrics::histogram!("clauseguard_review_latency_us").record(latency_us as f64);

        let summary = report.summary();
        info!(
            classifier = self.classifier.name(),
            clauses = summary.clauses,
            high = summary.high,
            medium = summary.medium,
            ok = summary.ok,
            latency_us,
            "Contract reviewed"
        );
        debug!(chars = text.len(), reviews = report.reviews.len(), "Review details");

        report
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }
}
