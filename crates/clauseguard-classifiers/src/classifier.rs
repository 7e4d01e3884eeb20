//! Classifier trait

use clauseguard_core::{Classification, Clause};

/// Assigns a risk classification to a single clause.
///
/// Implementations are pure: the same clause always yields the same
/// classification and no state is kept between calls.
pub trait ClauseClassifier: Send + Sync {
    /// Classify one clause
    fn classify(&self, clause: &Clause) -> Classification;

    /// Get the classifier name
    fn name(&self) -> &str;
}
