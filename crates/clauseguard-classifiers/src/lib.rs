//! ClauseGuard Classifiers
//!
//! Turns extracted contract text into a risk report.
//!
//! The flow is strictly linear:
//! - [`splitter`] cuts the text into clauses on every literal `.`
//! - [`patterns::PhraseClassifier`] assigns each clause the first matching
//!   rule of the injected [`RuleTable`](clauseguard_rules::RuleTable)
//! - [`report::ReportBuilder`] emits annotation spans and review entries
//!
//! [`pipeline::ReviewPipeline`] chains the three and is what callers use.

pub mod classifier;
pub mod patterns;
pub mod pipeline;
pub mod report;
pub mod splitter;

pub use classifier::ClauseClassifier;
pub use patterns::PhraseClassifier;
pub use pipeline::ReviewPipeline;
pub use report::ReportBuilder;
pub use splitter::split_clauses;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::ClauseClassifier;
    pub use crate::patterns::PhraseClassifier;
    pub use crate::pipeline::ReviewPipeline;
    pub use crate::report::ReportBuilder;
    pub use crate::splitter::split_clauses;
}
