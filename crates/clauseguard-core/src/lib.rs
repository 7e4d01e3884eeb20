//! ClauseGuard Core
//!
//! Core types and error handling shared across ClauseGuard components.
//!
//! This crate provides:
//! - The risk data model (rules, clauses, classifications, report entries)
//! - Document format detection from uploaded file names
//! - Error types and result handling

pub mod error;
pub mod format;
pub mod types;

pub use error::{Error, Result};
pub use format::DocumentFormat;
pub use types::{
    AnnotationSpan, Classification, Clause, ContractReport, ReportSummary, ReviewEntry, RiskLevel,
    RiskRule, Severity,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::format::DocumentFormat;
    pub use crate::types::{
        AnnotationSpan, Classification, Clause, ContractReport, ReviewEntry, RiskLevel, RiskRule,
        Severity,
    };
}
