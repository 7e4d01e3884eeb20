//! Core types for ClauseGuard

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity assigned by a risk rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
}

impl Severity {
    /// Display label, e.g. `"High Risk"`
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High Risk",
            Self::Medium => "Medium Risk",
        }
    }

    /// Highlight color used when a rule does not set its own
    pub fn default_color(&self) -> &'static str {
        match self {
            Self::High => "red",
            Self::Medium => "orange",
        }
    }
}

/// Resolved risk level of a single clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Ok,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => Severity::High.label(),
            Self::Medium => Severity::Medium.label(),
            Self::Ok => "OK",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::High => Severity::High.default_color(),
            Self::Medium => Severity::Medium.default_color(),
            Self::Ok => "green",
        }
    }

    /// Lowercase name used for metrics labels and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Ok => "ok",
        }
    }
}

impl From<Severity> for RiskLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::High => Self::High,
            Severity::Medium => Self::Medium,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A trigger phrase and the risk metadata attached to it.
///
/// Rules are identified by their trigger phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRule {
    /// Exact, case-sensitive substring that triggers the rule
    pub trigger_phrase: String,

    /// Severity of a match
    pub severity: Severity,

    /// Highlight color override; falls back to the severity's color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// What is wrong with a matching clause
    pub issue: String,

    /// Suggested rewrite
    pub suggestion: String,
}

impl RiskRule {
    /// Create a new rule using the severity's default color
    pub fn new(
        trigger_phrase: impl Into<String>,
        severity: Severity,
        issue: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            trigger_phrase: trigger_phrase.into(),
            severity,
            color: None,
            issue: issue.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Override the highlight color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Resolved highlight color
    pub fn color(&self) -> &str {
        self.color
            .as_deref()
            .unwrap_or_else(|| self.severity.default_color())
    }
}

/// A period-delimited segment of the source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Segment exactly as it appeared between delimiters
    pub raw: String,

    /// Segment with surrounding whitespace removed
    pub trimmed: String,
}

impl Clause {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let trimmed = raw.trim().to_string();
        Self { raw, trimmed }
    }

    /// True when nothing but whitespace remains after trimming
    pub fn is_empty(&self) -> bool {
        self.trimmed.is_empty()
    }
}

/// Result of evaluating one clause against the rule table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub clause: Clause,

    /// First rule in table order whose phrase occurs in the clause
    pub rule: Option<RiskRule>,

    pub level: RiskLevel,
}

impl Classification {
    /// Classification for a clause that matched `rule`
    pub fn matched(clause: Clause, rule: RiskRule) -> Self {
        let level = rule.severity.into();
        Self {
            clause,
            rule: Some(rule),
            level,
        }
    }

    /// Classification for a clause that matched nothing
    pub fn safe(clause: Clause) -> Self {
        Self {
            clause,
            rule: None,
            level: RiskLevel::Ok,
        }
    }

    pub fn is_risky(&self) -> bool {
        self.rule.is_some()
    }

    pub fn label(&self) -> &'static str {
        self.level.label()
    }

    pub fn color(&self) -> &str {
        match &self.rule {
            Some(rule) => rule.color(),
            None => self.level.color(),
        }
    }
}

/// A (text, label, color) triple handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationSpan {
    pub text: String,
    pub label: String,
    pub color: String,
}

impl AnnotationSpan {
    pub fn new(text: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
            color: color.into(),
        }
    }

    pub fn as_tuple(&self) -> (&str, &str, &str) {
        (&self.text, &self.label, &self.color)
    }

    pub fn is_ok(&self) -> bool {
        self.label == RiskLevel::Ok.label()
    }
}

/// Detailed finding for a clause that matched a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewEntry {
    pub clause: String,
    pub risk: String,
    pub issue: String,
    pub suggestion: String,
}

/// Annotated spans plus review entries for one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractReport {
    /// One span per non-empty clause, in document order
    pub spans: Vec<AnnotationSpan>,

    /// One entry per risky clause, in document order
    pub reviews: Vec<ReviewEntry>,
}

impl ContractReport {
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Count clauses per risk label
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            clauses: self.spans.len(),
            ..ReportSummary::default()
        };

        for span in &self.spans {
            if span.label == RiskLevel::High.label() {
                summary.high += 1;
            } else if span.label == RiskLevel::Medium.label() {
                summary.medium += 1;
            } else {
                summary.ok += 1;
            }
        }

        summary
    }
}

/// Clause counts for a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub clauses: usize,
    pub high: usize,
    pub medium: usize,
    pub ok: usize,
}

impl ReportSummary {
    pub fn risky(&self) -> usize {
        self.high + self.medium
    }
}
