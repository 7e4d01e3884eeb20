//! Report building

use clauseguard_core::{AnnotationSpan, Classification, ContractReport, ReviewEntry};

/// Appended to every clause in the highlighted view
pub const DISPLAY_SUFFIX: &str = ". ";

/// Converts classifications into annotation spans and review entries
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportBuilder;

impl ReportBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build a report from classifications in document order.
    ///
    /// Classifications of empty clauses are skipped. Every remaining clause
    /// gets a span; only clauses that matched a rule get a review entry.
    pub fn build<'a, I>(&self, classifications: I) -> ContractReport
    where
        I: IntoIterator<Item = &'a Classification>,
    {
        let mut report = ContractReport::default();

        for classification in classifications {
            let clause = &classification.clause;
            if clause.is_empty() && !classification.is_risky() {
                continue;
            }

            report.spans.push(AnnotationSpan::new(
                format!("{}{}", clause.trimmed, DISPLAY_SUFFIX),
                classification.label(),
                classification.color(),
            ));

            if let Some(rule) = &classification.rule {
                report.reviews.push(ReviewEntry {
                    clause: clause.trimmed.clone(),
                    risk: classification.label().to_string(),
                    issue: rule.issue.clone(),
                    suggestion: rule.suggestion.clone(),
                });
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clauseguard_core::{Clause, RiskRule, Severity};

    #[test]
    fn test_build_empty() {
        let report = ReportBuilder::new().build(&Vec::<Classification>::new());
        assert!(report.spans.is_empty());
        assert!(report.reviews.is_empty());
    }

    #[test]
    fn test_build_mixed() {
        let rule = RiskRule::new(
            "any interest rate",
            Severity::High,
            "Uncapped interest rate, unfair to Party B.",
            "Set a fixed or capped interest rate (e.g., 2% per month).",
        );
        let classifications = vec![
            Classification::matched(Clause::new(" Late fees accrue at any interest rate"), rule),
            Classification::safe(Clause::new("")),
            Classification::safe(Clause::new(" Deliveries are weekly ")),
        ];

        let report = ReportBuilder::new().build(&classifications);

        assert_eq!(report.spans.len(), 2);
        assert_eq!(
            report.spans[0].as_tuple(),
            ("Late fees accrue at any interest rate. ", "High Risk", "red")
        );
        assert_eq!(
            report.spans[1].as_tuple(),
            ("Deliveries are weekly. ", "OK", "green")
        );

        assert_eq!(report.reviews.len(), 1);
        assert_eq!(report.reviews[0].clause, "Late fees accrue at any interest rate");
        assert_eq!(report.reviews[0].risk, "High Risk");
    }

    #[test]
    fn test_custom_rule_color_flows_into_span() {
        let rule = RiskRule::new("at any time", Severity::Medium, "i", "s").with_color("gold");
        let classifications = vec![Classification::matched(
            Clause::new("Landlord may enter at any time"),
            rule,
        )];

        let report = ReportBuilder::new().build(&classifications);
        assert_eq!(report.spans[0].color, "gold");
        assert_eq!(report.spans[0].label, "Medium Risk");
    }
}
