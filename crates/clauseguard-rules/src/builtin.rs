//! Built-in contract risk rules

use clauseguard_core::{RiskRule, Severity};

pub const TABLE_NAME: &str = "builtin";

pub const TABLE_DESCRIPTION: &str = "One-sided and uncapped terms in service agreements";

/// Rules in match-priority order
pub fn rules() -> Vec<RiskRule> {
    vec![
        RiskRule::new(
            "sole discretion",
            Severity::High,
            "Too vague and one-sided, Party A has all control.",
            "Clearly define the scope of services.",
        ),
        RiskRule::new(
            "any interest rate",
            Severity::High,
            "Uncapped interest rate, unfair to Party B.",
            "Set a fixed or capped interest rate (e.g., 2% per month).",
        ),
        RiskRule::new(
            "trusted partners",
            Severity::Medium,
            "Allows disclosure of confidential info without consent.",
            "Require prior written consent before disclosure.",
        ),
        RiskRule::new(
            "terminate immediately",
            Severity::Medium,
            "Too harsh, no grace period.",
            "Provide a cure period (e.g., 15 days for payment delays).",
        ),
        RiskRule::new(
            "not be held liable for any damages",
            Severity::High,
            "Removes all accountability from Party A.",
            "Limit liability to reasonable levels (e.g., gross negligence).",
        ),
    ]
}
