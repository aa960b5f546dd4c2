//! Fault diagnoser (DiagnosisAgent) - third pipeline stage
//!
//! Maps suspected subsystems to a probable fault, confidence score and
//! reasoning via an ordered rule table, first match wins. Confidence values
//! are fixed constants per rule, not computed: the notification composer
//! branches on `> 0.8` and `> 0.5`, so the constants must be preserved
//! exactly when rules are edited.

use tracing::debug;

use super::StageError;
use crate::types::{DiagnosisResult, DiagnosticReport};

/// One row of the fault decision table.
struct FaultRule {
    /// Suspected subsystem that triggers the rule (exact match)
    system: &'static str,
    issue: &'static str,
    confidence: f64,
    reasoning: &'static str,
}

/// Ordered fault rules; the first rule whose subsystem appears in the report
/// wins.
const FAULT_RULES: &[FaultRule] = &[
    FaultRule {
        system: "Cooling System",
        issue: "Coolant Pump Failure",
        confidence: 0.87,
        reasoning: "Symptoms of overheating combined with noise are characteristic of pump failure.",
    },
    FaultRule {
        system: "Suspension",
        issue: "Strut Mount Wear",
        confidence: 0.75,
        reasoning: "Noise indicates potential suspension wear.",
    },
];

/// Fallback when no rule matches
const UNKNOWN_ISSUE: FaultRule = FaultRule {
    system: "",
    issue: "Unknown Issue",
    confidence: 0.5,
    reasoning: "Insufficient data for precise diagnosis.",
};

pub async fn diagnose(report: &DiagnosticReport) -> Result<DiagnosisResult, StageError> {
    let rule = FAULT_RULES
        .iter()
        .find(|rule| report.suspected_systems.iter().any(|s| s == rule.system))
        .unwrap_or(&UNKNOWN_ISSUE);

    debug!(
        report_id = %report.report_id,
        issue = rule.issue,
        confidence = rule.confidence,
        "Performed diagnosis"
    );

    Ok(DiagnosisResult {
        probable_issue: rule.issue.to_string(),
        confidence: rule.confidence,
        reasoning: rule.reasoning.to_string(),
    })
}
