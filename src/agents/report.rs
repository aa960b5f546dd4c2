//! Report synthesizer (ReportAgent) - second pipeline stage
//!
//! Maps symptom keywords to suspected vehicle subsystems and an urgency
//! level. The keyword rules form an ordered decision table evaluated
//! top-down with first-match-wins, so table order IS the precedence
//! contract: an overheating match always beats a simultaneous noise match.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tracing::debug;

use super::StageError;
use crate::types::{DiagnosticReport, NormalizedCustomerData, Urgency};

/// One row of the keyword decision table.
struct KeywordRule {
    /// Case-insensitive substring matched against each symptom tag
    keyword: &'static str,
    systems: &'static [&'static str],
    urgency: Urgency,
}

/// Ordered keyword rules; the first rule with any matching symptom wins.
const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        keyword: "overheat",
        systems: &["Cooling System"],
        urgency: Urgency::High,
    },
    KeywordRule {
        keyword: "noise",
        systems: &["Suspension", "Engine"],
        urgency: Urgency::Medium,
    },
];

/// Fallback when no keyword rule matches
const GENERIC_SYSTEMS: &[&str] = &["General"];

/// Monotonic report sequence; report identifiers are unique per invocation
/// for traceability, not security.
static REPORT_SEQ: AtomicU64 = AtomicU64::new(0);

fn next_report_id() -> String {
    format!("REP-{}", REPORT_SEQ.fetch_add(1, Ordering::Relaxed) + 1)
}

pub async fn synthesize(data: &NormalizedCustomerData) -> Result<DiagnosticReport, StageError> {
    let lowered: Vec<String> = data.symptoms.iter().map(|s| s.to_lowercase()).collect();

    let matched = KEYWORD_RULES
        .iter()
        .find(|rule| lowered.iter().any(|s| s.contains(rule.keyword)));

    let (suspected_systems, urgency) = match matched {
        Some(rule) => (
            rule.systems.iter().map(ToString::to_string).collect(),
            rule.urgency,
        ),
        None => (
            GENERIC_SYSTEMS.iter().map(ToString::to_string).collect(),
            Urgency::Low,
        ),
    };

    let report = DiagnosticReport {
        report_id: next_report_id(),
        vehicle_id: data.vehicle_id.clone(),
        suspected_systems,
        urgency,
        summary: format!(
            "Customer reports {}. {}",
            data.symptoms.join(", "),
            data.complaint
        ),
        generated_at: Utc::now(),
    };

    debug!(
        report_id = %report.report_id,
        urgency = %report.urgency,
        systems = ?report.suspected_systems,
        "Generated diagnostic report"
    );

    Ok(report)
}
