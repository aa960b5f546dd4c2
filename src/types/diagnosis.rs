//! Diagnosis pipeline outputs: DiagnosisResult, RiskLevel, HistoryCorrelation,
//! NotificationResult

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Probable-fault diagnosis derived from the suspected subsystems.
///
/// Confidence is a fixed constant per fault rule, in `[0.0, 1.0]`. Downstream
/// logic branches on `> 0.8` and `> 0.5`, so the constants must be preserved
/// exactly when rules change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    pub probable_issue: String,
    pub confidence: f64,
    pub reasoning: String,
}

/// Historical-risk classification from the history correlator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Cross-reference of the diagnosis against the vehicle's manufacturing batch
/// and service history.
///
/// `batch_note` is present only when a batch-level defect pattern matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryCorrelation {
    pub historical_pattern: String,
    pub risk_level: RiskLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_note: Option<String>,
}

/// Customer-facing notification and appointment recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResult {
    pub appointment_suggested: bool,
    pub message: String,
    pub generated_at: DateTime<Utc>,
}
