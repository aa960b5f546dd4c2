//! Notification composer (NotificationAgent) - fifth pipeline stage
//!
//! Pure function of the diagnosis and the history correlation. Decision
//! order: urgent (high confidence OR high historical risk), then advisory
//! (moderate confidence), then a generic acknowledgment with no appointment
//! suggestion. Thresholds come from config; defaults are 0.8 / 0.5 and both
//! comparisons are strict.

use chrono::Utc;
use tracing::debug;

use super::StageError;
use crate::config;
use crate::types::{DiagnosisResult, HistoryCorrelation, NotificationResult, RiskLevel};

pub async fn compose(
    diagnosis: &DiagnosisResult,
    history: &HistoryCorrelation,
) -> Result<NotificationResult, StageError> {
    let thresholds = &config::get().thresholds;

    let (appointment_suggested, message) = if diagnosis.confidence > thresholds.urgent_confidence
        || history.risk_level == RiskLevel::High
    {
        (
            true,
            format!(
                "We detected a potential {}. Given the urgency, we recommend scheduling a service visit immediately.",
                diagnosis.probable_issue
            ),
        )
    } else if diagnosis.confidence > thresholds.advisory_confidence {
        (
            true,
            format!(
                "There might be an issue with your {}. We suggest a check-up at your convenience.",
                diagnosis.probable_issue
            ),
        )
    } else {
        (
            false,
            "We have received your report. A technician will review it shortly.".to_string(),
        )
    };

    debug!(
        suggested = appointment_suggested,
        confidence = diagnosis.confidence,
        risk = %history.risk_level,
        "Generated customer notification"
    );

    Ok(NotificationResult {
        appointment_suggested,
        message,
        generated_at: Utc::now(),
    })
}
