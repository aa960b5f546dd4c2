//! History correlator (HistoryAgent) - fourth pipeline stage
//!
//! Cross-references the vehicle's manufacturing batch and service history
//! against the diagnosed fault. The batch-defect rule is a standalone
//! config-driven table (`[[defect_batches]]`) rather than an inline branch:
//! risk escalates to High exactly when a table row matches both the
//! diagnosis issue and the vehicle's model year.

use tracing::debug;

use super::{StageError, HISTORY_AGENT};
use crate::config;
use crate::repository::Repository;
use crate::types::{DiagnosisResult, HistoryCorrelation, RiskLevel};

/// Pattern reported when no batch rule matches
const NO_RECURRING_ISSUES: &str = "No significant recurring issues found.";

pub async fn correlate(
    repo: &dyn Repository,
    vehicle_id: &str,
    diagnosis: &DiagnosisResult,
) -> Result<HistoryCorrelation, StageError> {
    let repo_err = |source| StageError::Repository {
        stage: HISTORY_AGENT,
        source,
    };

    let vehicle = repo.lookup_vehicle(vehicle_id).map_err(repo_err)?;
    let history = repo.service_history(vehicle_id).map_err(repo_err)?;

    debug!(
        vehicle_id = %vehicle_id,
        records = history.len(),
        "Correlating service history"
    );

    // Batch-defect table: a row matches on (issue, model year); lookup
    // misses leave the correlation at its default.
    if let Some(vehicle) = vehicle {
        let matched = config::get()
            .defect_batches
            .iter()
            .find(|b| b.issue == diagnosis.probable_issue && b.year == vehicle.year);

        if let Some(batch) = matched {
            let siblings = repo.batch_history(&batch.batch_id).map_err(repo_err)?;
            debug!(
                batch_id = %batch.batch_id,
                sibling_records = siblings.len(),
                "Batch defect pattern matched"
            );

            return Ok(HistoryCorrelation {
                historical_pattern: batch.pattern.clone(),
                risk_level: RiskLevel::High,
                batch_note: Some(batch.note.clone()),
            });
        }
    }

    Ok(HistoryCorrelation {
        historical_pattern: NO_RECURRING_ISSUES.to_string(),
        risk_level: RiskLevel::Low,
        batch_note: None,
    })
}
