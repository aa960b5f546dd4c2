//! Case Orchestrator (MasterAgent) - sequences the diagnostic pipeline
//!
//! Runs the five stages in fixed order, each feeding the next:
//! intake → report → diagnosis → history → notification. Every stage is
//! awaited under the configured per-stage timeout; no stage runs
//! concurrently with another for the same case.
//!
//! ## Step log
//!
//! The case opens with a start marker, gains exactly one step per completed
//! stage, and closes with an end marker on success. On a stage error the
//! pipeline halts immediately, the error detail is appended as a failure
//! step, and the case terminates as `Failed` with no final result — nothing
//! escapes the orchestrator as an unhandled fault.
//!
//! Distinct cases are independent: an orchestrator holds only the shared
//! read-only repository, so the hosting service may run any number of cases
//! concurrently.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use super::{
    diagnosis, history, intake, notification, report, StageError, CUSTOMER_DATA_AGENT,
    DIAGNOSIS_AGENT, HISTORY_AGENT, MASTER_AGENT, NOTIFICATION_AGENT, REPORT_AGENT,
};
use crate::config;
use crate::repository::Repository;
use crate::types::{AgentStep, CaseState, CaseStatus, CustomerComplaint, FinalResult, StepPayload};

/// Coordinator for one-shot diagnostic cases
pub struct CaseOrchestrator {
    repo: Arc<dyn Repository>,
}

impl CaseOrchestrator {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }

    /// Process one customer complaint end to end, returning the full case
    /// record. Stage failures are converted into the failure step and a
    /// `Failed` terminal status; this call itself is infallible.
    pub async fn run(&self, input: CustomerComplaint) -> CaseState {
        let case_id = format!("CASE-{}", Utc::now().timestamp_millis());
        let mut steps = Vec::new();

        info!(case_id = %case_id, vehicle_id = %input.vehicle_id, "Started orchestration");
        log_step(
            &mut steps,
            MASTER_AGENT,
            "Started orchestration",
            StepPayload::Started {
                input: input.clone(),
            },
        );

        match self.run_stages(&input, &mut steps).await {
            Ok(final_result) => {
                log_step(
                    &mut steps,
                    MASTER_AGENT,
                    "Orchestration complete",
                    StepPayload::Completed { success: true },
                );
                info!(
                    case_id = %case_id,
                    issue = %final_result.diagnosis.probable_issue,
                    risk = %final_result.history.risk_level,
                    appointment_suggested = final_result.notification.appointment_suggested,
                    "Orchestration complete"
                );
                CaseState {
                    case_id,
                    status: CaseStatus::Resolved,
                    steps,
                    final_result: Some(final_result),
                }
            }
            Err(e) => {
                warn!(case_id = %case_id, error = %e, "Error during orchestration");
                log_step(
                    &mut steps,
                    MASTER_AGENT,
                    "Error during orchestration",
                    StepPayload::Failure {
                        error: e.to_string(),
                    },
                );
                CaseState {
                    case_id,
                    status: CaseStatus::Failed,
                    steps,
                    final_result: None,
                }
            }
        }
    }

    /// The fixed stage sequence. Halts at the first stage error; each
    /// completed stage appends its step before the next one starts.
    async fn run_stages(
        &self,
        input: &CustomerComplaint,
        steps: &mut Vec<AgentStep>,
    ) -> Result<FinalResult, StageError> {
        let repo = self.repo.as_ref();

        let data = bounded(CUSTOMER_DATA_AGENT, intake::normalize(repo, input)).await?;
        log_step(
            steps,
            CUSTOMER_DATA_AGENT,
            "Collected raw data",
            StepPayload::Intake(data.clone()),
        );

        let report = bounded(REPORT_AGENT, report::synthesize(&data)).await?;
        log_step(
            steps,
            REPORT_AGENT,
            "Generated diagnostic report",
            StepPayload::Report(report.clone()),
        );

        let diagnosis = bounded(DIAGNOSIS_AGENT, diagnosis::diagnose(&report)).await?;
        log_step(
            steps,
            DIAGNOSIS_AGENT,
            "Performed diagnosis",
            StepPayload::Diagnosis(diagnosis.clone()),
        );

        let history = bounded(
            HISTORY_AGENT,
            history::correlate(repo, &input.vehicle_id, &diagnosis),
        )
        .await?;
        log_step(
            steps,
            HISTORY_AGENT,
            "Correlated with history",
            StepPayload::History(history.clone()),
        );

        let notification = bounded(
            NOTIFICATION_AGENT,
            notification::compose(&diagnosis, &history),
        )
        .await?;
        log_step(
            steps,
            NOTIFICATION_AGENT,
            "Generated customer notification",
            StepPayload::Notification(notification.clone()),
        );

        Ok(FinalResult {
            report,
            diagnosis,
            history,
            notification,
        })
    }
}

/// Await a stage under the configured per-stage timeout; overruns surface
/// through the ordinary stage-failure path.
async fn bounded<T>(
    stage: &'static str,
    fut: impl Future<Output = Result<T, StageError>>,
) -> Result<T, StageError> {
    let timeout_ms = config::get().timeouts.stage_ms;
    match tokio::time::timeout(Duration::from_millis(timeout_ms), fut).await {
        Ok(result) => result,
        Err(_) => Err(StageError::Timeout { stage, timeout_ms }),
    }
}

fn log_step(steps: &mut Vec<AgentStep>, agent_name: &str, action: &str, data: StepPayload) {
    steps.push(AgentStep {
        agent_name: agent_name.to_string(),
        action: action.to_string(),
        timestamp: Utc::now(),
        data,
    });
}

// ============================================================================
// Tests
// ============================================================================
