//! Case record types: CaseStatus, StepPayload, AgentStep, FinalResult, CaseState
//!
//! A `CaseState` is created when orchestration starts, mutated only by
//! appending `AgentStep` entries and by the terminal status/result write, and
//! returned whole to the caller. It is never updated across separate calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    CustomerComplaint, DiagnosisResult, DiagnosticReport, HistoryCorrelation,
    NormalizedCustomerData, NotificationResult,
};

/// Terminal and in-flight case states.
///
/// `Open` while stages run; `Resolved` when all five stages completed and the
/// final result is populated; `Failed` when a stage error halted the
/// pipeline. A `Failed` case still carries the full step log, and the final
/// result stays absent, so callers checking `final_result` keep working.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CaseStatus {
    #[default]
    Open,
    Resolved,
    Failed,
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseStatus::Open => write!(f, "Open"),
            CaseStatus::Resolved => write!(f, "Resolved"),
            CaseStatus::Failed => write!(f, "Failed"),
        }
    }
}

/// Typed per-stage payload carried by an [`AgentStep`].
///
/// Serialized untagged: each step's `data` field stays the raw stage-output
/// object, and JSON consumers key on the step's `agentName` to pick the
/// shape, while Rust consumers match on the variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepPayload {
    /// Orchestration start marker, echoing the raw input
    Started { input: CustomerComplaint },
    /// Orchestration end marker
    Completed { success: bool },
    /// Stage failure detail; the pipeline halted at this point
    Failure { error: String },
    Intake(NormalizedCustomerData),
    Report(DiagnosticReport),
    Diagnosis(DiagnosisResult),
    History(HistoryCorrelation),
    Notification(NotificationResult),
}

/// One entry in the append-only case audit trail
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStep {
    pub agent_name: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub data: StepPayload,
}

/// Aggregated outputs of a successfully completed case
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalResult {
    pub report: DiagnosticReport,
    pub diagnosis: DiagnosisResult,
    pub history: HistoryCorrelation,
    pub notification: NotificationResult,
}

/// Complete record of one end-to-end pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseState {
    pub case_id: String,
    pub status: CaseStatus,
    pub steps: Vec<AgentStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_result: Option<FinalResult>,
}
