//! Multi-agent pipeline for vehicle diagnostic triage
//!
//! ## Processing Pipeline Agents
//!
//! Five stages run in fixed order under the orchestrator, each consuming the
//! previous stage's output:
//!
//! 1. **CustomerDataAgent** (intake): complaint + vehicle lookup → normalized customer data
//! 2. **ReportAgent** (report): symptom keywords → suspected subsystems + urgency
//! 3. **DiagnosisAgent** (diagnosis): suspected subsystems → probable fault + confidence
//! 4. **HistoryAgent** (history): fault × batch year → historical risk
//! 5. **NotificationAgent** (notification): confidence + risk → customer message
//!
//! The **MasterAgent** (orchestrator) sequences them, accumulates the case
//! step log, and converts any stage error into a terminal failed case.

pub mod diagnosis;
pub mod history;
pub mod intake;
pub mod notification;
pub mod orchestrator;
pub mod report;

pub use orchestrator::CaseOrchestrator;

use thiserror::Error;

use crate::repository::RepositoryError;

// Agent names as they appear in the case step log
pub const MASTER_AGENT: &str = "MasterAgent";
pub const CUSTOMER_DATA_AGENT: &str = "CustomerDataAgent";
pub const REPORT_AGENT: &str = "ReportAgent";
pub const DIAGNOSIS_AGENT: &str = "DiagnosisAgent";
pub const HISTORY_AGENT: &str = "HistoryAgent";
pub const NOTIFICATION_AGENT: &str = "NotificationAgent";

/// Error raised by an individual pipeline stage.
///
/// The orchestrator converts these into a failure step and a `Failed` case;
/// they never escape to the caller as an unhandled fault.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("{stage}: repository access failed: {source}")]
    Repository {
        stage: &'static str,
        #[source]
        source: RepositoryError,
    },

    #[error("{stage}: stage did not complete within {timeout_ms} ms")]
    Timeout {
        stage: &'static str,
        timeout_ms: u64,
    },
}
