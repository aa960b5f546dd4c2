//! Autotriage: Vehicle Diagnostic Triage Service
//!
//! Multi-agent pipeline that turns a customer-reported vehicle complaint
//! into a structured diagnostic case.
//!
//! ## Architecture
//!
//! - **Agents**: five sequential pipeline stages under a case orchestrator
//! - **Repository**: injected seam over the vehicle directory, service
//!   history and appointment book
//! - **API**: Axum HTTP surface exposing the pipeline and the appointment book
//! - **Config**: operator-tunable thresholds and the batch-defect table

pub mod agents;
pub mod api;
pub mod config;
pub mod repository;
pub mod types;

// Re-export configuration
pub use config::TriageConfig;

// Re-export commonly used types
pub use types::{
    AgentStep, Appointment, CaseState, CaseStatus, CustomerComplaint, DiagnosisResult,
    DiagnosticReport, FinalResult, HistoryCorrelation, NormalizedCustomerData, NotificationResult,
    RiskLevel, ServiceRecord, StepPayload, Urgency, VehicleRecord,
};

// Re-export the orchestrator and repository seam
pub use agents::CaseOrchestrator;
pub use repository::{InMemoryRepository, Repository, RepositoryError};
