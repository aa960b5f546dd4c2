//! Shared data structures for the vehicle diagnostic triage pipeline
//!
//! This module defines the core types flowing through the case pipeline:
//! - CustomerComplaint, NormalizedCustomerData (intake)
//! - DiagnosticReport (report synthesis)
//! - DiagnosisResult, HistoryCorrelation, NotificationResult (downstream stages)
//! - AgentStep, CaseState (orchestrator audit trail and case record)
//! - VehicleRecord, ServiceRecord, Appointment (reference data)

mod case;
mod diagnosis;
mod records;
mod report;

pub use case::*;
pub use diagnosis::*;
pub use records::*;
pub use report::*;
