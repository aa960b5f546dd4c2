//! Intake and report types: CustomerComplaint, NormalizedCustomerData,
//! Urgency, DiagnosticReport

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw customer input that opens a case.
///
/// Symptom tags are free-form strings, keyword-matched case-insensitively by
/// the report synthesizer. An empty symptom list is valid and simply yields
/// the generic subsystem downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerComplaint {
    pub vehicle_id: String,
    pub symptoms: Vec<String>,
    pub complaint: String,
}

/// Customer data after intake normalization.
///
/// `last_service` carries the raw date string from the vehicle directory, or
/// the `"Unknown"` sentinel when the vehicle is not on record. Immutable once
/// produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedCustomerData {
    pub vehicle_id: String,
    pub symptoms: Vec<String>,
    pub last_service: String,
    pub complaint: String,
    pub timestamp: DateTime<Utc>,
}

/// Urgency classification assigned by the report synthesizer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Urgency {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::Low => write!(f, "Low"),
            Urgency::Medium => write!(f, "Medium"),
            Urgency::High => write!(f, "High"),
        }
    }
}

/// Diagnostic report produced from normalized customer data.
///
/// `report_id` is unique per invocation (monotonic sequence) so each report
/// can be traced through the step log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticReport {
    pub report_id: String,
    pub vehicle_id: String,
    pub suspected_systems: Vec<String>,
    pub urgency: Urgency,
    pub summary: String,
    pub generated_at: DateTime<Utc>,
}
