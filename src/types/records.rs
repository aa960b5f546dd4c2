//! Reference-data records: vehicle directory, service history, appointments

use serde::{Deserialize, Serialize};

// ============================================================================
// Vehicle Directory
// ============================================================================

/// Reported health of a vehicle in the directory
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum VehicleStatus {
    #[default]
    Healthy,
    Warning,
    Critical,
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleStatus::Healthy => write!(f, "Healthy"),
            VehicleStatus::Warning => write!(f, "Warning"),
            VehicleStatus::Critical => write!(f, "Critical"),
        }
    }
}

/// One entry in the vehicle directory, keyed by vehicle identifier.
///
/// Read-only reference data supplied by the host application; treated as
/// immutable for the duration of a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    pub owner_name: String,
    pub mileage: u32,
    pub last_service_date: String,
    pub status: VehicleStatus,
}

// ============================================================================
// Service History
// ============================================================================

/// Kind of workshop visit recorded in the service history
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ServiceType {
    Maintenance,
    Repair,
    Recall,
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceType::Maintenance => write!(f, "Maintenance"),
            ServiceType::Repair => write!(f, "Repair"),
            ServiceType::Recall => write!(f, "Recall"),
        }
    }
}

/// A single service-history record for a vehicle.
///
/// `batch_id` links the record to a manufacturing batch when the workshop
/// identified a batch-level pattern during the visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: String,
    pub vehicle_id: String,
    pub date: String,
    pub description: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technician_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
}

// ============================================================================
// Appointments
// ============================================================================

/// Lifecycle state of a workshop appointment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
    Pending,
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "Scheduled"),
            AppointmentStatus::Completed => write!(f, "Completed"),
            AppointmentStatus::Cancelled => write!(f, "Cancelled"),
            AppointmentStatus::Pending => write!(f, "Pending"),
        }
    }
}

/// A workshop appointment created through the service API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub vehicle_id: String,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
    pub reason: String,
}
