//! API route handlers
//!
//! Request handling logic for the triage endpoints:
//! - POST /orchestrate - run the diagnostic pipeline for a complaint
//! - POST /appointments, GET /appointments - appointment book
//! - GET /vehicles/:id, GET /vehicles/:id/history - vehicle directory reads
//! - GET /health - service liveness
//!
//! Request bodies use optional fields and explicit validation so a missing
//! required field is a 400 with the uniform envelope, never a deserializer
//! rejection.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::envelope::ApiErrorResponse;
use crate::agents::CaseOrchestrator;
use crate::repository::Repository;
use crate::types::{Appointment, AppointmentStatus, CustomerComplaint};

/// Shared state for all API handlers
#[derive(Clone)]
pub struct ServiceState {
    pub repo: Arc<dyn Repository>,
    pub started_at: DateTime<Utc>,
}

impl ServiceState {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self {
            repo,
            started_at: Utc::now(),
        }
    }
}

// ============================================================================
// POST /orchestrate
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestrateRequest {
    pub vehicle_id: Option<String>,
    pub symptoms: Option<Vec<String>>,
    pub complaint: Option<String>,
}

/// Run the full diagnostic pipeline for one customer complaint and return
/// the complete case record.
pub async fn post_orchestrate(
    State(state): State<ServiceState>,
    Json(req): Json<OrchestrateRequest>,
) -> Response {
    let (Some(vehicle_id), Some(symptoms)) = (req.vehicle_id, req.symptoms) else {
        return ApiErrorResponse::bad_request("Missing required fields: vehicleId, symptoms");
    };

    let orchestrator = CaseOrchestrator::new(Arc::clone(&state.repo));
    let case = orchestrator
        .run(CustomerComplaint {
            vehicle_id,
            symptoms,
            complaint: req.complaint.unwrap_or_default(),
        })
        .await;

    (StatusCode::OK, Json(case)).into_response()
}

// ============================================================================
// Appointments
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub vehicle_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentCreated {
    pub success: bool,
    pub appointment: Appointment,
}

pub async fn post_appointment(
    State(state): State<ServiceState>,
    Json(req): Json<AppointmentRequest>,
) -> Response {
    let (Some(vehicle_id), Some(date), Some(time), Some(reason)) =
        (req.vehicle_id, req.date, req.time, req.reason)
    else {
        return ApiErrorResponse::bad_request(
            "Missing required fields: vehicleId, date, time, reason",
        );
    };

    let appointment = Appointment {
        id: format!("APT-{}", Utc::now().timestamp_millis()),
        vehicle_id,
        date,
        time,
        status: AppointmentStatus::Scheduled,
        reason,
    };

    match state.repo.append_appointment(appointment.clone()) {
        Ok(()) => (
            StatusCode::OK,
            Json(AppointmentCreated {
                success: true,
                appointment,
            }),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to persist appointment");
            ApiErrorResponse::internal("Failed to schedule appointment")
        }
    }
}

pub async fn get_appointments(State(state): State<ServiceState>) -> Response {
    match state.repo.list_appointments() {
        Ok(appointments) => (StatusCode::OK, Json(appointments)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list appointments");
            ApiErrorResponse::internal("Failed to list appointments")
        }
    }
}

// ============================================================================
// Vehicle directory (read-only)
// ============================================================================

pub async fn get_vehicle(
    State(state): State<ServiceState>,
    Path(id): Path<String>,
) -> Response {
    match state.repo.lookup_vehicle(&id) {
        Ok(Some(vehicle)) => (StatusCode::OK, Json(vehicle)).into_response(),
        Ok(None) => ApiErrorResponse::not_found(format!("No vehicle with id {id}")),
        Err(e) => {
            error!(error = %e, "Vehicle lookup failed");
            ApiErrorResponse::internal("Vehicle lookup failed")
        }
    }
}

pub async fn get_vehicle_history(
    State(state): State<ServiceState>,
    Path(id): Path<String>,
) -> Response {
    match state.repo.service_history(&id) {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => {
            error!(error = %e, "Service history lookup failed");
            ApiErrorResponse::internal("Service history lookup failed")
        }
    }
}

// ============================================================================
// GET /health
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub uptime_secs: i64,
}

pub async fn health_check(State(state): State<ServiceState>) -> Response {
    let body = HealthResponse {
        status: "ok",
        service: "autotriage",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: (Utc::now() - state.started_at).num_seconds(),
    };
    (StatusCode::OK, Json(body)).into_response()
}
