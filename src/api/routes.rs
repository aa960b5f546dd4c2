//! API route definitions
//!
//! Organizes endpoints for the triage service:
//! - POST /orchestrate - run the diagnostic pipeline
//! - POST /appointments, GET /appointments - appointment book
//! - GET /vehicles/:id - vehicle directory lookup
//! - GET /vehicles/:id/history - service history for a vehicle
//! - GET /health - service liveness

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{self, ServiceState};

/// Create all API routes for the triage service
pub fn api_routes(state: ServiceState) -> Router {
    Router::new()
        .route("/orchestrate", post(handlers::post_orchestrate))
        .route(
            "/appointments",
            get(handlers::get_appointments).post(handlers::post_appointment),
        )
        .route("/vehicles/:id", get(handlers::get_vehicle))
        .route("/vehicles/:id/history", get(handlers::get_vehicle_history))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
