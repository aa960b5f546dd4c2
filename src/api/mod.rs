//! REST API module using Axum
//!
//! Exposes the triage pipeline to host applications and dashboards:
//! - POST /orchestrate runs a full diagnostic case
//! - appointment book and vehicle-directory reads
//! - /health for liveness probes

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::ServiceState;

use axum::http::{header, Method};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// Set `AUTOTRIAGE_CORS_ORIGINS` to a comma-separated list of allowed
/// origins for development (e.g., `http://localhost:3000` for the dashboard
/// dev server).
fn build_cors_layer() -> CorsLayer {
    match std::env::var("AUTOTRIAGE_CORS_ORIGINS") {
        Ok(origins) => {
            let allowed: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!(origins = %origins, "CORS: allowing configured origins");
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
        }
        Err(_) => {
            // No cross-origin allowed — dashboard is same-origin
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
        }
    }
}

/// Create the complete application router.
pub fn create_app(state: ServiceState) -> Router {
    let cors = build_cors_layer();

    Router::new()
        .merge(routes::api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
