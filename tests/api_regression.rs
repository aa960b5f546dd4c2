//! API Regression Tests
//!
//! In-process tests that build the Axum app via `create_app()` and exercise
//! the triage endpoints using `tower::ServiceExt::oneshot()`.
//! No binary spawn, no network port — runs in CI without `#[ignore]`.

use std::sync::Arc;

use autotriage::api::{create_app, ServiceState};
use autotriage::config::{self, TriageConfig};
use autotriage::repository::{InMemoryRepository, Repository};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

fn ensure_config() {
    if !config::is_initialized() {
        config::init(TriageConfig::default());
    }
}

fn create_test_state() -> ServiceState {
    ServiceState::new(Arc::new(InMemoryRepository::seeded()))
}

fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST /orchestrate with a complete body returns the full case record.
#[tokio::test]
async fn test_orchestrate_returns_full_case() {
    ensure_config();
    let app = create_app(create_test_state());

    let resp = app
        .oneshot(json_post(
            "/orchestrate",
            serde_json::json!({
                "vehicleId": "VN12345",
                "symptoms": ["Engine Overheating", "Loud Noise"],
                "complaint": "car is hot"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let case = body_json(resp).await;

    assert!(case["caseId"].as_str().unwrap().starts_with("CASE-"));
    assert_eq!(case["status"], "Resolved");
    assert_eq!(case["steps"].as_array().unwrap().len(), 7);

    let result = &case["finalResult"];
    assert_eq!(result["diagnosis"]["probableIssue"], "Coolant Pump Failure");
    assert_eq!(result["history"]["riskLevel"], "High");
    assert_eq!(result["notification"]["appointmentSuggested"], true);
}

/// Step entries carry agentName/action/timestamp/data with the raw stage
/// payload as the data object.
#[tokio::test]
async fn test_orchestrate_step_shape() {
    ensure_config();
    let app = create_app(create_test_state());

    let resp = app
        .oneshot(json_post(
            "/orchestrate",
            serde_json::json!({
                "vehicleId": "VN67890",
                "symptoms": ["squeaky noise"],
                "complaint": "noise on turns"
            }),
        ))
        .await
        .unwrap();

    let case = body_json(resp).await;
    let steps = case["steps"].as_array().unwrap();

    assert_eq!(steps[0]["agentName"], "MasterAgent");
    assert_eq!(steps[0]["data"]["input"]["vehicleId"], "VN67890");
    assert_eq!(steps[1]["agentName"], "CustomerDataAgent");
    assert_eq!(steps[1]["data"]["lastService"], "2024-11-01");
    assert_eq!(steps[2]["agentName"], "ReportAgent");
    assert_eq!(steps[2]["data"]["urgency"], "Medium");
    assert_eq!(steps[6]["data"]["success"], true);
}

/// Missing vehicleId or symptoms is rejected 400 before the pipeline runs.
#[tokio::test]
async fn test_orchestrate_missing_fields_is_bad_request() {
    ensure_config();

    for body in [
        serde_json::json!({ "symptoms": ["noise"] }),
        serde_json::json!({ "vehicleId": "VN12345" }),
        serde_json::json!({}),
    ] {
        let app = create_app(create_test_state());
        let resp = app.oneshot(json_post("/orchestrate", body)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let v = body_json(resp).await;
        assert_eq!(v["error"]["code"], "BAD_REQUEST");
    }
}

/// GET /appointments lists the seeded appointment book.
#[tokio::test]
async fn test_list_appointments_returns_seeded_book() {
    ensure_config();
    let app = create_app(create_test_state());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/appointments")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let v = body_json(resp).await;
    let list = v.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0]["id"], "APT-100");
    assert_eq!(list[0]["status"], "Completed");
}

/// POST /appointments creates a Scheduled appointment and returns it.
#[tokio::test]
async fn test_create_appointment() {
    ensure_config();
    let state = create_test_state();
    let app = create_app(state.clone());

    let resp = app
        .oneshot(json_post(
            "/appointments",
            serde_json::json!({
                "vehicleId": "VN12345",
                "date": "2025-11-20",
                "time": "10:00 AM",
                "reason": "Coolant Pump Inspection"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let v = body_json(resp).await;
    assert_eq!(v["success"], true);
    assert!(v["appointment"]["id"].as_str().unwrap().starts_with("APT-"));
    assert_eq!(v["appointment"]["status"], "Scheduled");
    assert_eq!(v["appointment"]["reason"], "Coolant Pump Inspection");

    // The new appointment is visible through the same state.
    let listed = state.repo.list_appointments().unwrap();
    assert_eq!(listed.len(), 4);
}

/// POST /appointments with missing fields is a 400.
#[tokio::test]
async fn test_create_appointment_missing_fields_is_bad_request() {
    ensure_config();
    let app = create_app(create_test_state());

    let resp = app
        .oneshot(json_post(
            "/appointments",
            serde_json::json!({ "vehicleId": "VN12345" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

/// GET /vehicles/:id returns the directory record; unknown ids are 404.
#[tokio::test]
async fn test_vehicle_lookup_and_miss() {
    ensure_config();

    let app = create_app(create_test_state());
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/vehicles/VN12345")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let v = body_json(resp).await;
    assert_eq!(v["model"], "Tesla Model 3");
    assert_eq!(v["year"], 2022);

    let app = create_app(create_test_state());
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/vehicles/VN99999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

/// GET /vehicles/:id/history returns the per-vehicle service records.
#[tokio::test]
async fn test_vehicle_history() {
    ensure_config();
    let app = create_app(create_test_state());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/vehicles/VN12345/history")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let v = body_json(resp).await;
    let records = v.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["type"], "Maintenance");
}

/// GET /health returns a JSON object with service metadata.
#[tokio::test]
async fn test_health_returns_json_object() {
    ensure_config();
    let app = create_app(create_test_state());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let v = body_json(resp).await;
    assert_eq!(v["status"], "ok");
    assert_eq!(v["service"], "autotriage");
}
