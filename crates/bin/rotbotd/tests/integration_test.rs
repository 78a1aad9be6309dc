//! End-to-end tests for the full rotbotd stack.
//!
//! Each test wires the real in-memory store, the real service and the real
//! axum router, then drives the HTTP layer via `tower::ServiceExt::oneshot`
//! — no TCP port is bound. The router is cloned between requests so state
//! carries over exactly as it does between clients of a running daemon.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use rotbot_adapter_http_axum::router;
use rotbot_adapter_http_axum::state::AppState;
use rotbot_adapter_storage_memory::InMemoryDisplayStateStore;
use rotbot_app::services::status_service::StatusService;
use tower::ServiceExt;

/// Build a fully-wired router backed by a fresh in-memory store.
fn app() -> Router {
    let store = InMemoryDisplayStateStore::new();
    router::build(AppState::new(StatusService::new(store)))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    (status, body)
}

fn heading(color: &str, state: &str) -> String {
    format!("color:{color}; font-size: 200%;'> {state}</h2>")
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (status, body) = get(&app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

// ---------------------------------------------------------------------------
// Status page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_defaults_on_first_request() {
    let (status, body) = get(&app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("RotBot Results"));
    assert!(body.contains(&heading("red", "")));
    assert!(body.contains("Temperature: 0°C"));
    assert!(body.contains("Humidity: 0"));
    assert!(body.contains("Light: 0"));
}

#[tokio::test]
async fn should_update_temperature_and_state() {
    let app = app();
    get(&app, "/?humidity=61&light=420").await;

    let (_, body) = get(&app, "/?temp=23&state=GREEN").await;
    assert!(body.contains("Temperature: 23°C"));
    assert!(body.contains(&heading("green", "GREEN")));
    assert!(body.contains("Humidity: 61"));
    assert!(body.contains("Light: 420"));
}

#[tokio::test]
async fn should_switch_color_with_state() {
    let app = app();

    let (_, body) = get(&app, "/?state=YELLOW").await;
    assert!(body.contains(&heading("yellow", "YELLOW")));

    let (_, body) = get(&app, "/?state=unknown").await;
    assert!(body.contains(&heading("red", "unknown")));
}

#[tokio::test]
async fn should_treat_lowercase_state_as_red() {
    let (_, body) = get(&app(), "/?state=green").await;
    assert!(body.contains(&heading("red", "green")));
}

#[tokio::test]
async fn should_ignore_empty_parameter() {
    let app = app();
    get(&app, "/?temp=19").await;

    let (status, body) = get(&app, "/?temp=").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Temperature: 19°C"));
}

#[tokio::test]
async fn should_ignore_empty_state() {
    let app = app();
    get(&app, "/?state=GREEN").await;

    let (_, body) = get(&app, "/?state=").await;
    assert!(body.contains(&heading("green", "GREEN")));
}

#[tokio::test]
async fn should_leave_other_fields_on_partial_update() {
    let app = app();
    get(&app, "/?temp=20&humidity=50&light=300&state=YELLOW").await;

    let (_, body) = get(&app, "/?temp=21").await;
    assert!(body.contains("Temperature: 21°C"));
    assert!(body.contains("Humidity: 50"));
    assert!(body.contains("Light: 300"));
    assert!(body.contains(&heading("yellow", "YELLOW")));
}

#[tokio::test]
async fn should_persist_values_across_requests() {
    let app = app();
    get(&app, "/?light=900").await;

    let (_, body) = get(&app, "/").await;
    assert!(body.contains("Light: 900"));
}

#[tokio::test]
async fn should_render_same_document_for_repeated_request() {
    let app = app();
    let (_, first) = get(&app, "/?temp=23&state=GREEN").await;
    let (_, second) = get(&app, "/?temp=23&state=GREEN").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn should_use_first_occurrence_of_repeated_state() {
    let (_, body) = get(&app(), "/?state=GREEN&state=YELLOW").await;
    assert!(body.contains(&heading("green", "GREEN")));
}

#[tokio::test]
async fn should_skip_update_when_first_occurrence_is_empty() {
    let (_, body) = get(&app(), "/?temp=&temp=5").await;
    assert!(body.contains("Temperature: 0°C"));
}

#[tokio::test]
async fn should_resolve_each_repeated_key_independently() {
    let (_, body) = get(&app(), "/?state=GREEN&state=YELLOW&temp=&temp=5").await;
    assert!(body.contains(&heading("green", "GREEN")));
    assert!(body.contains("Temperature: 0°C"));
}

#[tokio::test]
async fn should_ignore_unknown_parameters() {
    let (status, body) = get(&app(), "/?pressure=1013&temp=17").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Temperature: 17°C"));
    assert!(!body.contains("1013"));
}

#[tokio::test]
async fn should_keep_non_numeric_readings() {
    let (_, body) = get(&app(), "/?temp=hot&humidity=n%2Fa").await;
    assert!(body.contains("Temperature: hot°C"));
    assert!(body.contains("Humidity: n/a"));
}

// ---------------------------------------------------------------------------
// JSON snapshot
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_expose_state_as_json() {
    let app = app();
    get(&app, "/?temp=23&state=YELLOW").await;

    let (status, body) = get(&app, "/api/status").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["temperature"], "23");
    assert!(json["humidity"].is_null());
    assert_eq!(json["state"], "YELLOW");
    assert_eq!(json["color"], "yellow");
    assert!(json["updated_at"].is_string());
}

#[tokio::test]
async fn should_return_not_found_for_unknown_route() {
    let (status, _) = get(&app(), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
