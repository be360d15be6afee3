//! Invocation API integration tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{json, Value};
use tower::ServiceExt; // For `oneshot`
use voicefocus_pstn::application::CallController;
use voicefocus_pstn::domain::action::AudioAssets;
use voicefocus_pstn::interface::api::{build_router, AppState};

fn app() -> Router {
    let controller = CallController::new(AudioAssets::new("fake-bucket"));
    let prometheus_handle = PrometheusBuilder::new().build_recorder().handle();
    build_router(AppState::new(controller), prometheus_handle)
}

async fn post_invoke(body: impl Into<Body>) -> (StatusCode, Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/invoke")
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_invoke_new_inbound_call() {
    let event = json!({
        "InvocationEventType": "NEW_INBOUND_CALL",
        "CallDetails": {
            "Participants": [{ "CallId": "leg-a", "To": "+12125551212", "From": "+12035551212" }]
        }
    });

    let (status, json) = post_invoke(event.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["SchemaVersion"], "1.0");
    assert_eq!(json["Actions"][0]["Type"], "Pause");
    assert_eq!(json["Actions"][1]["Type"], "PlayAudioAndGetDigits");
}

#[tokio::test]
async fn test_invoke_with_garbage_body() {
    let (status, json) = post_invoke("not json at all").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "SchemaVersion": "1.0", "Actions": [] }));
}

#[tokio::test]
async fn test_health_check() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "OK");
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let response = app()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
