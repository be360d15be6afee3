//! Invocation endpoint standing in for the serverless runtime

use super::metrics_handler::record_dispatch;
use crate::application::CallController;
use crate::domain::action::ActionResponse;
use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<CallController>,
}

impl AppState {
    pub fn new(controller: CallController) -> Self {
        Self {
            controller: Arc::new(controller),
        }
    }
}

/// Handle one platform event.
///
/// The body is parsed leniently so that even unparseable input gets an
/// empty, schema-valid response instead of a rejection.
pub async fn invoke(State(state): State<AppState>, body: Bytes) -> Json<ActionResponse> {
    let event: Value = serde_json::from_slice(&body).unwrap_or_else(|e| {
        warn!("Invocation body is not JSON: {}", e);
        Value::Null
    });

    let dispatch = state.controller.dispatch(&event);
    record_dispatch(&dispatch);
    debug!(
        "SEND {} response with {} actions",
        dispatch.event_type,
        dispatch.response.actions.len()
    );

    Json(dispatch.response)
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Health check
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus { status: "OK" })
}
