//! Prometheus metrics handler

use crate::application::Dispatch;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// Initialize the Prometheus metrics exporter
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    // Describe metrics
    describe_counter!(
        "call_events_total",
        "Total number of call lifecycle events received"
    );
    describe_counter!(
        "call_actions_total",
        "Total number of actions returned to the platform"
    );
    describe_counter!(
        "call_control_failures_total",
        "Events answered through the error and hangup path"
    );

    Ok(handle)
}

/// HTTP metrics handler
pub async fn metrics_handler(
    axum::extract::State(prometheus_handle): axum::extract::State<PrometheusHandle>,
) -> Response {
    let metrics = prometheus_handle.render();
    (StatusCode::OK, metrics).into_response()
}

/// Record the outcome of one dispatched event
pub fn record_dispatch(dispatch: &Dispatch) {
    counter!("call_events_total", "event_type" => dispatch.event_type.clone()).increment(1);

    for action in &dispatch.response.actions {
        counter!("call_actions_total", "action" => action.action_type().to_string()).increment(1);
    }

    if dispatch.error.is_some() {
        counter!("call_control_failures_total", "event_type" => dispatch.event_type.clone())
            .increment(1);
    }
}
