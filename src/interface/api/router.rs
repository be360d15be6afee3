//! API Router configuration

use super::invoke_handler::{health_check, invoke, AppState};
use super::metrics_handler::metrics_handler;
use axum::{
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

/// Build the API router
pub fn build_router(state: AppState, prometheus_handle: PrometheusHandle) -> Router {
    let invoke_routes = Router::new()
        .route("/invoke", post(invoke))
        .with_state(state);

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(prometheus_handle);

    Router::new()
        .route("/health", get(health_check))
        .merge(invoke_routes)
        .merge(metrics_routes)
        .layer(TraceLayer::new_for_http())
}
