//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Ready once the dataset is loaded and callbacks are registered.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if is_ready(&state) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let status = if is_ready(&state) { "healthy" } else { "unhealthy" };

    Json(HealthResponse {
        status: status.to_string(),
        records: state.dataset.len(),
        callbacks: state.registry.callbacks().len(),
        snapshots: state.snapshots.is_some(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn is_ready(state: &AppState) -> bool {
    !state.dataset.is_empty() && !state.registry.callbacks().is_empty()
}
