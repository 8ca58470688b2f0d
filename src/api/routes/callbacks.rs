//! Callback Routes
//!
//! Server endpoints of the reactive runtime.
//!
//! - GET /api/v1/callbacks - Registration table (outputs and their inputs)
//! - POST /api/v1/callbacks/:output_id - Run the callback for one output

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{CallbackRequest, CallbackResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::chart::Figure;

/// GET /api/v1/callbacks
///
/// The page uses this to learn which inputs redraw which graphs.
pub async fn list_callbacks(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<serde_json::Value>> {
    let table = serde_json::to_value(state.registry.table())
        .map_err(|e| ApiError::Internal(format!("Failed to serialize callbacks: {}", e)))?;
    Ok(Json(table))
}

/// POST /api/v1/callbacks/:output_id
///
/// Compute the chart for the posted inputs, refresh its snapshot file when
/// snapshots are enabled, and return the figure.
pub async fn run_callback(
    State(state): State<Arc<AppState>>,
    Path(output_id): Path<String>,
    Json(req): Json<CallbackRequest>,
) -> ApiResult<Json<CallbackResponse>> {
    let (callback, spec) = state
        .registry
        .dispatch(&output_id, &state.dataset, &req.inputs)?;

    tracing::debug!(
        output = %callback.output,
        title = %spec.title,
        marks = spec.mark_count(),
        "Callback computed"
    );

    let snapshot = match (&state.snapshots, &callback.snapshot) {
        (Some(writer), Some(file_name)) => {
            writer.persist(file_name, &spec).await?;
            Some(file_name.clone())
        }
        _ => None,
    };

    Ok(Json(CallbackResponse {
        output: callback.output.clone(),
        figure: Figure::from_spec(&spec),
        spec,
        snapshot,
    }))
}
