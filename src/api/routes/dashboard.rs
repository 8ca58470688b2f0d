//! Dashboard Routes
//!
//! - GET / - Dashboard page
//! - GET /api/v1/layout - Widget tree
//! - GET /api/v1/dataset - Loaded dataset summary

use axum::{extract::State, response::Html, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::dataset::DatasetSummary;
use crate::layout::Widget;

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page.as_ref().clone())
}

/// GET /api/v1/layout
pub async fn layout(State(state): State<Arc<AppState>>) -> Json<Widget> {
    Json(state.layout.as_ref().clone())
}

/// GET /api/v1/dataset
pub async fn dataset_summary(State(state): State<Arc<AppState>>) -> Json<DatasetSummary> {
    Json(state.dataset.summary())
}
