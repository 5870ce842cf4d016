// Project catalog handler

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::AppState;

/// List all portfolio projects
/// GET /api/projects — same ordered sequence on every call
pub async fn list_projects(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.catalog.list().to_vec()))
}
