// Handlers module
// HTTP handlers for the portfolio API

pub mod contact;
pub mod projects;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Service identifier reported by the health endpoint.
pub const SERVICE_NAME: &str = "portfolio-api";

/// Health check handler
/// GET /api/health — constant body, no failure modes
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": SERVICE_NAME })),
    )
}
