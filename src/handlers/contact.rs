// Contact form handler
// Validates the submission and relays it to Telegram

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::info;

use crate::{error::ApiError, models::ContactRequest, AppState};

/// Relay a contact form submission
/// POST /api/contact
///
/// A missing or undecodable body falls back to an empty request, which the
/// presence checks then reject with 400. A notifier failure is not an HTTP
/// error: the caller gets 200 with `success: false`.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Option<Json<ContactRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let submission = request.into_submission().map_err(ApiError::validation)?;

    info!("Contact submission received from {}", submission.email);
    let sent = state.notifier.send(&submission.notification_text()).await;

    Ok((StatusCode::OK, Json(json!({ "success": sent }))))
}
