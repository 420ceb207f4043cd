//! Handler for the shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortId": "abc12345" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing or empty; no record is created.
pub async fn shorten_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let record = state
        .short_url_service
        .shorten(payload.url.unwrap_or_default())
        .await?;

    Ok(Json(ShortenResponse {
        short_id: record.short_id,
    }))
}
