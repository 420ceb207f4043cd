//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, info};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::location::encode_location;

/// Redirects a short identifier to its original URL and records the visit.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// The visit is appended before the response is sent, so analytics read
/// after the redirect already include it. Bytes that cannot appear in a
/// header are percent-encoded in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the short identifier doesn't exist.
/// Returns 500 Internal Server Error on store failure.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
) -> Result<Response, AppError> {
    let redirect_url = state
        .short_url_service
        .visit(&short_id)
        .await
        .inspect_err(|e| debug!(%short_id, error = %e, "Redirect failed"))?;

    let location = HeaderValue::from_str(&encode_location(&redirect_url)).map_err(|_| {
        AppError::internal(
            "Stored redirect URL is not a valid Location header",
            json!({ "short_id": short_id }),
        )
    })?;

    info!(%short_id, %redirect_url, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
