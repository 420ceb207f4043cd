//! Handler for per-URL click analytics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click count and visit list for a short identifier.
///
/// # Endpoint
///
/// `GET /url/analytics/{short_id}`
///
/// # Response
///
/// ```json
/// {
///   "totalClicks": 1,
///   "analytics": [{ "timestamp": 1700000000000, "_id": 1 }]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short identifier doesn't exist.
pub async fn analytics_handler(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let analytics = state.analytics_service.analytics(&short_id).await?;

    Ok(Json(analytics.into()))
}
