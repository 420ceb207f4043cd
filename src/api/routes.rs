//! API route configuration.

use crate::api::handlers::{analytics_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Shortening and analytics routes.
///
/// # Endpoints
///
/// - `POST /url`                        - Create a short URL
/// - `GET  /url/analytics/{short_id}`   - Click analytics for a short URL
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(shorten_handler))
        .route("/url/analytics/{short_id}", get(analytics_handler))
}
