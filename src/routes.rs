//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{short_id}`                - Short URL redirect
//! - `GET  /health`                    - Health check
//! - `POST /url`                       - Create a short URL
//! - `GET  /url/analytics/{short_id}`  - Click analytics
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configurable allowed origin for browser clients
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and layers, without path normalization.
///
/// Static routes (`/health`, `/url`) take priority over `/{short_id}`.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/{short_id}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::url_routes())
        .with_state(state)
        .layer(cors)
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] wrapped so that trailing
/// slashes are trimmed before routing.
pub fn app_router(state: AppState, cors: CorsLayer) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, cors))
}
