//! Cross-origin resource sharing for browser clients.

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Creates a CORS layer for the configured origin.
///
/// `"*"` allows any origin; any other value is matched exactly.
/// Only the methods and headers the API uses are allowed.
///
/// # Errors
///
/// Returns an error if `origin` is not a valid header value.
pub fn layer(origin: &str) -> Result<CorsLayer> {
    let allow_origin = if origin == "*" {
        AllowOrigin::from(Any)
    } else {
        let value = HeaderValue::from_str(origin)
            .with_context(|| format!("Invalid CORS origin '{}'", origin))?;
        AllowOrigin::exact(value)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
