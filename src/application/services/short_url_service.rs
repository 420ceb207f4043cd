//! Short URL creation and redirect service.

use std::sync::Arc;

use crate::domain::entities::visit::now_millis;
use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::utils::short_id::generate_short_id;
use serde_json::json;
use tracing::debug;

/// Service for creating short URLs and resolving them on redirect.
pub struct ShortUrlService {
    repository: Arc<dyn ShortUrlRepository>,
}

impl ShortUrlService {
    /// Creates a new short URL service.
    pub fn new(repository: Arc<dyn ShortUrlRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short URL for `redirect_url`.
    ///
    /// The target is stored as given; only emptiness is rejected. The
    /// identifier is freshly generated and not checked for collisions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `redirect_url` is empty.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn shorten(&self, redirect_url: String) -> Result<ShortUrl, AppError> {
        if redirect_url.is_empty() {
            return Err(AppError::bad_request("URL is required", json!({})));
        }

        let new_short_url = NewShortUrl {
            short_id: generate_short_id()?,
            redirect_url,
        };

        let record = self.repository.create(new_short_url).await?;
        debug!(short_id = %record.short_id, "Created short URL");

        Ok(record)
    }

    /// Records a visit to `short_id` and returns its redirect target.
    ///
    /// The lookup and the append happen in a single store operation, so
    /// concurrent visits never lose an entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches `short_id`.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn visit(&self, short_id: &str) -> Result<String, AppError> {
        self.repository
            .record_visit(short_id, now_millis())
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "short_id": short_id }))
            })
    }
}
