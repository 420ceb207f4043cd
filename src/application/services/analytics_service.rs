//! Click analytics service.

use std::sync::Arc;

use crate::domain::entities::Visit;
use crate::domain::repositories::{ShortUrlRepository, ShortUrlSummary};
use crate::error::AppError;
use serde_json::json;

/// Click analytics for a single short URL.
#[derive(Debug, Clone)]
pub struct Analytics {
    pub short_id: String,
    pub redirect_url: String,
    pub total_clicks: usize,
    pub visits: Vec<Visit>,
}

/// Store-wide totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSummary {
    pub total_urls: i64,
    pub total_visits: i64,
}

/// Service for reading visit history and aggregate counts.
pub struct AnalyticsService {
    repository: Arc<dyn ShortUrlRepository>,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    pub fn new(repository: Arc<dyn ShortUrlRepository>) -> Self {
        Self { repository }
    }

    /// Returns the total click count and full visit list for `short_id`.
    ///
    /// `total_clicks` is always the length of `visits`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches `short_id`.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn analytics(&self, short_id: &str) -> Result<Analytics, AppError> {
        let record = self
            .repository
            .find_by_short_id(short_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "short_id": short_id }))
            })?;

        Ok(Analytics {
            total_clicks: record.total_clicks(),
            short_id: record.short_id,
            redirect_url: record.redirect_url,
            visits: record.visit_history,
        })
    }

    /// Lists records, newest first, with their click counts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `limit` is not positive or `offset` is negative.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<ShortUrlSummary>, AppError> {
        if limit <= 0 || offset < 0 {
            return Err(AppError::bad_request(
                "limit must be positive and offset non-negative",
                json!({ "limit": limit, "offset": offset }),
            ));
        }

        self.repository.list(limit, offset).await
    }

    /// Counts records and visits across the whole store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn summary(&self) -> Result<StoreSummary, AppError> {
        Ok(StoreSummary {
            total_urls: self.repository.count().await?,
            total_visits: self.repository.count_visits().await?,
        })
    }
}
