//! Repository trait for short URL records.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A short URL record without its visit list, as returned by listings.
#[derive(Debug, Clone)]
pub struct ShortUrlSummary {
    pub short_id: String,
    pub redirect_url: String,
    pub created_at: DateTime<Utc>,
    pub total_clicks: i64,
}

/// Repository interface for the short URL record store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryShortUrlRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Short name of the backing store, reported by the health check.
    fn backend_name(&self) -> &'static str;

    /// Persists a new record with an empty visit history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors, including a duplicate
    /// `short_id`.
    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a record and its full visit history, in append order.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortUrl))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Atomically looks up a record and appends a visit to its history.
    ///
    /// Concurrent calls for the same `short_id` each append exactly one entry.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(redirect_url))` if the record exists and the visit was stored
    /// - `Ok(None)` if no record matches; nothing is written
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn record_visit(&self, short_id: &str, timestamp: i64)
    -> Result<Option<String>, AppError>;

    /// Lists records, newest first, with their click counts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<ShortUrlSummary>, AppError>;

    /// Counts all records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Counts all recorded visits across every record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn count_visits(&self) -> Result<i64, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
