//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, ShortUrlService};
use crate::domain::repositories::ShortUrlRepository;

/// Handles passed explicitly to every request handler.
///
/// Cloning is cheap; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub short_url_service: Arc<ShortUrlService>,
    pub analytics_service: Arc<AnalyticsService>,
    pub store: Arc<dyn ShortUrlRepository>,
}

impl AppState {
    /// Builds the services on top of a single record store.
    pub fn new(store: Arc<dyn ShortUrlRepository>) -> Self {
        Self {
            short_url_service: Arc::new(ShortUrlService::new(store.clone())),
            analytics_service: Arc::new(AnalyticsService::new(store.clone())),
            store,
        }
    }
}
