//! Business logic services for the application layer.

pub mod analytics_service;
pub mod short_url_service;

pub use analytics_service::{Analytics, AnalyticsService, StoreSummary};
pub use short_url_service::ShortUrlService;
