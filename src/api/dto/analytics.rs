//! DTOs for the analytics endpoint.

use serde::Serialize;

use crate::application::services::Analytics;

/// Click analytics for one short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total_clicks: usize,
    pub analytics: Vec<VisitInfo>,
}

/// A single visit entry, in append order.
#[derive(Debug, Serialize)]
pub struct VisitInfo {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(rename = "_id")]
    pub id: i64,
}

impl From<Analytics> for AnalyticsResponse {
    fn from(analytics: Analytics) -> Self {
        Self {
            total_clicks: analytics.total_clicks,
            analytics: analytics
                .visits
                .into_iter()
                .map(|visit| VisitInfo {
                    timestamp: visit.timestamp,
                    id: visit.id,
                })
                .collect(),
        }
    }
}
