//! Visit entity representing a single redirect.

use chrono::Utc;

/// One entry of a short URL's append-only visit history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    /// Store-assigned identifier, increasing in append order.
    pub id: i64,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl Visit {
    pub fn new(id: i64, timestamp: i64) -> Self {
        Self { id, timestamp }
    }
}

/// Current time as milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
