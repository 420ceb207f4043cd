//! Short URL entity representing a short identifier and its target.

use chrono::{DateTime, Utc};

use super::Visit;

/// A short identifier mapped to the long URL it redirects to.
///
/// `short_id` and `redirect_url` never change after creation; the only
/// mutation is appending to `visit_history`.
#[derive(Debug, Clone)]
pub struct ShortUrl {
    pub short_id: String,
    pub redirect_url: String,
    pub created_at: DateTime<Utc>,
    pub visit_history: Vec<Visit>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        short_id: String,
        redirect_url: String,
        created_at: DateTime<Utc>,
        visit_history: Vec<Visit>,
    ) -> Self {
        Self {
            short_id,
            redirect_url,
            created_at,
            visit_history,
        }
    }

    /// Number of recorded redirects.
    pub fn total_clicks(&self) -> usize {
        self.visit_history.len()
    }
}

/// Input data for creating a new short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub short_id: String,
    pub redirect_url: String,
}
