//! DTOs for the health endpoint.

use serde::Serialize;

/// Overall service health.
///
/// `status` is `"healthy"` when every check passed, `"degraded"` otherwise.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: StoreCheck,
}

/// Reachability of the record store.
#[derive(Debug, Serialize)]
pub struct StoreCheck {
    /// `"ok"` or `"error"`.
    pub status: &'static str,
    /// Store implementation in use, e.g. `"postgres"`.
    pub backend: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StoreCheck {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
