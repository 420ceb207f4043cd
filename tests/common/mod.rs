#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use short_url::api::middleware::cors;
use short_url::domain::entities::{NewShortUrl, ShortUrl};
use short_url::domain::repositories::{ShortUrlRepository, ShortUrlSummary};
use short_url::error::AppError;
use short_url::infrastructure::persistence::MemoryShortUrlRepository;
use short_url::routes::router;
use short_url::state::AppState;

/// State backed by a fresh in-memory store, plus a handle to inspect it.
pub fn create_test_state() -> (AppState, Arc<MemoryShortUrlRepository>) {
    let store = Arc::new(MemoryShortUrlRepository::new());
    (AppState::new(store.clone()), store)
}

/// A test server running the full application router.
pub fn create_test_server(state: AppState) -> TestServer {
    let cors = cors::layer("*").unwrap();
    TestServer::new(router(state, cors)).unwrap()
}

/// Inserts a record directly into the store, bypassing the API.
pub async fn create_test_short_url(store: &MemoryShortUrlRepository, short_id: &str, url: &str) {
    store
        .create(NewShortUrl {
            short_id: short_id.to_string(),
            redirect_url: url.to_string(),
        })
        .await
        .unwrap();
}

/// A store whose every operation fails, for exercising 5xx paths.
pub struct FailingStore;

fn unavailable() -> AppError {
    AppError::internal("Database error", json!({}))
}

#[async_trait]
impl ShortUrlRepository for FailingStore {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    async fn create(&self, _new_short_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        Err(unavailable())
    }

    async fn find_by_short_id(&self, _short_id: &str) -> Result<Option<ShortUrl>, AppError> {
        Err(unavailable())
    }

    async fn record_visit(
        &self,
        _short_id: &str,
        _timestamp: i64,
    ) -> Result<Option<String>, AppError> {
        Err(unavailable())
    }

    async fn list(&self, _limit: i64, _offset: i64) -> Result<Vec<ShortUrlSummary>, AppError> {
        Err(unavailable())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(unavailable())
    }

    async fn count_visits(&self) -> Result<i64, AppError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unavailable())
    }
}

pub fn create_failing_state() -> AppState {
    AppState::new(Arc::new(FailingStore))
}
