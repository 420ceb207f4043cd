//! In-process implementation of the short URL repository.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use serde_json::json;
use std::collections::HashMap;
use tracing::debug;

use crate::domain::entities::{NewShortUrl, ShortUrl, Visit};
use crate::domain::repositories::{ShortUrlRepository, ShortUrlSummary};
use crate::error::AppError;

/// A record store kept in process memory.
///
/// Used when `STORE_BACKEND=memory` and by the HTTP integration tests.
/// Contents are lost when the process exits.
pub struct MemoryShortUrlRepository {
    inner: RwLock<MemoryStore>,
}

#[derive(Default)]
struct MemoryStore {
    records: HashMap<String, ShortUrl>,
    next_visit_id: i64,
}

impl MemoryShortUrlRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory record store");
        Self {
            inner: RwLock::new(MemoryStore {
                records: HashMap::new(),
                next_visit_id: 1,
            }),
        }
    }
}

impl Default for MemoryShortUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShortUrlRepository for MemoryShortUrlRepository {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let mut store = self.inner.write();

        if store.records.contains_key(&new_short_url.short_id) {
            return Err(AppError::internal(
                "Short id already exists",
                json!({ "short_id": new_short_url.short_id }),
            ));
        }

        let record = ShortUrl::new(
            new_short_url.short_id,
            new_short_url.redirect_url,
            Utc::now(),
            Vec::new(),
        );
        store
            .records
            .insert(record.short_id.clone(), record.clone());

        Ok(record)
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.inner.read().records.get(short_id).cloned())
    }

    async fn record_visit(
        &self,
        short_id: &str,
        timestamp: i64,
    ) -> Result<Option<String>, AppError> {
        let mut store = self.inner.write();
        let id = store.next_visit_id;

        let Some(record) = store.records.get_mut(short_id) else {
            return Ok(None);
        };

        record.visit_history.push(Visit::new(id, timestamp));
        let redirect_url = record.redirect_url.clone();
        store.next_visit_id += 1;

        Ok(Some(redirect_url))
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<ShortUrlSummary>, AppError> {
        let store = self.inner.read();

        let mut summaries: Vec<ShortUrlSummary> = store
            .records
            .values()
            .map(|r| ShortUrlSummary {
                short_id: r.short_id.clone(),
                redirect_url: r.redirect_url.clone(),
                created_at: r.created_at,
                total_clicks: r.visit_history.len() as i64,
            })
            .collect();

        summaries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.short_id.cmp(&b.short_id))
        });

        Ok(summaries
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.inner.read().records.len() as i64)
    }

    async fn count_visits(&self) -> Result<i64, AppError> {
        Ok(self
            .inner
            .read()
            .records
            .values()
            .map(|r| r.visit_history.len() as i64)
            .sum())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_short_url(short_id: &str, url: &str) -> NewShortUrl {
        NewShortUrl {
            short_id: short_id.to_string(),
            redirect_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MemoryShortUrlRepository::new();

        let created = repo
            .create(new_short_url("abc12345", "https://example.com/page"))
            .await
            .unwrap();
        assert_eq!(created.short_id, "abc12345");
        assert!(created.visit_history.is_empty());

        let found = repo.find_by_short_id("abc12345").await.unwrap().unwrap();
        assert_eq!(found.redirect_url, "https://example.com/page");
    }

    #[tokio::test]
    async fn test_create_duplicate_short_id_fails() {
        let repo = MemoryShortUrlRepository::new();
        repo.create(new_short_url("dup00000", "https://a.com"))
            .await
            .unwrap();

        let result = repo.create(new_short_url("dup00000", "https://b.com")).await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
        let kept = repo.find_by_short_id("dup00000").await.unwrap().unwrap();
        assert_eq!(kept.redirect_url, "https://a.com");
    }

    #[tokio::test]
    async fn test_record_visit_appends_in_order() {
        let repo = MemoryShortUrlRepository::new();
        repo.create(new_short_url("visit001", "https://example.com"))
            .await
            .unwrap();

        let first = repo.record_visit("visit001", 100).await.unwrap();
        let second = repo.record_visit("visit001", 200).await.unwrap();

        assert_eq!(first.as_deref(), Some("https://example.com"));
        assert_eq!(second.as_deref(), Some("https://example.com"));

        let record = repo.find_by_short_id("visit001").await.unwrap().unwrap();
        let timestamps: Vec<i64> = record.visit_history.iter().map(|v| v.timestamp).collect();
        assert_eq!(timestamps, vec![100, 200]);
        assert!(record.visit_history[0].id < record.visit_history[1].id);
    }

    #[tokio::test]
    async fn test_record_visit_unknown_writes_nothing() {
        let repo = MemoryShortUrlRepository::new();

        let result = repo.record_visit("missing0", 100).await.unwrap();

        assert!(result.is_none());
        assert_eq!(repo.count_visits().await.unwrap(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_visits_are_not_lost() {
        let repo = Arc::new(MemoryShortUrlRepository::new());
        repo.create(new_short_url("hot00000", "https://example.com"))
            .await
            .unwrap();

        let handles: Vec<_> = (0..200)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.record_visit("hot00000", i).await })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().unwrap().is_some());
        }

        let record = repo.find_by_short_id("hot00000").await.unwrap().unwrap();
        assert_eq!(record.total_clicks(), 200);
    }

    #[tokio::test]
    async fn test_list_and_counts() {
        let repo = MemoryShortUrlRepository::new();
        repo.create(new_short_url("list0001", "https://one.com"))
            .await
            .unwrap();
        repo.create(new_short_url("list0002", "https://two.com"))
            .await
            .unwrap();
        repo.record_visit("list0002", 1).await.unwrap();
        repo.record_visit("list0002", 2).await.unwrap();

        let all = repo.list(10, 0).await.unwrap();
        assert_eq!(all.len(), 2);
        let two = all.iter().find(|s| s.short_id == "list0002").unwrap();
        assert_eq!(two.total_clicks, 2);

        assert_eq!(repo.list(1, 0).await.unwrap().len(), 1);
        assert_eq!(repo.list(10, 2).await.unwrap().len(), 0);
        assert_eq!(repo.count().await.unwrap(), 2);
        assert_eq!(repo.count_visits().await.unwrap(), 2);
    }
}
