use sqlx::PgPool;
use std::sync::Arc;
use short_url::domain::entities::NewShortUrl;
use short_url::domain::repositories::ShortUrlRepository;
use short_url::error::AppError;
use short_url::infrastructure::persistence::PgShortUrlRepository;

fn repository(pool: PgPool) -> PgShortUrlRepository {
    PgShortUrlRepository::new(Arc::new(pool))
}

fn new_short_url(short_id: &str, url: &str) -> NewShortUrl {
    NewShortUrl {
        short_id: short_id.to_string(),
        redirect_url: url.to_string(),
    }
}

#[sqlx::test]
async fn test_create_and_find(pool: PgPool) {
    let repo = repository(pool);

    let created = repo
        .create(new_short_url("abc12345", "https://example.com/page"))
        .await
        .unwrap();
    assert_eq!(created.short_id, "abc12345");
    assert!(created.visit_history.is_empty());

    let found = repo.find_by_short_id("abc12345").await.unwrap().unwrap();
    assert_eq!(found.redirect_url, "https://example.com/page");
    assert_eq!(found.total_clicks(), 0);

    assert!(repo.find_by_short_id("missing0").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_duplicate_short_id_is_internal_error(pool: PgPool) {
    let repo = repository(pool);
    repo.create(new_short_url("dup00000", "https://a.com"))
        .await
        .unwrap();

    let result = repo.create(new_short_url("dup00000", "https://b.com")).await;

    assert!(matches!(result, Err(AppError::Internal { .. })));
    let kept = repo.find_by_short_id("dup00000").await.unwrap().unwrap();
    assert_eq!(kept.redirect_url, "https://a.com");
}

#[sqlx::test]
async fn test_record_visit_appends_in_order(pool: PgPool) {
    let repo = repository(pool);
    repo.create(new_short_url("visit001", "https://example.com"))
        .await
        .unwrap();

    let first = repo.record_visit("visit001", 1_000).await.unwrap();
    let second = repo.record_visit("visit001", 2_000).await.unwrap();

    assert_eq!(first.as_deref(), Some("https://example.com"));
    assert_eq!(second.as_deref(), Some("https://example.com"));

    let record = repo.find_by_short_id("visit001").await.unwrap().unwrap();
    let timestamps: Vec<i64> = record.visit_history.iter().map(|v| v.timestamp).collect();
    assert_eq!(timestamps, vec![1_000, 2_000]);
    assert!(record.visit_history[0].id < record.visit_history[1].id);
}

#[sqlx::test]
async fn test_record_visit_unknown_writes_nothing(pool: PgPool) {
    let repo = repository(pool);

    let result = repo.record_visit("missing0", 1_000).await.unwrap();

    assert!(result.is_none());
    assert_eq!(repo.count_visits().await.unwrap(), 0);
}

#[sqlx::test]
async fn test_concurrent_visits_are_not_lost(pool: PgPool) {
    let repo = Arc::new(repository(pool));
    repo.create(new_short_url("hot00000", "https://example.com"))
        .await
        .unwrap();

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.record_visit("hot00000", i).await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().unwrap().is_some());
    }

    let record = repo.find_by_short_id("hot00000").await.unwrap().unwrap();
    assert_eq!(record.total_clicks(), 50);
}

#[sqlx::test]
async fn test_list_and_counts(pool: PgPool) {
    let repo = repository(pool);
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
    let one = all.iter().find(|s| s.short_id == "list0001").unwrap();
    assert_eq!(one.total_clicks, 0);

    assert_eq!(repo.list(1, 0).await.unwrap().len(), 1);
    assert_eq!(repo.count().await.unwrap(), 2);
    assert_eq!(repo.count_visits().await.unwrap(), 2);
    repo.ping().await.unwrap();
}
