//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl, Visit};
use crate::domain::repositories::{ShortUrlRepository, ShortUrlSummary};
use crate::error::AppError;

/// PostgreSQL repository for short URL records.
///
/// Records live in `short_urls`; each visit is a row in `visit_history`
/// ordered by its `BIGSERIAL` id. `visited_at` holds the visit timestamp in
/// milliseconds since the Unix epoch.
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ShortUrlRow {
    short_id: String,
    redirect_url: String,
    created_at: DateTime<Utc>,
}

#[derive(FromRow)]
struct VisitRow {
    id: i64,
    visited_at: i64,
}

#[derive(FromRow)]
struct SummaryRow {
    short_id: String,
    redirect_url: String,
    created_at: DateTime<Utc>,
    total_clicks: i64,
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            INSERT INTO short_urls (short_id, redirect_url)
            VALUES ($1, $2)
            RETURNING short_id, redirect_url, created_at
            "#,
        )
        .bind(&new_short_url.short_id)
        .bind(&new_short_url.redirect_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(ShortUrl::new(
            row.short_id,
            row.redirect_url,
            row.created_at,
            Vec::new(),
        ))
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT short_id, redirect_url, created_at
            FROM short_urls
            WHERE short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let visits = sqlx::query_as::<_, VisitRow>(
            r#"
            SELECT id, visited_at
            FROM visit_history
            WHERE short_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(short_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(Some(ShortUrl::new(
            row.short_id,
            row.redirect_url,
            row.created_at,
            visits
                .into_iter()
                .map(|v| Visit::new(v.id, v.visited_at))
                .collect(),
        )))
    }

    async fn record_visit(
        &self,
        short_id: &str,
        timestamp: i64,
    ) -> Result<Option<String>, AppError> {
        // Data-modifying CTEs always run, so the lookup and the append are one statement.
        let redirect_url = sqlx::query_scalar::<_, String>(
            r#"
            WITH target AS (
                SELECT short_id, redirect_url
                FROM short_urls
                WHERE short_id = $1
            ), appended AS (
                INSERT INTO visit_history (short_id, visited_at)
                SELECT short_id, $2 FROM target
                RETURNING id
            )
            SELECT redirect_url FROM target
            "#,
        )
        .bind(short_id)
        .bind(timestamp)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(redirect_url)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<ShortUrlSummary>, AppError> {
        let rows = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT s.short_id, s.redirect_url, s.created_at, COUNT(v.id) AS total_clicks
            FROM short_urls s
            LEFT JOIN visit_history v ON v.short_id = s.short_id
            GROUP BY s.short_id
            ORDER BY s.created_at DESC, s.short_id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.max(0))
        .bind(offset.max(0))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ShortUrlSummary {
                short_id: r.short_id,
                redirect_url: r.redirect_url,
                created_at: r.created_at,
                total_clicks: r.total_clicks,
            })
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM short_urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn count_visits(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM visit_history")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
