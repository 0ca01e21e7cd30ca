//! SQLite implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// SQLite repository for short link storage and retrieval.
///
/// Queries are bound at runtime; the short-code UNIQUE constraint carries
/// the atomicity of create's check-and-insert.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    active: bool,
}

impl From<LinkRow> for ShortLink {
    fn from(row: LinkRow) -> Self {
        ShortLink::new(
            row.id,
            row.original_url,
            row.short_code,
            row.created_at,
            row.expires_at,
            row.active,
        )
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO short_links (original_url, short_code, created_at, expires_at, active)
            VALUES (?, ?, ?, ?, 1)
            RETURNING id, original_url, short_code, created_at, expires_at, active
            "#,
        )
        .bind(&new_link.original_url)
        .bind(&new_link.short_code)
        .bind(Utc::now())
        .bind(new_link.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, original_url, short_code, created_at, expires_at, active
            FROM short_links
            WHERE short_code = ?
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn deactivate(&self, short_code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE short_links SET active = 0 WHERE short_code = ?")
            .bind(short_code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, short_code: &str) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let link_id: Option<i64> =
            sqlx::query_scalar("SELECT id FROM short_links WHERE short_code = ?")
                .bind(short_code)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(link_id) = link_id else {
            return Ok(false);
        };

        sqlx::query("DELETE FROM visits WHERE link_id = ?")
            .bind(link_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM short_links WHERE id = ?")
            .bind(link_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(true)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
