//! SQLite implementation of the visit repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewVisit, Visit};
use crate::domain::repositories::{LinkStats, VisitRepository};
use crate::error::AppError;

/// SQLite repository for visit records and per-link counts.
pub struct SqliteVisitRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteVisitRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct VisitRow {
    id: i64,
    link_id: i64,
    visited_at: DateTime<Utc>,
    referrer: Option<String>,
    user_agent: Option<String>,
    client_address: Option<String>,
}

impl From<VisitRow> for Visit {
    fn from(row: VisitRow) -> Self {
        Visit::new(
            row.id,
            row.link_id,
            row.visited_at,
            row.referrer,
            row.user_agent,
            row.client_address,
        )
    }
}

#[derive(sqlx::FromRow)]
struct LinkStatsRow {
    link_id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    active: bool,
    click_count: i64,
}

#[async_trait]
impl VisitRepository for SqliteVisitRepository {
    async fn record(&self, new_visit: NewVisit) -> Result<Visit, AppError> {
        let link_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM short_links WHERE id = ?)")
                .bind(new_visit.link_id)
                .fetch_one(self.pool.as_ref())
                .await?;

        if !link_exists {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "link_id": new_visit.link_id }),
            ));
        }

        let row = sqlx::query_as::<_, VisitRow>(
            r#"
            INSERT INTO visits (link_id, visited_at, referrer, user_agent, client_address)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, link_id, visited_at, referrer, user_agent, client_address
            "#,
        )
        .bind(new_visit.link_id)
        .bind(Utc::now())
        .bind(&new_visit.referrer)
        .bind(&new_visit.user_agent)
        .bind(&new_visit.client_address)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_for_link(&self, link_id: i64) -> Result<Vec<Visit>, AppError> {
        let rows = sqlx::query_as::<_, VisitRow>(
            r#"
            SELECT id, link_id, visited_at, referrer, user_agent, client_address
            FROM visits
            WHERE link_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(link_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn recent_for_link(&self, link_id: i64, limit: i64) -> Result<Vec<Visit>, AppError> {
        let rows = sqlx::query_as::<_, VisitRow>(
            r#"
            SELECT id, link_id, visited_at, referrer, user_agent, client_address
            FROM visits
            WHERE link_id = ?
            ORDER BY visited_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(link_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn link_stats(&self, offset: i64, limit: i64) -> Result<Vec<LinkStats>, AppError> {
        let rows = sqlx::query_as::<_, LinkStatsRow>(
            r#"
            SELECT
                l.id AS link_id,
                l.original_url,
                l.short_code,
                l.created_at,
                l.expires_at,
                l.active,
                COUNT(v.id) AS click_count
            FROM short_links l
            LEFT JOIN visits v ON v.link_id = l.id
            GROUP BY l.id
            ORDER BY l.created_at DESC, l.id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| LinkStats {
                link_id: r.link_id,
                original_url: r.original_url,
                short_code: r.short_code,
                created_at: r.created_at,
                expires_at: r.expires_at,
                active: r.active,
                click_count: r.click_count,
            })
            .collect())
    }
}
