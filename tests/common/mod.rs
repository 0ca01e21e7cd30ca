#![allow(dead_code)]

use chrono::{Duration, Utc};
use linklet::infrastructure::persistence::init_schema;
use linklet::state::AppState;
use sqlx::SqlitePool;

/// Initializes the schema and builds the full service graph over the pool.
pub async fn create_test_state(pool: SqlitePool) -> AppState {
    init_schema(&pool).await.unwrap();
    AppState::new(pool, None)
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO short_links (original_url, short_code, created_at, active)
         VALUES (?, ?, ?, 1) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_deactivated_link(pool: &SqlitePool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO short_links (original_url, short_code, created_at, active)
         VALUES (?, ?, ?, 0) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_expired_link(pool: &SqlitePool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO short_links (original_url, short_code, created_at, expires_at, active)
         VALUES (?, ?, ?, ?, 1) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .bind(Utc::now() - Duration::days(1))
    .bind(Utc::now() - Duration::hours(1))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_visit(
    pool: &SqlitePool,
    link_id: i64,
    referrer: Option<&str>,
    user_agent: Option<&str>,
) {
    sqlx::query(
        "INSERT INTO visits (link_id, visited_at, referrer, user_agent, client_address)
         VALUES (?, ?, ?, ?, '127.0.0.1')",
    )
    .bind(link_id)
    .bind(Utc::now())
    .bind(referrer)
    .bind(user_agent)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_visits(pool: &SqlitePool, link_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM visits WHERE link_id = ?")
        .bind(link_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn link_is_active(pool: &SqlitePool, code: &str) -> bool {
    sqlx::query_scalar("SELECT active FROM short_links WHERE short_code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn link_exists(pool: &SqlitePool, code: &str) -> bool {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM short_links WHERE short_code = ?)")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}
