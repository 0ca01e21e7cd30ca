mod common;

use chrono::{Duration, Utc};
use linklet::AppError;
use linklet::domain::entities::NewShortLink;
use linklet::domain::repositories::LinkRepository;
use linklet::infrastructure::persistence::{SqliteLinkRepository, init_schema};
use sqlx::SqlitePool;
use std::sync::Arc;

async fn repository(pool: &SqlitePool) -> SqliteLinkRepository {
    init_schema(pool).await.unwrap();
    SqliteLinkRepository::new(Arc::new(pool.clone()))
}

fn new_link(code: &str, url: &str) -> NewShortLink {
    NewShortLink {
        original_url: url.to_string(),
        short_code: code.to_string(),
        expires_at: None,
    }
}

#[sqlx::test]
async fn test_create_and_find_by_code(pool: SqlitePool) {
    let repo = repository(&pool).await;

    let created = repo
        .create(new_link("abc123", "https://example.com/path"))
        .await
        .unwrap();

    assert_eq!(created.short_code, "abc123");
    assert_eq!(created.original_url, "https://example.com/path");
    assert!(created.active);
    assert!(created.expires_at.is_none());

    let found = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.original_url, "https://example.com/path");
}

#[sqlx::test]
async fn test_create_preserves_expiry(pool: SqlitePool) {
    let repo = repository(&pool).await;

    let expires = Utc::now() + Duration::days(7);
    let created = repo
        .create(NewShortLink {
            original_url: "https://example.com".to_string(),
            short_code: "exp".to_string(),
            expires_at: Some(expires),
        })
        .await
        .unwrap();

    let stored = created.expires_at.unwrap();
    assert!((stored - expires).num_seconds().abs() < 1);
}

#[sqlx::test]
async fn test_create_duplicate_code_conflicts(pool: SqlitePool) {
    let repo = repository(&pool).await;

    repo.create(new_link("dup", "https://example.com/1"))
        .await
        .unwrap();

    let result = repo.create(new_link("dup", "https://example.com/2")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_find_by_code_absent(pool: SqlitePool) {
    let repo = repository(&pool).await;

    assert!(repo.find_by_code("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_deactivate_and_idempotency(pool: SqlitePool) {
    let repo = repository(&pool).await;

    repo.create(new_link("flag", "https://example.com"))
        .await
        .unwrap();

    assert!(repo.deactivate("flag").await.unwrap());
    assert!(!repo.find_by_code("flag").await.unwrap().unwrap().active);

    // Second deactivation still matches the row and succeeds.
    assert!(repo.deactivate("flag").await.unwrap());
}

#[sqlx::test]
async fn test_deactivate_absent_returns_false(pool: SqlitePool) {
    let repo = repository(&pool).await;

    assert!(!repo.deactivate("missing").await.unwrap());
}

#[sqlx::test]
async fn test_delete_cascades_visits(pool: SqlitePool) {
    let repo = repository(&pool).await;

    let created = repo
        .create(new_link("purge", "https://example.com"))
        .await
        .unwrap();
    for _ in 0..4 {
        common::create_test_visit(&pool, created.id, Some("a.com"), None).await;
    }
    assert_eq!(common::count_visits(&pool, created.id).await, 4);

    assert!(repo.delete("purge").await.unwrap());

    assert!(repo.find_by_code("purge").await.unwrap().is_none());
    assert_eq!(common::count_visits(&pool, created.id).await, 0);
}

#[sqlx::test]
async fn test_delete_absent_returns_false(pool: SqlitePool) {
    let repo = repository(&pool).await;

    assert!(!repo.delete("missing").await.unwrap());
}

#[sqlx::test]
async fn test_count(pool: SqlitePool) {
    let repo = repository(&pool).await;

    assert_eq!(repo.count().await.unwrap(), 0);

    for i in 0..3 {
        repo.create(new_link(&format!("code{}", i), "https://example.com"))
            .await
            .unwrap();
    }

    // Deactivated links still count.
    repo.deactivate("code1").await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 3);
}
