mod common;

use linklet::AppError;
use linklet::domain::entities::NewVisit;
use linklet::domain::repositories::VisitRepository;
use linklet::infrastructure::persistence::{SqliteVisitRepository, init_schema};
use sqlx::SqlitePool;
use std::sync::Arc;

async fn repository(pool: &SqlitePool) -> SqliteVisitRepository {
    init_schema(pool).await.unwrap();
    SqliteVisitRepository::new(Arc::new(pool.clone()))
}

fn visit_for(link_id: i64, referrer: Option<&str>) -> NewVisit {
    NewVisit {
        link_id,
        referrer: referrer.map(String::from),
        user_agent: Some("Mozilla/5.0".to_string()),
        client_address: Some("10.0.0.1".to_string()),
    }
}

#[sqlx::test]
async fn test_record_and_list_in_insertion_order(pool: SqlitePool) {
    let repo = repository(&pool).await;
    let link_id = common::create_test_link(&pool, "abc", "https://example.com").await;

    let first = repo.record(visit_for(link_id, Some("a.com"))).await.unwrap();
    let second = repo.record(visit_for(link_id, Some("b.com"))).await.unwrap();

    assert_eq!(first.link_id, link_id);
    assert_eq!(first.referrer.as_deref(), Some("a.com"));
    assert_eq!(first.user_agent.as_deref(), Some("Mozilla/5.0"));
    assert!(second.id > first.id);

    let visits = repo.list_for_link(link_id).await.unwrap();
    assert_eq!(visits.len(), 2);
    assert_eq!(visits[0].referrer.as_deref(), Some("a.com"));
    assert_eq!(visits[1].referrer.as_deref(), Some("b.com"));
}

#[sqlx::test]
async fn test_record_for_missing_link_is_not_found(pool: SqlitePool) {
    let repo = repository(&pool).await;

    let result = repo.record(visit_for(999, None)).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_recent_for_link_newest_first_with_limit(pool: SqlitePool) {
    let repo = repository(&pool).await;
    let link_id = common::create_test_link(&pool, "busy", "https://example.com").await;

    for i in 0..5 {
        repo.record(visit_for(link_id, Some(&format!("ref{}.com", i))))
            .await
            .unwrap();
    }

    let recent = repo.recent_for_link(link_id, 3).await.unwrap();

    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].referrer.as_deref(), Some("ref4.com"));
    assert_eq!(recent[2].referrer.as_deref(), Some("ref2.com"));
}

#[sqlx::test]
async fn test_link_stats_joins_counts(pool: SqlitePool) {
    let repo = repository(&pool).await;
    let clicked = common::create_test_link(&pool, "clicked", "https://example.com/1").await;
    common::create_test_link(&pool, "untouched", "https://example.com/2").await;

    for _ in 0..2 {
        repo.record(visit_for(clicked, None)).await.unwrap();
    }

    let stats = repo.link_stats(0, 10).await.unwrap();
    assert_eq!(stats.len(), 2);

    let clicked_row = stats.iter().find(|s| s.short_code == "clicked").unwrap();
    assert_eq!(clicked_row.click_count, 2);
    assert_eq!(clicked_row.original_url, "https://example.com/1");
    assert!(clicked_row.active);

    let untouched_row = stats.iter().find(|s| s.short_code == "untouched").unwrap();
    assert_eq!(untouched_row.click_count, 0);
}

#[sqlx::test]
async fn test_link_stats_pagination(pool: SqlitePool) {
    let repo = repository(&pool).await;

    for i in 0..4 {
        common::create_test_link(&pool, &format!("code{}", i), "https://example.com").await;
    }

    let page = repo.link_stats(1, 2).await.unwrap();
    assert_eq!(page.len(), 2);
}
