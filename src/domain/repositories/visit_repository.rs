//! Repository trait for visit records and per-link counts.

use crate::domain::entities::{NewVisit, Visit};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A link row joined with its visit count, for listings.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub link_id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub active: bool,
    pub click_count: i64,
}

/// Repository interface for visit tracking and aggregation inputs.
///
/// Visits are append-only: recorded once by the redirect path, never
/// mutated, removed only via the owning link's cascade delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Records a visit against an existing link.
    async fn record(&self, new_visit: NewVisit) -> Result<Visit, AppError>;

    /// Lists all visits for a link in insertion order.
    async fn list_for_link(&self, link_id: i64) -> Result<Vec<Visit>, AppError>;

    /// Lists the most recent visits for a link, newest first.
    ///
    /// Ordered by `visited_at` descending with the row id as tiebreak, so
    /// same-timestamp visits still come back newest-insert-first.
    async fn recent_for_link(&self, link_id: i64, limit: i64) -> Result<Vec<Visit>, AppError>;

    /// Lists links newest-first with their visit counts.
    async fn link_stats(&self, offset: i64, limit: i64) -> Result<Vec<LinkStats>, AppError>;
}
