//! DTOs for the per-link statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Aggregated statistics for one short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub active: bool,
    pub click_count: i64,
    /// Referrer → visit count; direct visits under "Direct".
    pub referrers: HashMap<String, i64>,
    /// Coarse browser family → visit count.
    pub browsers: HashMap<String, i64>,
    pub recent_visits: Vec<RecentVisit>,
}

/// One entry of the recent-visits window.
#[derive(Debug, Serialize)]
pub struct RecentVisit {
    pub visited_at: DateTime<Utc>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}
