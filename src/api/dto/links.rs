//! DTOs for link listing and lifecycle endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Paginated link listing with click counts.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub meta: ListMeta,
    pub items: Vec<LinkListItem>,
}

/// Pagination metadata echoed back with the effective values.
#[derive(Debug, Serialize)]
pub struct ListMeta {
    pub skip: i64,
    pub limit: i64,
    pub total: i64,
}

/// One link row in the listing.
#[derive(Debug, Serialize)]
pub struct LinkListItem {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub active: bool,
    pub click_count: i64,
}

/// Confirmation message for deactivation and deletion.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
