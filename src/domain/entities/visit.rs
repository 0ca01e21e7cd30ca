//! Visit entity recording one successful redirect.

use chrono::{DateTime, Utc};

/// A visit recorded when a short link resolves successfully.
///
/// Request metadata is captured verbatim and never validated or sanitized;
/// the fields are opaque to the core. Visits are immutable once written and
/// are only removed when their owning link is hard-deleted.
#[derive(Debug, Clone)]
pub struct Visit {
    pub id: i64,
    pub link_id: i64,
    pub visited_at: DateTime<Utc>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub client_address: Option<String>,
}

impl Visit {
    /// Creates a new Visit instance.
    pub fn new(
        id: i64,
        link_id: i64,
        visited_at: DateTime<Utc>,
        referrer: Option<String>,
        user_agent: Option<String>,
        client_address: Option<String>,
    ) -> Self {
        Self {
            id,
            link_id,
            visited_at,
            referrer,
            user_agent,
            client_address,
        }
    }
}

/// Input data for recording a new visit.
#[derive(Debug, Clone)]
pub struct NewVisit {
    pub link_id: i64,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub client_address: Option<String>,
}
