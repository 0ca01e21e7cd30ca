//! ShortLink entity binding a short code to a destination URL.

use chrono::{DateTime, Utc};

/// A persisted short link with its lifecycle metadata.
///
/// The short code is immutable after creation and stays unique across all
/// rows, deactivated ones included, so codes are never reused while the
/// record exists.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    /// One-way flag: set false on explicit deactivation or first resolution
    /// after expiry; never set back to true.
    pub active: bool,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
        active: bool,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
            expires_at,
            active,
        }
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() > e)
    }
}

/// Input data for creating a new short link.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub original_url: String,
    pub short_code: String,
    pub expires_at: Option<DateTime<Utc>>,
}
