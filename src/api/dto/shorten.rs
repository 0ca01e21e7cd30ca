//! DTOs for the link shortening endpoint.

use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom alias validation.
static CUSTOM_ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Request to shorten a URL.
///
/// Expiration can be given either as an absolute `expires_at` timestamp or
/// as `ttl_days`; the absolute form wins when both are present.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The destination URL to shorten (fully validated in the service).
    #[validate(length(min = 1, message = "destination_url must not be empty"))]
    pub destination_url: String,

    /// Optional custom short code.
    #[validate(length(min = 1, max = 50))]
    #[validate(regex(path = "*CUSTOM_ALIAS_REGEX"))]
    pub custom_alias: Option<String>,

    /// Optional expiration in days from now.
    #[validate(range(min = 1, max = 365))]
    pub ttl_days: Option<i64>,

    /// Optional absolute expiration timestamp (RFC3339). May lie in the
    /// past; such a link answers 410 on its first resolution.
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShortenRequest {
    /// Resolves the effective expiration timestamp.
    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        self.expires_at
            .or_else(|| self.ttl_days.map(|days| Utc::now() + Duration::days(days)))
    }
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub active: bool,
}
