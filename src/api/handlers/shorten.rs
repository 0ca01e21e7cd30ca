//! Handler for the link shortening endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::host::extract_host;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "destination_url": "https://example.com/some/long/path",
///   "custom_alias": "launch",          // optional
///   "ttl_days": 30,                     // optional, 1-365
///   "expires_at": "2026-12-31T00:00:00Z"  // optional, wins over ttl_days
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the stored link and its assembled `short_url`. The
/// short URL uses the configured base or the request's Host header.
///
/// # Errors
///
/// Returns 400 for an invalid destination, invalid or reserved alias, or a
/// taken alias; 503 when code generation is exhausted.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let host = extract_host(&headers)?;
    let expires_at = payload.expiry();

    let link = state
        .shorten_service
        .shorten(payload.destination_url, payload.custom_alias, expires_at)
        .await?;

    let short_url = state.short_url(&host, &link.short_code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            id: link.id,
            original_url: link.original_url,
            short_code: link.short_code,
            short_url,
            created_at: link.created_at,
            expires_at: link.expires_at,
            active: link.active,
        }),
    ))
}
