//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination URL, recording the visit.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code (active and unexpired)
/// 2. Record the visit with referrer, user agent, and client address
/// 3. Return 307 Temporary Redirect
///
/// The visit write happens within the request, after the same request
/// observed the link as resolvable; an expired or deactivated link records
/// nothing.
///
/// # Errors
///
/// Returns 404 for an unknown code and 410 for a deactivated or expired
/// link (expiry is persisted on first detection).
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let referrer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let destination = state
        .redirect_service
        .resolve_and_track(&code, referrer, user_agent, Some(addr.ip().to_string()))
        .await?;

    Ok(Redirect::temporary(&destination))
}
