//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};

use crate::api::dto::stats::{RecentVisit, StatsResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::host::extract_host;

/// Returns aggregated statistics for a short link.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Response
///
/// Link metadata plus `click_count`, referrer and browser breakdowns, and
/// the ten most recent visits (timestamp, referrer, user agent).
///
/// # Errors
///
/// Returns 404 if the short code doesn't exist. Deactivated links still
/// report their accumulated statistics.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<StatsResponse>, AppError> {
    let host = extract_host(&headers)?;

    let analytics = state.stats_service.stats_for(&code).await?;

    let short_url = state.short_url(&host, &analytics.link.short_code);
    let link = analytics.link;

    Ok(Json(StatsResponse {
        id: link.id,
        original_url: link.original_url,
        short_code: link.short_code,
        short_url,
        created_at: link.created_at,
        expires_at: link.expires_at,
        active: link.active,
        click_count: analytics.click_count,
        referrers: analytics.referrers,
        browsers: analytics.browsers,
        recent_visits: analytics
            .recent_visits
            .into_iter()
            .map(|visit| RecentVisit {
                visited_at: visit.visited_at,
                referrer: visit.referrer,
                user_agent: visit.user_agent,
            })
            .collect(),
    }))
}
