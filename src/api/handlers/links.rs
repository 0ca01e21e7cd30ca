//! Handlers for link listing and lifecycle endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
};
use serde_json::json;

use crate::api::dto::links::{LinkListItem, LinkListResponse, ListMeta, MessageResponse};
use crate::api::dto::pagination::ListQueryParams;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::host::extract_host;

/// Lists short links with their click counts.
///
/// # Endpoint
///
/// `GET /urls?skip=&limit=`
///
/// # Query Parameters
///
/// - `skip` (optional): rows to skip, default 0
/// - `limit` (optional): page size, default 50, max 500
///
/// Links are returned newest-first; the response echoes the effective
/// pagination values plus the total number of links.
pub async fn list_urls_handler(
    State(state): State<AppState>,
    Query(params): Query<ListQueryParams>,
    headers: HeaderMap,
) -> Result<Json<LinkListResponse>, AppError> {
    let (skip, limit) = params
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let host = extract_host(&headers)?;

    let (items, total) = state.stats_service.list_links(skip, limit).await?;

    let items = items
        .into_iter()
        .map(|stats| {
            let short_url = state.short_url(&host, &stats.short_code);
            LinkListItem {
                id: stats.link_id,
                original_url: stats.original_url,
                short_code: stats.short_code,
                short_url,
                created_at: stats.created_at,
                expires_at: stats.expires_at,
                active: stats.active,
                click_count: stats.click_count,
            }
        })
        .collect();

    Ok(Json(LinkListResponse {
        meta: ListMeta { skip, limit, total },
        items,
    }))
}

/// Soft-deactivates a short link.
///
/// # Endpoint
///
/// `DELETE /url/{code}`
///
/// # Behavior
///
/// The record stays in the database with `active = false`; subsequent
/// redirects answer 410 Gone while statistics remain queryable. The
/// transition is one-way.
///
/// # Errors
///
/// Returns 404 if the short code doesn't exist.
pub async fn deactivate_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.shorten_service.deactivate(&code).await?;

    Ok(Json(MessageResponse {
        message: format!("URL {} has been deactivated", code),
    }))
}

/// Hard-deletes a short link and all of its visits.
///
/// # Endpoint
///
/// `DELETE /url/{code}/hard`
///
/// # Behavior
///
/// Removes the link row and cascades to every visit in one transaction.
/// Afterwards the code resolves to 404 and is free for re-registration.
///
/// # Errors
///
/// Returns 404 if the short code doesn't exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.shorten_service.delete(&code).await?;

    Ok(Json(MessageResponse {
        message: format!("URL {} and its visit history have been deleted", code),
    }))
}
