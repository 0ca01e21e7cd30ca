//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET    /`            - Service info
//! - `GET    /health`      - Health check
//! - `POST   /shorten`     - Create a short link
//! - `GET    /urls`        - Paginated link listing with click counts
//! - `GET    /stats/{code}`- Per-link statistics
//! - `GET    /qr/{code}`   - PNG QR code for the short URL
//! - `DELETE /url/{code}`  - Soft-deactivate a link
//! - `DELETE /url/{code}/hard` - Hard-delete a link and its visits
//! - `GET    /{code}`      - Short link redirect
//!
//! Static routes win over the `/{code}` catch-all; the reserved-alias list
//! in the validator keeps the two namespaces from colliding.

use crate::api::handlers::{
    deactivate_link_handler, delete_link_handler, health_handler, list_urls_handler, qr_handler,
    redirect_handler, service_info_handler, shorten_handler, stats_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{delete, get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(service_info_handler))
        .route("/health", get(health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_urls_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/qr/{code}", get(qr_handler))
        .route("/url/{code}", delete(deactivate_link_handler))
        .route("/url/{code}/hard", delete(delete_link_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
