//! Shared application state injected into HTTP handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{RedirectService, ShortenService, StatsService};
use crate::infrastructure::persistence::{SqliteLinkRepository, SqliteVisitRepository};

/// Application state: services wired over the SQLite repositories.
///
/// Constructed once at startup and cloned per request; everything inside is
/// an `Arc` or a pool handle, so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<SqliteLinkRepository>>,
    pub redirect_service: Arc<RedirectService<SqliteLinkRepository, SqliteVisitRepository>>,
    pub stats_service: Arc<StatsService<SqliteLinkRepository, SqliteVisitRepository>>,
    pub pool: SqlitePool,
    /// Overrides the Host-header-derived short URL base when configured.
    pub base_url: Option<String>,
}

impl AppState {
    /// Builds the full service graph over one connection pool.
    pub fn new(pool: SqlitePool, base_url: Option<String>) -> Self {
        let pool_arc = Arc::new(pool.clone());
        let link_repository = Arc::new(SqliteLinkRepository::new(pool_arc.clone()));
        let visit_repository = Arc::new(SqliteVisitRepository::new(pool_arc));

        Self {
            shorten_service: Arc::new(ShortenService::new(link_repository.clone())),
            redirect_service: Arc::new(RedirectService::new(
                link_repository.clone(),
                visit_repository.clone(),
            )),
            stats_service: Arc::new(StatsService::new(link_repository, visit_repository)),
            pool,
            base_url,
        }
    }

    /// Assembles the full short URL for a code.
    ///
    /// Uses the configured `BASE_URL` when present, otherwise the host the
    /// request arrived on.
    pub fn short_url(&self, request_host: &str, short_code: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), short_code),
            None => format!("http://{}/{}", request_host, short_code),
        }
    }
}
