//! Redirect resolution with visit tracking.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::NewVisit;
use crate::domain::repositories::{LinkRepository, VisitRepository};
use crate::error::AppError;

/// Service resolving a short code to its destination while recording the
/// visit, as one unit of work within the request.
///
/// Expiry is detected lazily on resolution: the first request past
/// `expires_at` persists the deactivation and gets 410 Gone. The flag write
/// is an idempotent UPDATE, so two racing requests cannot corrupt anything,
/// and a visit is only recorded when this request saw the link unexpired.
pub struct RedirectService<L: LinkRepository, V: VisitRepository> {
    link_repository: Arc<L>,
    visit_repository: Arc<V>,
}

impl<L: LinkRepository, V: VisitRepository> RedirectService<L, V> {
    /// Creates a new redirect service.
    pub fn new(link_repository: Arc<L>, visit_repository: Arc<V>) -> Self {
        Self {
            link_repository,
            visit_repository,
        }
    }

    /// Resolves a short code and records the visit.
    ///
    /// Returns the destination URL on success. Request metadata is stored
    /// verbatim; all three fields are optional.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] for an unknown code
    /// - [`AppError::Gone`] for a deactivated or expired link; expiry is
    ///   persisted before returning, and no visit is recorded
    pub async fn resolve_and_track(
        &self,
        short_code: &str,
        referrer: Option<String>,
        user_agent: Option<String>,
        client_address: Option<String>,
    ) -> Result<String, AppError> {
        let link = self
            .link_repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "code": short_code }))
            })?;

        if !link.active {
            return Err(AppError::gone(
                "This URL has been deactivated",
                json!({ "code": short_code }),
            ));
        }

        if link.is_expired() {
            self.link_repository.deactivate(short_code).await?;
            info!(code = short_code, "Deactivated expired link");
            return Err(AppError::gone(
                "This URL has expired",
                json!({ "code": short_code }),
            ));
        }

        self.visit_repository
            .record(NewVisit {
                link_id: link.id,
                referrer,
                user_agent,
                client_address,
            })
            .await?;

        debug!(code = short_code, destination = %link.original_url, "Redirecting");
        Ok(link.original_url)
    }
}
