//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`]
/// - Test mocks generated with `mockall`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link.
    ///
    /// The uniqueness check and the insert are one atomic operation: the
    /// short-code UNIQUE constraint decides, so two concurrent creates with
    /// the same code cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists,
    /// [`AppError::Internal`] on other database errors.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a link by its short code. No side effects.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Sets `active = false` for the link with the given code.
    ///
    /// Idempotent: deactivating an already-inactive link succeeds. Returns
    /// `false` when no link matched the code.
    async fn deactivate(&self, short_code: &str) -> Result<bool, AppError>;

    /// Removes the link and all of its visits atomically.
    ///
    /// Returns `false` when no link matched the code. Both deletes happen in
    /// one transaction: either the link and every owned visit disappear, or
    /// nothing does.
    async fn delete(&self, short_code: &str) -> Result<bool, AppError>;

    /// Counts all links, active or not.
    ///
    /// Listings go through
    /// [`crate::domain::repositories::VisitRepository::link_stats`], which
    /// joins each link with its visit count.
    async fn count(&self) -> Result<i64, AppError>;
}
