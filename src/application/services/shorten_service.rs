//! Short link creation service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{GENERATED_CODE_LENGTH, generate_code};
use crate::utils::url_validator::{validate_alias, validate_destination};

/// Upper bound on generated-code collision retries.
///
/// At 62^6 combinations a collision retry is already rare; ten misses in a
/// row means the code space is effectively saturated.
const MAX_GENERATE_ATTEMPTS: usize = 10;

/// Service for allocating short codes and managing link lifecycle.
///
/// Collision handling leans on the repository: `create` is an atomic
/// check-and-insert, so this service never probes for a free code first.
pub struct ShortenService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> ShortenService<L> {
    /// Creates a new shortening service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link for a destination URL.
    ///
    /// With a custom alias the alias is validated and claimed in one insert;
    /// a repository conflict surfaces as an alias-taken error. Without one,
    /// random codes are generated and inserted until one sticks, bounded by
    /// [`MAX_GENERATE_ATTEMPTS`].
    ///
    /// The full short URL is assembled by the caller from the request host;
    /// this service only deals in codes.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for a rejected destination or alias
    /// - [`AppError::Conflict`] when the custom alias is already taken
    /// - [`AppError::Exhausted`] when the retry bound is hit
    pub async fn shorten(
        &self,
        destination: String,
        custom_alias: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<ShortLink, AppError> {
        if let Err(e) = validate_destination(&destination) {
            return Err(AppError::bad_request(
                "Invalid destination URL",
                json!({ "url": destination, "reason": e.to_string() }),
            ));
        }

        if let Some(alias) = custom_alias {
            if let Err(e) = validate_alias(&alias) {
                return Err(AppError::bad_request(
                    "Invalid custom alias",
                    json!({ "alias": alias, "reason": e.to_string() }),
                ));
            }

            return match self
                .link_repository
                .create(NewShortLink {
                    original_url: destination,
                    short_code: alias.clone(),
                    expires_at,
                })
                .await
            {
                Err(AppError::Conflict { .. }) => Err(AppError::conflict(
                    "Custom alias already exists",
                    json!({ "alias": alias }),
                )),
                other => other,
            };
        }

        for _ in 0..MAX_GENERATE_ATTEMPTS {
            let code = generate_code(GENERATED_CODE_LENGTH);

            match self
                .link_repository
                .create(NewShortLink {
                    original_url: destination.clone(),
                    short_code: code,
                    expires_at,
                })
                .await
            {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        tracing::error!(
            attempts = MAX_GENERATE_ATTEMPTS,
            "Exhausted short code generation attempts"
        );
        Err(AppError::exhausted(
            "Failed to allocate a unique short code",
            json!({ "attempts": MAX_GENERATE_ATTEMPTS }),
        ))
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link(&self, short_code: &str) -> Result<ShortLink, AppError> {
        self.link_repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "code": short_code }))
            })
    }

    /// Deactivates a link. The transition is one-way and repeat calls are
    /// no-ops that still succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn deactivate(&self, short_code: &str) -> Result<(), AppError> {
        let found = self.link_repository.deactivate(short_code).await?;

        if !found {
            return Err(AppError::not_found(
                "Short URL not found",
                json!({ "code": short_code }),
            ));
        }

        tracing::info!(code = short_code, "Deactivated link");
        Ok(())
    }

    /// Hard-deletes a link together with all of its visits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn delete(&self, short_code: &str) -> Result<(), AppError> {
        let found = self.link_repository.delete(short_code).await?;

        if !found {
            return Err(AppError::not_found(
                "Short URL not found",
                json!({ "code": short_code }),
            ));
        }

        tracing::info!(code = short_code, "Deleted link and its visits");
        Ok(())
    }
}
