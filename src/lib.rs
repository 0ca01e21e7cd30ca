//! # Linklet
//!
//! A URL shortening service with visit analytics, QR codes, and link
//! expiration, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random or custom short codes with collision-safe allocation
//! - Per-visit analytics: referrer, user agent, client address
//! - Lazy link expiration with persisted deactivation
//! - QR code rendering for short URLs
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional configuration (see the config module for the full list)
//! export DATABASE_URL="sqlite://url_shortener.db"
//! export LISTEN="0.0.0.0:8000"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]; see the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RedirectService, ShortenService, StatsService};
    pub use crate::domain::entities::{NewShortLink, NewVisit, ShortLink, Visit};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
