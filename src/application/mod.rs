//! Application layer services implementing business logic.
//!
//! Services consume the domain repository traits and expose the operations
//! the HTTP handlers call:
//!
//! - [`services::shorten_service::ShortenService`] - code allocation and link creation
//! - [`services::redirect_service::RedirectService`] - resolution with visit tracking
//! - [`services::stats_service::StatsService`] - analytics aggregation and listings

pub mod services;
