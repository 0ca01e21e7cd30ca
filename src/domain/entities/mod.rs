//! Core domain entities.
//!
//! Plain data structures without business logic. Creation inputs use the
//! "New" pattern (`NewShortLink`, `NewVisit`) so repository implementations
//! control identifier and timestamp assignment.

pub mod link;
pub mod visit;

pub use link::{NewShortLink, ShortLink};
pub use visit::{NewVisit, Visit};
