//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx with
//! runtime-bound queries. [`schema::init_schema`] brings a fresh database
//! file up to the expected shape at startup.

pub mod schema;
pub mod sqlite_link_repository;
pub mod sqlite_visit_repository;

pub use schema::init_schema;
pub use sqlite_link_repository::SqliteLinkRepository;
pub use sqlite_visit_repository::SqliteVisitRepository;
