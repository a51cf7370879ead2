//! PostgreSQL implementations of the converter repositories.
//!
//! Table names are built at runtime from the configured prefix, so queries use
//! `sqlx::query` with bound parameters instead of the compile-time checked
//! macros.
mod element_repository;
mod field_repository;
mod legacy_link_repository;
mod tables;

pub use element_repository::PostgresElementRepository;
pub use field_repository::PostgresFieldRepository;
pub use legacy_link_repository::PostgresLegacyLinkRepository;
pub use tables::TableNames;
