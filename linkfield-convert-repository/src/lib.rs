//! # Linkfield Convert Repository
//! This crate provides traits and implementations for reading and writing the
//! host CMS tables the converter touches: the field registry, the legacy link
//! content table, and element content. It includes definitions for errors,
//! interfaces, and concrete implementations for PostgreSQL.
pub mod errors;
pub mod interfaces;
pub mod postgres;

pub use errors::RepositoryError;
pub use interfaces::{ElementRepository, FieldRepository, LegacyLinkRepository};
pub use postgres::{
    PostgresElementRepository, PostgresFieldRepository, PostgresLegacyLinkRepository, TableNames,
};
