//! Error types for the converter repositories.
//! Consolidates and re-exports error types related to store operations.
mod repository;

pub use repository::RepositoryError;
