//! Error types for the linkfield-convert application.
//! Consolidates errors from configuration, the store and both passes.
use linkfield_convert_pipeline::{ContentError, SchemaError};
use linkfield_convert_repository::RepositoryError;

/// Configuration values that are missing or cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Schema pass failed: {0}")]
    Schema(#[from] SchemaError),
    #[error("Content pass failed: {0}")]
    Content(#[from] ContentError),
    #[error("Logging setup failed: {0}")]
    Logging(String),
}
