//! Error types for the schema rewriting pass.
use linkfield_convert_repository::RepositoryError;
use thiserror::Error;

/// Represents errors that abort the schema rewriting pass.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Field repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Failed to encode native field settings: {0}")]
    Settings(#[from] serde_json::Error),
}
