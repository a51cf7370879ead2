//! Error types for the host table repositories.
use thiserror::Error;

/// Represents errors that can occur while reading or writing host tables.
///
/// Database failures are fatal for a run; the remaining variants describe data
/// in the store that cannot be interpreted.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Invalid table prefix: {0:?}")]
    InvalidTablePrefix(String),

    #[error("Invalid field layout config for layout #{layout_id}: {source}")]
    InvalidLayoutConfig {
        layout_id: i64,
        #[source]
        source: serde_json::Error,
    },
}
