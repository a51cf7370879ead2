//! Error types for the content mapping pass.
use linkfield_convert_repository::RepositoryError;
use thiserror::Error;

/// Represents errors that abort the content mapping pass.
///
/// Problems with individual rows are logged and skipped; only store failures
/// end the run.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
