use thiserror::Error;

/// Represents stored element content that cannot be merged into.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Stored content is not valid JSON: {0}")]
    MalformedContent(#[source] serde_json::Error),
    #[error("Stored content is a JSON {0}, expected an object")]
    UnexpectedContent(&'static str),
    #[error("Failed to encode link value: {0}")]
    EncodeValue(#[source] serde_json::Error),
}
