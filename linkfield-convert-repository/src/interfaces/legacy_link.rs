use crate::errors::RepositoryError;
use linkfield_convert_shared::types::LegacyContentRow;

/// Trait for reading the legacy plugin's link content table. Read-only.
#[async_trait::async_trait]
pub trait LegacyLinkRepository: Send + Sync {
    /// Returns all legacy rows stored for the field with numeric id `field_id`.
    async fn find_by_field(&self, field_id: i64) -> Result<Vec<LegacyContentRow>, RepositoryError>;
}
