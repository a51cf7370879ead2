use crate::errors::RepositoryError;
use linkfield_convert_shared::types::FieldDefinition;

/// Trait for interacting with the host's field registry.
#[async_trait::async_trait]
pub trait FieldRepository: Send + Sync {
    /// Returns every field whose stored type equals one of `field_types`.
    async fn find_by_types(
        &self,
        field_types: &[&str],
    ) -> Result<Vec<FieldDefinition>, RepositoryError>;

    /// Overwrites the type and settings of the field identified by `uid`.
    async fn update_type_and_settings(
        &self,
        uid: &str,
        field_type: &str,
        settings: &str,
    ) -> Result<(), RepositoryError>;
}
