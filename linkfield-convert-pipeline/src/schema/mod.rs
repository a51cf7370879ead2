//! The schema pass: rewrites legacy link field definitions to the native link
//! field type.
use crate::errors::SchemaError;
use linkfield_convert_repository::FieldRepository;
use linkfield_convert_shared::settings::{LEGACY_FIELD_TYPES, NATIVE_FIELD_TYPE, NativeLinkSettings};
use std::sync::Arc;
use tracing::info;

/// Outcome of a schema pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchemaReport {
    pub fields_converted: usize,
}

/// `SchemaRewriter` switches every legacy link field to the native link field.
///
/// Each field's type is overwritten and its settings are replaced with
/// [`NativeLinkSettings::default`]. Rewriting is overwrite-based, so running
/// the pass again is harmless.
pub struct SchemaRewriter {
    field_repository: Arc<dyn FieldRepository>,
    settings: NativeLinkSettings,
}

impl SchemaRewriter {
    pub fn new(field_repository: Arc<dyn FieldRepository>) -> Self {
        Self {
            field_repository,
            settings: NativeLinkSettings::default(),
        }
    }

    /// Rewrites all legacy link fields.
    ///
    /// # Returns
    ///
    /// A `SchemaReport`, or a `SchemaError` if the settings cannot be encoded
    /// or the store fails. Fields updated before a failure stay updated.
    pub async fn run(&self) -> Result<SchemaReport, SchemaError> {
        let settings = self.settings.to_json()?;
        let fields = self.field_repository.find_by_types(&LEGACY_FIELD_TYPES).await?;
        let mut report = SchemaReport::default();

        for field in &fields {
            info!(handle = %field.handle, uid = %field.uid, "Preparing to migrate field settings");

            self.field_repository
                .update_type_and_settings(&field.uid, NATIVE_FIELD_TYPE, &settings)
                .await?;
            report.fields_converted += 1;

            info!(handle = %field.handle, "Field settings migrated");
        }

        Ok(report)
    }
}
