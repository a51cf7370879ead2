//! The content pass: moves legacy link values into native element content.
//!
//! For every native link field the mapper loads the legacy rows stored for it,
//! converts each one, and merges the result into the owning element's content
//! for the row's site. Problems with single rows are logged and counted; only
//! store failures stop the pass.
use crate::conversion::convert_link;
use crate::errors::ContentError;
use crate::merge::{layout_uids_for_handle, merge_field_content};
use linkfield_convert_repository::{ElementRepository, FieldRepository, LegacyLinkRepository};
use linkfield_convert_shared::settings::NATIVE_FIELD_TYPE;
use linkfield_convert_shared::types::{FieldDefinition, LegacyContentRow, LinkConversion};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Counters describing what a content pass did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentReport {
    pub fields_visited: usize,
    pub fields_without_content: usize,
    pub fields_out_of_scope: usize,
    pub rows_migrated: usize,
    pub rows_empty: usize,
    pub rows_invalid: usize,
    pub rows_missing_element: usize,
    pub rows_unreadable_content: usize,
}

impl ContentReport {
    /// Rows that were looked at but not written.
    pub fn rows_skipped(&self) -> usize {
        self.rows_empty + self.rows_invalid + self.rows_missing_element + self.rows_unreadable_content
    }
}

/// `ContentMapper` migrates legacy link content into native element content.
///
/// Legacy rows are never deleted. Running the pass again recomputes the same
/// values and overwrites the same keys, leaving the content unchanged.
pub struct ContentMapper {
    field_repository: Arc<dyn FieldRepository>,
    legacy_link_repository: Arc<dyn LegacyLinkRepository>,
    element_repository: Arc<dyn ElementRepository>,
}

impl ContentMapper {
    pub fn new(
        field_repository: Arc<dyn FieldRepository>,
        legacy_link_repository: Arc<dyn LegacyLinkRepository>,
        element_repository: Arc<dyn ElementRepository>,
    ) -> Self {
        Self {
            field_repository,
            legacy_link_repository,
            element_repository,
        }
    }

    /// Migrates the content of every native link field.
    pub async fn run(&self) -> Result<ContentReport, ContentError> {
        let fields = self.field_repository.find_by_types(&[NATIVE_FIELD_TYPE]).await?;
        let mut report = ContentReport::default();

        for field in &fields {
            report.fields_visited += 1;
            info!(handle = %field.handle, uid = %field.uid, "Preparing to migrate field content");

            let rows = self.legacy_link_repository.find_by_field(field.id).await?;
            if rows.is_empty() {
                info!(handle = %field.handle, "No content to migrate");
                report.fields_without_content += 1;
                continue;
            }

            if !field.is_global() {
                info!(
                    handle = %field.handle,
                    context = %field.context,
                    "Skipping field outside the global context"
                );
                report.fields_out_of_scope += 1;
                continue;
            }

            for row in &rows {
                self.migrate_row(field, row, &mut report).await?;
            }

            info!(handle = %field.handle, rows = rows.len(), "Field content migrated");
        }

        Ok(report)
    }

    async fn migrate_row(
        &self,
        field: &FieldDefinition,
        row: &LegacyContentRow,
        report: &mut ContentReport,
    ) -> Result<(), ContentError> {
        let element = match row.site_id {
            Some(site_id) => {
                self.element_repository
                    .find_element(row.element_id, site_id)
                    .await?
            }
            None => None,
        };
        let Some(element) = element else {
            warn!(
                element_id = row.element_id,
                site_id = ?row.site_id,
                "Unable to find element"
            );
            report.rows_missing_element += 1;
            return Ok(());
        };

        let value = match convert_link(row) {
            LinkConversion::Converted(value) => value,
            LinkConversion::Empty => {
                report.rows_empty += 1;
                return Ok(());
            }
            LinkConversion::Invalid(reason) => {
                warn!(element_id = element.id, %reason, "Unable to convert content");
                report.rows_invalid += 1;
                return Ok(());
            }
        };

        let layout_fields = self.element_repository.layout_fields(&element).await?;
        let layout_uids = layout_uids_for_handle(&layout_fields, &field.handle);
        if layout_uids.is_empty() {
            debug!(
                element_id = element.id,
                handle = %field.handle,
                "Field is not part of the element's layout"
            );
        }

        let existing = self
            .element_repository
            .content(element.id, element.site_id)
            .await?;
        let content = match merge_field_content(existing.as_deref(), &layout_uids, &value) {
            Ok(content) => content,
            Err(e) => {
                warn!(element_id = element.id, site_id = element.site_id, error = %e, "Unable to read element content");
                report.rows_unreadable_content += 1;
                return Ok(());
            }
        };

        self.element_repository
            .save_content(element.id, element.site_id, &content)
            .await?;
        report.rows_migrated += 1;
        info!(element_id = element.id, site_id = element.site_id, "Migrated content for element");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use linkfield_convert_repository::RepositoryError;
    use linkfield_convert_shared::types::{Element, LayoutField};
    use serde_json::{Map, Value, json};
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    struct MockFieldRepository {
        fields: Vec<FieldDefinition>,
    }

    #[async_trait]
    impl FieldRepository for MockFieldRepository {
        async fn find_by_types(
            &self,
            field_types: &[&str],
        ) -> Result<Vec<FieldDefinition>, RepositoryError> {
            Ok(self
                .fields
                .iter()
                .filter(|field| field_types.contains(&field.field_type.as_str()))
                .cloned()
                .collect())
        }

        async fn update_type_and_settings(
            &self,
            _uid: &str,
            _field_type: &str,
            _settings: &str,
        ) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    struct MockLegacyLinkRepository {
        rows: Vec<LegacyContentRow>,
    }

    #[async_trait]
    impl LegacyLinkRepository for MockLegacyLinkRepository {
        async fn find_by_field(&self, field_id: i64) -> Result<Vec<LegacyContentRow>, RepositoryError> {
            Ok(self
                .rows
                .iter()
                .filter(|row| row.field_id == field_id)
                .cloned()
                .collect())
        }
    }

    /// In-memory element store keyed by (element id, site id)
    #[derive(Default)]
    struct MockElementRepository {
        elements: HashMap<(i64, i64), Element>,
        layouts: HashMap<i64, Vec<LayoutField>>,
        content: Mutex<HashMap<(i64, i64), String>>,
        saves: Mutex<Vec<(i64, i64)>>,
        fail_saves: bool,
    }

    impl MockElementRepository {
        fn with_element(mut self, id: i64, site_id: i64, content: Option<&str>) -> Self {
            self.elements.insert(
                (id, site_id),
                Element {
                    id,
                    site_id,
                    field_layout_id: Some(LAYOUT_ID),
                },
            );
            if let Some(content) = content {
                self.content
                    .get_mut()
                    .insert((id, site_id), content.to_string());
            }
            self
        }

        fn with_layout(mut self, fields: Vec<LayoutField>) -> Self {
            self.layouts.insert(LAYOUT_ID, fields);
            self
        }

        async fn stored(&self, id: i64, site_id: i64) -> Value {
            let content = self.content.lock().await;
            serde_json::from_str(&content[&(id, site_id)]).unwrap()
        }
    }

    #[async_trait]
    impl ElementRepository for MockElementRepository {
        async fn find_element(
            &self,
            element_id: i64,
            site_id: i64,
        ) -> Result<Option<Element>, RepositoryError> {
            Ok(self.elements.get(&(element_id, site_id)).cloned())
        }

        async fn layout_fields(&self, element: &Element) -> Result<Vec<LayoutField>, RepositoryError> {
            Ok(element
                .field_layout_id
                .and_then(|id| self.layouts.get(&id).cloned())
                .unwrap_or_default())
        }

        async fn content(
            &self,
            element_id: i64,
            site_id: i64,
        ) -> Result<Option<String>, RepositoryError> {
            Ok(self.content.lock().await.get(&(element_id, site_id)).cloned())
        }

        async fn save_content(
            &self,
            element_id: i64,
            site_id: i64,
            content: &Map<String, Value>,
        ) -> Result<(), RepositoryError> {
            if self.fail_saves {
                return Err(RepositoryError::DatabaseError(sqlx::Error::PoolClosed));
            }
            self.saves.lock().await.push((element_id, site_id));
            self.content.lock().await.insert(
                (element_id, site_id),
                Value::Object(content.clone()).to_string(),
            );
            Ok(())
        }
    }

    const LAYOUT_ID: i64 = 10;
    const FIELD_ID: i64 = 3;

    fn link_field(context: &str) -> FieldDefinition {
        FieldDefinition {
            id: FIELD_ID,
            handle: "link".to_string(),
            uid: "field-uid".to_string(),
            field_type: NATIVE_FIELD_TYPE.to_string(),
            settings: None,
            context: context.to_string(),
        }
    }

    fn link_layout() -> Vec<LayoutField> {
        vec![
            LayoutField {
                uid: "uidA".to_string(),
                handle: "body".to_string(),
                original_handle: None,
            },
            LayoutField {
                uid: "uidB".to_string(),
                handle: "link".to_string(),
                original_handle: None,
            },
        ]
    }

    fn legacy_row(element_id: i64, link_type: Option<&str>) -> LegacyContentRow {
        LegacyContentRow {
            field_id: FIELD_ID,
            element_id,
            site_id: Some(1),
            link_type: link_type.map(str::to_string),
            ..Default::default()
        }
    }

    fn mapper(
        field: FieldDefinition,
        rows: Vec<LegacyContentRow>,
        elements: Arc<MockElementRepository>,
    ) -> ContentMapper {
        ContentMapper::new(
            Arc::new(MockFieldRepository { fields: vec![field] }),
            Arc::new(MockLegacyLinkRepository { rows }),
            elements,
        )
    }

    #[tokio::test]
    async fn test_migrates_row_into_existing_content() {
        let elements = Arc::new(
            MockElementRepository::default()
                .with_element(100, 1, Some(r#"{"uidA":{"x":1}}"#))
                .with_layout(link_layout()),
        );
        let row = LegacyContentRow {
            linked_url: Some("+123456".to_string()),
            ..legacy_row(100, Some("tel"))
        };

        let report = mapper(link_field("global"), vec![row], elements.clone())
            .run()
            .await
            .unwrap();

        assert_eq!(report.rows_migrated, 1);
        assert_eq!(report.rows_skipped(), 0);
        assert_eq!(
            elements.stored(100, 1).await,
            json!({
                "uidA": {"x": 1},
                "uidB": {"value": "tel:+123456", "type": "tel", "label": null, "target": null}
            })
        );
    }

    #[tokio::test]
    async fn test_decodes_double_encoded_content() {
        let double = serde_json::to_string(r#"{"uidA":{"x":1}}"#).unwrap();
        let elements = Arc::new(
            MockElementRepository::default()
                .with_element(100, 1, Some(&double))
                .with_layout(link_layout()),
        );
        let row = LegacyContentRow {
            linked_id: Some(42),
            ..legacy_row(100, Some("entry"))
        };

        mapper(link_field("global"), vec![row], elements.clone())
            .run()
            .await
            .unwrap();

        assert_eq!(
            elements.stored(100, 1).await,
            json!({
                "uidA": {"x": 1},
                "uidB": {"value": "{entry:42@1:url}", "type": "entry", "label": null, "target": null}
            })
        );
    }

    #[tokio::test]
    async fn test_skips_rows_that_cannot_be_migrated() {
        let elements = Arc::new(
            MockElementRepository::default()
                .with_element(100, 1, None)
                .with_element(101, 1, None)
                .with_element(102, 1, Some("[1,2]"))
                .with_layout(link_layout()),
        );
        let rows = vec![
            legacy_row(100, None),
            legacy_row(101, Some("user")),
            LegacyContentRow {
                linked_url: Some("https://example.com".to_string()),
                ..legacy_row(102, Some("url"))
            },
            legacy_row(999, Some("url")),
            LegacyContentRow {
                site_id: None,
                ..legacy_row(100, Some("url"))
            },
        ];

        let report = mapper(link_field("global"), rows, elements.clone())
            .run()
            .await
            .unwrap();

        assert_eq!(
            report,
            ContentReport {
                fields_visited: 1,
                rows_empty: 1,
                rows_invalid: 1,
                rows_unreadable_content: 1,
                rows_missing_element: 2,
                ..Default::default()
            }
        );
        assert!(elements.saves.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_field_without_rows_is_a_notice() {
        let elements = Arc::new(MockElementRepository::default());
        let report = mapper(link_field("global"), Vec::new(), elements)
            .run()
            .await
            .unwrap();

        assert_eq!(report.fields_visited, 1);
        assert_eq!(report.fields_without_content, 1);
    }

    #[tokio::test]
    async fn test_non_global_field_is_skipped() {
        let elements = Arc::new(
            MockElementRepository::default()
                .with_element(100, 1, None)
                .with_layout(link_layout()),
        );
        let row = LegacyContentRow {
            linked_url: Some("https://example.com".to_string()),
            ..legacy_row(100, Some("url"))
        };

        let report = mapper(link_field("matrixBlockType:abc"), vec![row], elements.clone())
            .run()
            .await
            .unwrap();

        assert_eq!(report.fields_out_of_scope, 1);
        assert_eq!(report.rows_migrated, 0);
        assert!(elements.saves.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_legacy_fields_are_not_visited() {
        let elements = Arc::new(MockElementRepository::default().with_element(100, 1, None));
        let field = FieldDefinition {
            field_type: "lenz\\linkfield\\fields\\LinkField".to_string(),
            ..link_field("global")
        };

        let report = mapper(field, vec![legacy_row(100, Some("url"))], elements)
            .run()
            .await
            .unwrap();

        assert_eq!(report, ContentReport::default());
    }

    #[tokio::test]
    async fn test_rerun_produces_identical_content() {
        let elements = Arc::new(
            MockElementRepository::default()
                .with_element(100, 1, Some(r#"{"uidA":{"x":1}}"#))
                .with_layout(link_layout()),
        );
        let row = LegacyContentRow {
            linked_url: Some("team@example.com".to_string()),
            payload: Some(r#"{"customText":"Mail us"}"#.to_string()),
            ..legacy_row(100, Some("email"))
        };
        let mapper = mapper(link_field("global"), vec![row], elements.clone());

        mapper.run().await.unwrap();
        let first = elements.stored(100, 1).await;
        mapper.run().await.unwrap();

        assert_eq!(elements.stored(100, 1).await, first);
        assert_eq!(first["uidB"]["label"], "Mail us");
        assert_eq!(elements.saves.lock().await.len(), 2);
    }

    #[tokio::test]
    async fn test_store_failure_aborts_the_pass() {
        let elements = Arc::new(MockElementRepository {
            fail_saves: true,
            ..MockElementRepository::default()
                .with_element(100, 1, None)
                .with_layout(link_layout())
        });
        let row = LegacyContentRow {
            linked_url: Some("https://example.com".to_string()),
            ..legacy_row(100, Some("url"))
        };

        let result = mapper(link_field("global"), vec![row], elements).run().await;
        assert!(matches!(result, Err(ContentError::Repository(_))));
    }
}
