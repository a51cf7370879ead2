//! PostgreSQL implementation of the element repository.
//!
//! ## Database Tables
//!
//! - `elements`: element rows with their field layout id and soft-delete marker
//! - `elements_sites`: per-site element rows holding the JSON `content` column
//! - `fieldlayouts`: layouts whose JSON `config` lists tabs and layout elements
//! - `fields`: consulted for the original handle of each placed field
use crate::postgres::TableNames;
use crate::{ElementRepository, RepositoryError};
use async_trait::async_trait;
use linkfield_convert_shared::types::{Element, LayoutField};
use serde::Deserialize;
use serde_json::{Map, Value};
use sqlx::Row;
use std::collections::HashMap;

/// Layout element type the host uses for custom field placements.
const CUSTOM_FIELD_ELEMENT: &str = "craft\\fieldlayoutelements\\CustomField";

#[derive(Debug, Default, Deserialize)]
struct LayoutConfig {
    #[serde(default)]
    tabs: Vec<LayoutTab>,
}

#[derive(Debug, Deserialize)]
struct LayoutTab {
    #[serde(default)]
    elements: Vec<LayoutElement>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutElement {
    #[serde(rename = "type", default)]
    element_type: Option<String>,
    #[serde(default)]
    uid: Option<String>,
    #[serde(default)]
    field_uid: Option<String>,
    #[serde(default)]
    handle: Option<String>,
}

/// PostgreSQL-backed element repository.
pub struct PostgresElementRepository {
    pool: sqlx::PgPool,
    tables: TableNames,
}

impl PostgresElementRepository {
    pub fn new(pool: sqlx::PgPool, tables: TableNames) -> Self {
        Self { pool, tables }
    }

    async fn layout_config(&self, layout_id: i64) -> Result<Option<LayoutConfig>, RepositoryError> {
        let query = format!(
            r#"SELECT config FROM {} WHERE id = $1 AND "dateDeleted" IS NULL"#,
            self.tables.field_layouts()
        );

        let config: Option<Option<Value>> = sqlx::query_scalar(&query)
            .bind(layout_id)
            .fetch_optional(&self.pool)
            .await?;

        match config.flatten() {
            None => Ok(None),
            Some(Value::Null) => Ok(Some(LayoutConfig::default())),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|source| RepositoryError::InvalidLayoutConfig { layout_id, source }),
        }
    }

    async fn field_handles(&self, field_uids: &[String]) -> Result<HashMap<String, String>, RepositoryError> {
        if field_uids.is_empty() {
            return Ok(HashMap::new());
        }

        let query = format!(
            "SELECT uid::text AS uid, handle FROM {} WHERE uid::text = ANY($1)",
            self.tables.fields()
        );

        let rows = sqlx::query(&query)
            .bind(field_uids)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| -> Result<(String, String), RepositoryError> {
                Ok((row.try_get("uid")?, row.try_get("handle")?))
            })
            .collect()
    }
}

#[async_trait]
impl ElementRepository for PostgresElementRepository {
    async fn find_element(
        &self,
        element_id: i64,
        site_id: i64,
    ) -> Result<Option<Element>, RepositoryError> {
        let query = format!(
            r#"
            SELECT e.id, es."siteId", e."fieldLayoutId"
            FROM {} e
            JOIN {} es ON es."elementId" = e.id
            WHERE e.id = $1 AND es."siteId" = $2 AND e."dateDeleted" IS NULL
            "#,
            self.tables.elements(),
            self.tables.elements_sites()
        );

        let row = sqlx::query(&query)
            .bind(element_id)
            .bind(site_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| -> Result<Element, RepositoryError> {
            Ok(Element {
                id: i64::from(row.try_get::<i32, _>("id")?),
                site_id: i64::from(row.try_get::<i32, _>("siteId")?),
                field_layout_id: row
                    .try_get::<Option<i32>, _>("fieldLayoutId")?
                    .map(i64::from),
            })
        })
        .transpose()
    }

    async fn layout_fields(&self, element: &Element) -> Result<Vec<LayoutField>, RepositoryError> {
        let Some(layout_id) = element.field_layout_id else {
            return Ok(Vec::new());
        };
        let Some(config) = self.layout_config(layout_id).await? else {
            tracing::debug!(layout_id, element_id = element.id, "Field layout not found");
            return Ok(Vec::new());
        };

        let placements: Vec<LayoutElement> = config
            .tabs
            .into_iter()
            .flat_map(|tab| tab.elements)
            .filter(|placement| placement.element_type.as_deref() == Some(CUSTOM_FIELD_ELEMENT))
            .collect();

        let field_uids: Vec<String> = placements
            .iter()
            .filter_map(|placement| placement.field_uid.clone())
            .collect();
        let handles = self.field_handles(&field_uids).await?;

        Ok(placements
            .into_iter()
            .filter_map(|placement| {
                let uid = placement.uid?;
                let field_handle = handles.get(placement.field_uid.as_deref()?)?;
                let field = match placement.handle.filter(|handle| !handle.is_empty()) {
                    Some(handle) => LayoutField {
                        uid,
                        handle,
                        original_handle: Some(field_handle.clone()),
                    },
                    None => LayoutField {
                        uid,
                        handle: field_handle.clone(),
                        original_handle: None,
                    },
                };
                Some(field)
            })
            .collect())
    }

    async fn content(
        &self,
        element_id: i64,
        site_id: i64,
    ) -> Result<Option<String>, RepositoryError> {
        let query = format!(
            r#"SELECT content::text FROM {} WHERE "elementId" = $1 AND "siteId" = $2"#,
            self.tables.elements_sites()
        );

        let content: Option<Option<String>> = sqlx::query_scalar(&query)
            .bind(element_id)
            .bind(site_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(content.flatten())
    }

    async fn save_content(
        &self,
        element_id: i64,
        site_id: i64,
        content: &Map<String, Value>,
    ) -> Result<(), RepositoryError> {
        let query = format!(
            r#"UPDATE {} SET content = $1 WHERE "elementId" = $2 AND "siteId" = $3"#,
            self.tables.elements_sites()
        );

        sqlx::query(&query)
            .bind(sqlx::types::Json(content))
            .bind(element_id)
            .bind(site_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
