//! PostgreSQL implementation of the legacy link content repository.
use crate::postgres::TableNames;
use crate::{LegacyLinkRepository, RepositoryError};
use async_trait::async_trait;
use linkfield_convert_shared::types::LegacyContentRow;
use sqlx::Row;

/// Reads the legacy plugin's `lenz_linkfield` table.
pub struct PostgresLegacyLinkRepository {
    pool: sqlx::PgPool,
    tables: TableNames,
}

impl PostgresLegacyLinkRepository {
    pub fn new(pool: sqlx::PgPool, tables: TableNames) -> Self {
        Self { pool, tables }
    }
}

#[async_trait]
impl LegacyLinkRepository for PostgresLegacyLinkRepository {
    async fn find_by_field(&self, field_id: i64) -> Result<Vec<LegacyContentRow>, RepositoryError> {
        let query = format!(
            r#"
            SELECT "fieldId", "elementId", "siteId", type, "linkedId", "linkedUrl", payload
            FROM {}
            WHERE "fieldId" = $1
            ORDER BY id
            "#,
            self.tables.legacy_links()
        );

        let rows = sqlx::query(&query)
            .bind(field_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| -> Result<LegacyContentRow, RepositoryError> {
                Ok(LegacyContentRow {
                    field_id: i64::from(row.try_get::<i32, _>("fieldId")?),
                    element_id: i64::from(row.try_get::<i32, _>("elementId")?),
                    site_id: row.try_get::<Option<i32>, _>("siteId")?.map(i64::from),
                    link_type: row.try_get("type")?,
                    linked_id: row.try_get::<Option<i32>, _>("linkedId")?.map(i64::from),
                    linked_url: row.try_get("linkedUrl")?,
                    payload: row.try_get("payload")?,
                })
            })
            .collect()
    }
}
