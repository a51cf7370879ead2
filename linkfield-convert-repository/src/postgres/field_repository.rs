//! PostgreSQL implementation of the field registry repository.
use crate::postgres::TableNames;
use crate::{FieldRepository, RepositoryError};
use async_trait::async_trait;
use linkfield_convert_shared::types::FieldDefinition;
use sqlx::Row;

/// Reads and rewrites rows of the host's `fields` table.
pub struct PostgresFieldRepository {
    pool: sqlx::PgPool,
    tables: TableNames,
}

impl PostgresFieldRepository {
    /// Creates a new repository over a pool whose schema contains the host tables.
    pub fn new(pool: sqlx::PgPool, tables: TableNames) -> Self {
        Self { pool, tables }
    }
}

#[async_trait]
impl FieldRepository for PostgresFieldRepository {
    async fn find_by_types(
        &self,
        field_types: &[&str],
    ) -> Result<Vec<FieldDefinition>, RepositoryError> {
        let query = format!(
            r#"
            SELECT id, handle, uid::text AS uid, type, settings, context
            FROM {}
            WHERE type = ANY($1)
            ORDER BY id
            "#,
            self.tables.fields()
        );

        let rows = sqlx::query(&query)
            .bind(field_types)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| -> Result<FieldDefinition, RepositoryError> {
                Ok(FieldDefinition {
                    id: i64::from(row.try_get::<i32, _>("id")?),
                    handle: row.try_get("handle")?,
                    uid: row.try_get("uid")?,
                    field_type: row.try_get("type")?,
                    settings: row.try_get("settings")?,
                    context: row.try_get("context")?,
                })
            })
            .collect()
    }

    async fn update_type_and_settings(
        &self,
        uid: &str,
        field_type: &str,
        settings: &str,
    ) -> Result<(), RepositoryError> {
        let query = format!(
            "UPDATE {} SET type = $1, settings = $2 WHERE uid = $3",
            self.tables.fields()
        );

        sqlx::query(&query)
            .bind(field_type)
            .bind(settings)
            .bind(uid)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
