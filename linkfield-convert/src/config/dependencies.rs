use crate::config::Config;
use crate::errors::ConvertError;
use linkfield_convert_pipeline::{ContentMapper, SchemaRewriter};
use linkfield_convert_repository::{
    PostgresElementRepository, PostgresFieldRepository, PostgresLegacyLinkRepository, TableNames,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

/// `Dependencies` holds the two passes, wired to the PostgreSQL repositories.
pub struct Dependencies {
    pub schema_rewriter: SchemaRewriter,
    pub content_mapper: ContentMapper,
}

impl Dependencies {
    /// Creates a new `Dependencies` instance.
    ///
    /// Validates the table prefix, opens the connection pool and builds one
    /// repository per host table group.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on successful initialization or a
    /// `ConvertError` if the prefix is invalid or the database is unreachable.
    pub async fn new(config: &Config) -> Result<Self, ConvertError> {
        let tables = TableNames::new(config.table_prefix.clone())?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;

        let field_repository = Arc::new(PostgresFieldRepository::new(pool.clone(), tables.clone()));
        let legacy_link_repository =
            Arc::new(PostgresLegacyLinkRepository::new(pool.clone(), tables.clone()));
        let element_repository = Arc::new(PostgresElementRepository::new(pool, tables));

        Ok(Dependencies {
            schema_rewriter: SchemaRewriter::new(field_repository.clone()),
            content_mapper: ContentMapper::new(
                field_repository,
                legacy_link_repository,
                element_repository,
            ),
        })
    }
}
