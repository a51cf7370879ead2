use crate::errors::ConfigError;

/// Default size of the connection pool; the passes run sequentially.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Runtime settings read from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Connection string of the host's PostgreSQL database.
    pub database_url: String,
    /// Prefix the host puts in front of every table name.
    pub table_prefix: String,
    pub max_connections: u32,
}

impl Config {
    /// Reads `DATABASE_URL`, `DB_TABLE_PREFIX` and `DB_MAX_CONNECTIONS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let table_prefix = lookup("DB_TABLE_PREFIX").unwrap_or_default();

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    name: "DB_MAX_CONNECTIONS",
                    value,
                })?,
        };

        Ok(Self {
            database_url,
            table_prefix,
            max_connections,
        })
    }
}
