use std::time::Duration;

use sqlx::{MySqlPool, PgPool, mysql::MySqlPoolOptions, postgres::PgPoolOptions};
use strum_macros::EnumString;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.bootstrap_error")]
    BootstrapError,
}

/// Storage engine selected by deployment configuration. The schema is
/// engine-agnostic; both backends are interchangeable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DatabaseEngine {
    Postgres,
    MySql,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub engine: DatabaseEngine,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default pool settings
    pub fn new(connection_string: String, engine: DatabaseEngine) -> Self {
        Self {
            connection_string,
            engine,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// A connection pool for whichever engine the deployment selected.
#[derive(Clone)]
pub enum DbPool {
    Postgres(PgPool),
    MySql(MySqlPool),
}

/// Creates a connection pool for the configured engine
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, DatabaseError> {
    match config.engine {
        DatabaseEngine::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .acquire_timeout(config.acquire_timeout)
                .connect(&config.connection_string)
                .await
                .map_err(|_| DatabaseError::ConnectionError)?;
            Ok(DbPool::Postgres(pool))
        }
        DatabaseEngine::MySql => {
            let pool = MySqlPoolOptions::new()
                .max_connections(config.max_connections)
                .acquire_timeout(config.acquire_timeout)
                .connect(&config.connection_string)
                .await
                .map_err(|_| DatabaseError::ConnectionError)?;
            Ok(DbPool::MySql(pool))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_engine_names_case_insensitively() {
        assert_eq!(
            "postgres".parse::<DatabaseEngine>().unwrap(),
            DatabaseEngine::Postgres
        );
        assert_eq!(
            "MySQL".parse::<DatabaseEngine>().unwrap(),
            DatabaseEngine::MySql
        );
        assert!("sqlite".parse::<DatabaseEngine>().is_err());
    }
}
