use std::env;

use persistence::bootstrap::BootstrapMode;
use persistence::db::{DatabaseConfig, DatabaseEngine, DbPool, create_pool};

/// Initialize the database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: connection string (required)
/// - DATABASE_ENGINE: "postgres" or "mysql" (default: "postgres")
///
/// # Errors
/// Returns error if DATABASE_URL is not set or the connection fails
pub async fn init_database() -> anyhow::Result<DbPool> {
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let engine = env::var("DATABASE_ENGINE")
        .unwrap_or_else(|_| "postgres".to_string())
        .parse::<DatabaseEngine>()
        .expect("DATABASE_ENGINE must be 'postgres' or 'mysql'");

    let pool = create_pool(&DatabaseConfig::new(db_url, engine)).await?;
    Ok(pool)
}

/// Schema bootstrap mode from APP_ENV (default: development, which drops and
/// reseeds the table on every startup).
pub fn bootstrap_mode() -> BootstrapMode {
    env::var("APP_ENV")
        .unwrap_or_else(|_| "development".to_string())
        .parse::<BootstrapMode>()
        .expect("APP_ENV must be 'development' or 'production'")
}
