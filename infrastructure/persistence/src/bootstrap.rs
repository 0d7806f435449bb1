use sqlx::{MySqlPool, PgPool};
use strum_macros::EnumString;

use crate::db::{DatabaseError, DbPool};

/// How the schema is prepared at startup. Development drops and reseeds the
/// table on every run; production only ensures it exists and never touches
/// data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BootstrapMode {
    Development,
    Production,
}

const SEED_BUYER: &str = "test-id-plz-ignore";

/// Prepares the `Baskets` table. This is an explicit bootstrap step invoked
/// from the binary, never a side effect of opening the pool.
pub async fn initialize(pool: &DbPool, mode: BootstrapMode) -> Result<(), DatabaseError> {
    match pool {
        DbPool::Postgres(pool) => initialize_postgres(pool, mode).await,
        DbPool::MySql(pool) => initialize_mysql(pool, mode).await,
    }?;
    tracing::info!("database bootstrap complete ({mode:?})");
    Ok(())
}

async fn initialize_postgres(pool: &PgPool, mode: BootstrapMode) -> Result<(), DatabaseError> {
    if mode == BootstrapMode::Development {
        sqlx::query(r#"DROP TABLE IF EXISTS "Baskets""#)
            .execute(pool)
            .await
            .map_err(|_| DatabaseError::BootstrapError)?;
    }

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS "Baskets" (
            id SERIAL PRIMARY KEY,
            "buyerId" TEXT NOT NULL,
            "productId" INTEGER NOT NULL,
            name TEXT NOT NULL,
            cost NUMERIC(12, 2) NOT NULL,
            quantity INTEGER NOT NULL
        )"#,
    )
    .execute(pool)
    .await
    .map_err(|_| DatabaseError::BootstrapError)?;

    if mode == BootstrapMode::Development {
        sqlx::query(
            r#"INSERT INTO "Baskets" ("buyerId", "productId", name, cost, quantity) VALUES
                ($1, 1, 'Premium Jelly Beans', 0.80, 5),
                ($1, 2, 'Netlogo Supercomputer', 2005.99, 1)"#,
        )
        .bind(SEED_BUYER)
        .execute(pool)
        .await
        .map_err(|_| DatabaseError::BootstrapError)?;
    }

    Ok(())
}

async fn initialize_mysql(pool: &MySqlPool, mode: BootstrapMode) -> Result<(), DatabaseError> {
    if mode == BootstrapMode::Development {
        sqlx::query("DROP TABLE IF EXISTS Baskets")
            .execute(pool)
            .await
            .map_err(|_| DatabaseError::BootstrapError)?;
    }

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS Baskets (
            id INT AUTO_INCREMENT PRIMARY KEY,
            buyerId VARCHAR(255) NOT NULL,
            productId INT NOT NULL,
            name VARCHAR(255) NOT NULL,
            cost DECIMAL(12, 2) NOT NULL,
            quantity INT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .map_err(|_| DatabaseError::BootstrapError)?;

    if mode == BootstrapMode::Development {
        sqlx::query(
            "INSERT INTO Baskets (buyerId, productId, name, cost, quantity) VALUES
                (?, 1, 'Premium Jelly Beans', 0.80, 5),
                (?, 2, 'Netlogo Supercomputer', 2005.99, 1)",
        )
        .bind(SEED_BUYER)
        .bind(SEED_BUYER)
        .execute(pool)
        .await
        .map_err(|_| DatabaseError::BootstrapError)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_bootstrap_mode() {
        assert_eq!(
            "development".parse::<BootstrapMode>().unwrap(),
            BootstrapMode::Development
        );
        assert_eq!(
            "Production".parse::<BootstrapMode>().unwrap(),
            BootstrapMode::Production
        );
        assert!("staging".parse::<BootstrapMode>().is_err());
    }
}
