use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
///
/// Hexagonal layout:
/// - config/: Application configuration (server, CORS, database, auth)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, path-segment parsing, and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Initialize database and prepare the schema. The drop/seed bootstrap
    //    only runs when the deployment is configured as development.
    let pool = database_config::init_database().await?;
    persistence::bootstrap::initialize(&pool, database_config::bootstrap_mode()).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
