use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Storefront session service
///
/// Hosts the catalog session and the shared cart behind an HTTP API:
/// - config/: environment configuration (server, CORS, remote catalog)
/// - setup/: dependency injection and server setup
/// - api/: route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Using product catalog at {}", config.catalog.base_url);

    // 4. Wire dependencies, starting the initial catalog load
    let container = DependencyContainer::new(&config.catalog);

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
