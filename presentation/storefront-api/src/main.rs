use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Storefront shell entry point
///
/// Loads configuration, restores the persisted cart, wires the use cases and
/// serves the HTTP API the browser UI renders from.
///
/// - config/: environment-driven settings (server, CORS, storage, pricing, geocoding, payment)
/// - setup/: dependency wiring and the poem server
/// - api/: route handlers, DTOs and error mapping per area
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

    // 4. Wire dependencies, restoring the cart from the data directory
    let container = DependencyContainer::new(&config)?;

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
