//! Wealth Dashboard server entry point.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wealth_dashboard_core::PortfolioAnalytics;
use wealth_dashboard_server::{Server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,wealth_dashboard=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Wealth Dashboard server v{}", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/server.toml".to_string());

    let config = if std::path::Path::new(&config_path).exists() {
        info!("Loading configuration from {}", config_path);
        ServerConfig::from_file(&config_path)?
    } else {
        info!("Using default configuration");
        ServerConfig::default()
    }
    .with_env_overrides();

    let analytics = Arc::new(PortfolioAnalytics::with_sample_data()?);

    Server::new(config, analytics).start().await?;

    Ok(())
}
