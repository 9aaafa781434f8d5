//! # Wealth Dashboard Server
//!
//! Read-only HTTP query surface over the portfolio analytics core.
//!
//! ## Routes
//!
//! - `GET /api/portfolio/holdings`
//! - `GET /api/portfolio/allocation`
//! - `GET /api/portfolio/performance`
//! - `GET /api/portfolio/summary`
//! - `GET /health`
//!
//! ## Usage
//!
//! ```ignore
//! use wealth_dashboard_server::{Server, ServerConfig};
//!
//! let analytics = Arc::new(PortfolioAnalytics::with_sample_data()?);
//! Server::new(ServerConfig::default(), analytics).start().await?;
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use wealth_dashboard_core::PortfolioAnalytics;

pub use config::ServerConfig;

/// The dashboard query server.
pub struct Server {
    config: ServerConfig,
    analytics: Arc<PortfolioAnalytics>,
}

impl Server {
    pub fn new(config: ServerConfig, analytics: Arc<PortfolioAnalytics>) -> Self {
        Self { config, analytics }
    }

    /// Build the router with request tracing and, if enabled, permissive CORS.
    pub fn router(&self) -> Router {
        let router = routes::create_router(self.analytics.clone()).layer(TraceLayer::new_for_http());

        if self.config.cors_allow_any {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router.layer(cors)
        } else {
            router
        }
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr()?;

        info!(%addr, analytics = ?self.analytics, "starting wealth dashboard server");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
