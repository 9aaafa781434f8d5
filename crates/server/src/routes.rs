//! Route definitions.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use wealth_dashboard_core::PortfolioAnalytics;

use crate::handlers;

/// Create the API router.
///
/// # Arguments
/// * `analytics` - The analytics backend answering every query
pub fn create_router(analytics: Arc<PortfolioAnalytics>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health))
        // Portfolio queries
        .route("/api/portfolio/holdings", get(handlers::get_holdings))
        .route("/api/portfolio/allocation", get(handlers::get_allocation))
        .route("/api/portfolio/performance", get(handlers::get_performance))
        .route("/api/portfolio/summary", get(handlers::get_summary))
        .with_state(analytics)
}
