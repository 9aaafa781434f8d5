//! Request handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use wealth_dashboard_core::models::allocation::AllocationView;
use wealth_dashboard_core::models::holding::EnrichedHolding;
use wealth_dashboard_core::models::performance::PerformanceView;
use wealth_dashboard_core::models::summary::SummaryView;
use wealth_dashboard_core::PortfolioAnalytics;

use crate::error::{ApiError, ApiResult};

/// Shared handler state.
pub type AppState = Arc<PortfolioAnalytics>;

pub const HOLDINGS_ERROR: &str = "Error processing holdings data";
pub const ALLOCATION_ERROR: &str = "Error calculating allocation";
pub const PERFORMANCE_ERROR: &str = "Error fetching performance data";
pub const SUMMARY_ERROR: &str = "Error calculating summary";

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/portfolio/holdings`
pub async fn get_holdings(State(state): State<AppState>) -> ApiResult<Json<Vec<EnrichedHolding>>> {
    let holdings = state
        .holdings()
        .map_err(ApiError::with_message(HOLDINGS_ERROR))?;
    Ok(Json(holdings))
}

/// `GET /api/portfolio/allocation`
pub async fn get_allocation(State(state): State<AppState>) -> ApiResult<Json<AllocationView>> {
    let allocation = state
        .allocation()
        .map_err(ApiError::with_message(ALLOCATION_ERROR))?;
    Ok(Json(allocation))
}

/// `GET /api/portfolio/performance`
pub async fn get_performance(State(state): State<AppState>) -> ApiResult<Json<PerformanceView>> {
    let performance = state
        .performance()
        .map_err(ApiError::with_message(PERFORMANCE_ERROR))?;
    Ok(Json(performance))
}

/// `GET /api/portfolio/summary`
pub async fn get_summary(State(state): State<AppState>) -> ApiResult<Json<SummaryView>> {
    let summary = state
        .summary()
        .map_err(ApiError::with_message(SUMMARY_ERROR))?;
    Ok(Json(summary))
}
