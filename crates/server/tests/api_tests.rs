//! Integration tests for the dashboard query endpoints.

use std::io::Write;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use wealth_dashboard_core::errors::CoreError;
use wealth_dashboard_core::models::holding::HoldingRecord;
use wealth_dashboard_core::models::performance::PerformanceView;
use wealth_dashboard_core::providers::sample::{StaticHoldingStore, StaticPerformanceSource};
use wealth_dashboard_core::providers::traits::{HoldingRepository, PerformanceSource};
use wealth_dashboard_core::PortfolioAnalytics;
use wealth_dashboard_server::routes::create_router;
use wealth_dashboard_server::{Server, ServerConfig};

struct OfflineStore;

impl HoldingRepository for OfflineStore {
    fn name(&self) -> &str {
        "OfflineStore"
    }

    fn holdings(&self) -> Result<Vec<HoldingRecord>, CoreError> {
        Err(CoreError::DataSource("store offline".into()))
    }
}

struct OfflinePerformance;

impl PerformanceSource for OfflinePerformance {
    fn name(&self) -> &str {
        "OfflinePerformance"
    }

    fn performance(&self) -> Result<PerformanceView, CoreError> {
        Err(CoreError::DataSource("history unavailable".into()))
    }
}

fn sample_app() -> Router {
    create_router(Arc::new(PortfolioAnalytics::with_sample_data().unwrap()))
}

fn offline_app() -> Router {
    create_router(Arc::new(PortfolioAnalytics::new(
        Arc::new(OfflineStore),
        Arc::new(OfflinePerformance),
    )))
}

fn empty_app() -> Router {
    create_router(Arc::new(PortfolioAnalytics::new(
        Arc::new(StaticHoldingStore::new(vec![]).unwrap()),
        Arc::new(StaticPerformanceSource::sample().unwrap()),
    )))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

// =============================================================================
// HEALTH
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get_json(sample_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

// =============================================================================
// HOLDINGS
// =============================================================================

#[tokio::test]
async fn test_holdings_in_store_order_with_derived_fields() {
    let (status, json) = get_json(sample_app(), "/api/portfolio/holdings").await;

    assert_eq!(status, StatusCode::OK);
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 13);
    assert_eq!(rows[0]["symbol"], "RELIANCE");
    assert_eq!(rows[12]["symbol"], "NYKAA");

    let reliance = &rows[0];
    assert_eq!(reliance["quantity"], 50);
    assert_eq!(reliance["avgPrice"], 2450.0);
    assert_eq!(reliance["currentPrice"], 2830.5);
    assert_eq!(reliance["marketCap"], "Large");
    assert_eq!(reliance["value"], 141_525.0);
    assert_eq!(reliance["gainLoss"], 19_025.0);
    assert_eq!(reliance["gainLossPercent"], 15.53);
}

#[tokio::test]
async fn test_holdings_empty_store_returns_empty_array() {
    let (status, json) = get_json(empty_app(), "/api/portfolio/holdings").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, Value::Array(vec![]));
}

// =============================================================================
// ALLOCATION
// =============================================================================

#[tokio::test]
async fn test_allocation_shape() {
    let (status, json) = get_json(sample_app(), "/api/portfolio/allocation").await;

    assert_eq!(status, StatusCode::OK);
    let by_sector = json["bySector"].as_object().unwrap();
    let by_cap = json["byMarketCap"].as_object().unwrap();

    assert!(by_sector.contains_key("Technology"));
    assert!(by_sector.contains_key("Banking"));
    assert_eq!(by_sector.len(), 8);

    let mut tiers: Vec<&String> = by_cap.keys().collect();
    tiers.sort();
    assert_eq!(tiers, vec!["Large", "Mid", "Small"]);

    let total: f64 = by_sector
        .values()
        .map(|b| b["percentage"].as_f64().unwrap())
        .sum();
    assert!((total - 100.0).abs() < 0.1);
}

#[tokio::test]
async fn test_allocation_empty_store_returns_empty_maps() {
    let (status, json) = get_json(empty_app(), "/api/portfolio/allocation").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["bySector"].as_object().unwrap().is_empty());
    assert!(json["byMarketCap"].as_object().unwrap().is_empty());
}

// =============================================================================
// PERFORMANCE
// =============================================================================

#[tokio::test]
async fn test_performance_shape() {
    let (status, json) = get_json(sample_app(), "/api/portfolio/performance").await;

    assert_eq!(status, StatusCode::OK);
    let timeline = json["timeline"].as_array().unwrap();
    assert_eq!(timeline.len(), 7);
    assert_eq!(timeline[0]["date"], "2024-01-01");
    assert_eq!(timeline[0]["portfolio"], 1_850_000.0);
    assert_eq!(timeline[0]["benchmarkNifty"], 21_700.0);
    assert_eq!(timeline[0]["benchmarkGold"], 63_000.0);

    assert_eq!(json["returns"]["portfolio"]["1month"], 4.2);
    assert_eq!(json["returns"]["benchmarkNifty"]["3months"], 7.5);
    assert_eq!(json["returns"]["benchmarkGold"]["1year"], 15.2);
}

// =============================================================================
// SUMMARY
// =============================================================================

#[tokio::test]
async fn test_summary_shape() {
    let (status, json) = get_json(sample_app(), "/api/portfolio/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["totalValue"].is_number());
    assert!(json["totalInvested"].is_number());
    assert!(json["totalGainLoss"].is_number());
    assert!(json["totalGainLossPercent"].is_number());
    assert_eq!(json["topPerformer"]["symbol"], "SBIN");
    assert_eq!(json["topPerformer"]["gainPercent"], 66.12);
    assert_eq!(json["worstPerformer"]["symbol"], "NYKAA");
    assert_eq!(json["diversificationScore"], 6.2);
    assert_eq!(json["riskLevel"], "Low");
}

#[tokio::test]
async fn test_summary_empty_store_has_no_performers() {
    let (status, json) = get_json(empty_app(), "/api/portfolio/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalValue"], 0.0);
    assert_eq!(json["totalGainLossPercent"], 0.0);
    assert!(json["topPerformer"].is_null());
    assert!(json["worstPerformer"].is_null());
    assert_eq!(json["diversificationScore"], 0.0);
}

// =============================================================================
// FAILURES
// =============================================================================

#[tokio::test]
async fn test_store_failure_returns_500_with_endpoint_message() {
    let cases = [
        ("/api/portfolio/holdings", "Error processing holdings data", "store offline"),
        ("/api/portfolio/allocation", "Error calculating allocation", "store offline"),
        ("/api/portfolio/performance", "Error fetching performance data", "history unavailable"),
        ("/api/portfolio/summary", "Error calculating summary", "store offline"),
    ];

    for (uri, message, detail) in cases {
        let (status, json) = get_json(offline_app(), uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(json["message"], message, "{uri}");
        assert!(json["error"].as_str().unwrap().contains(detail), "{uri}");
    }
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let request = Request::builder()
        .uri("/api/portfolio/unknown")
        .body(Body::empty())
        .unwrap();
    let response = sample_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_server_router_allows_any_origin() {
    let server = Server::new(
        ServerConfig::default(),
        Arc::new(PortfolioAnalytics::with_sample_data().unwrap()),
    );
    let request = Request::builder()
        .uri("/api/portfolio/summary")
        .header("origin", "http://dashboard.example")
        .body(Body::empty())
        .unwrap();

    let response = server.router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}

// =============================================================================
// CONFIG
// =============================================================================

#[test]
fn test_config_defaults() {
    let config = ServerConfig::default();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 5000);
    assert!(config.cors_allow_any);
}

#[test]
fn test_config_from_file_fills_missing_keys() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port = 8080").unwrap();

    let config = ServerConfig::from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.host, "0.0.0.0");
    assert!(config.cors_allow_any);
}

#[test]
fn test_config_from_file_rejects_bad_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port = \"not a number\"").unwrap();

    let err = ServerConfig::from_file(file.path().to_str().unwrap()).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn test_config_overrides() {
    let config = ServerConfig::default()
        .with_overrides(Some("127.0.0.1".into()), Some("3000".into()));
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 3000);
}

#[test]
fn test_config_ignores_blank_and_invalid_overrides() {
    let config = ServerConfig::default().with_overrides(Some("  ".into()), Some("http".into()));
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn test_config_ignores_non_ip_host_override() {
    let config = ServerConfig::default().with_overrides(Some("localhost".into()), None);
    assert_eq!(config.host, "0.0.0.0");

    let config = ServerConfig::default().with_overrides(Some("::1".into()), None);
    assert_eq!(config.host, "::1");
}

#[test]
fn test_config_socket_addr() {
    let config = ServerConfig::default().with_overrides(Some("127.0.0.1".into()), Some("8081".into()));
    assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8081");
}

#[tokio::test]
async fn test_start_rejects_unparsable_host_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "host = \"localhost\"\nport = 0").unwrap();
    let config = ServerConfig::from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.host, "localhost");

    let err = config.socket_addr().unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);

    let server = Server::new(config, Arc::new(PortfolioAnalytics::with_sample_data().unwrap()));
    let err = server.start().await.unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
}
