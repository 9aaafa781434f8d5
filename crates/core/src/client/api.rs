use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::allocation::AllocationView;
use crate::models::holding::HoldingsItem;
use crate::models::performance::PerformanceView;
use crate::models::settings::ClientSettings;
use crate::models::summary::SummaryView;

pub const HOLDINGS_PATH: &str = "/api/portfolio/holdings";
pub const ALLOCATION_PATH: &str = "/api/portfolio/allocation";
pub const PERFORMANCE_PATH: &str = "/api/portfolio/performance";
pub const SUMMARY_PATH: &str = "/api/portfolio/summary";

/// The four read-only dashboard queries, as seen by the client.
///
/// [`HttpPortfolioApi`] talks to the real backend; tests substitute their
/// own implementation.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PortfolioApi: Send + Sync {
    /// Holdings in store order. Derived fields may be missing.
    async fn fetch_holdings(&self) -> Result<Vec<HoldingsItem>, CoreError>;

    async fn fetch_allocation(&self) -> Result<AllocationView, CoreError>;

    async fn fetch_performance(&self) -> Result<PerformanceView, CoreError>;

    async fn fetch_summary(&self) -> Result<SummaryView, CoreError>;
}

/// HTTP client for the dashboard API.
pub struct HttpPortfolioApi {
    client: Client,
    base_url: String,
}

impl HttpPortfolioApi {
    /// Build a client for the configured origin, falling back to
    /// `same_origin` when no base URL is set.
    pub fn new(settings: &ClientSettings, same_origin: &str) -> Result<Self, CoreError> {
        let base_url = settings.resolve_base_url(same_origin);
        if base_url.is_empty() {
            return Err(CoreError::InvalidBaseUrl(
                "no base URL configured and no same-origin fallback".into(),
            ));
        }

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(settings.request_timeout_secs));

        Ok(Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON body.
    ///
    /// A non-success status becomes [`CoreError::RequestFailed`] carrying the
    /// response text, or the status reason when the body is empty.
    async fn request<T: DeserializeOwned>(&self, path: &str) -> Result<T, CoreError> {
        let url = self.url(path);
        debug!(%url, "dashboard API request");

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = if text.is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                text
            };
            return Err(CoreError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PortfolioApi for HttpPortfolioApi {
    async fn fetch_holdings(&self) -> Result<Vec<HoldingsItem>, CoreError> {
        self.request(HOLDINGS_PATH).await
    }

    async fn fetch_allocation(&self) -> Result<AllocationView, CoreError> {
        self.request(ALLOCATION_PATH).await
    }

    async fn fetch_performance(&self) -> Result<PerformanceView, CoreError> {
        self.request(PERFORMANCE_PATH).await
    }

    async fn fetch_summary(&self) -> Result<SummaryView, CoreError> {
        self.request(SUMMARY_PATH).await
    }
}
