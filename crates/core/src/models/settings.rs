use serde::{Deserialize, Serialize};

/// Environment variable holding the API origin for the dashboard client.
pub const BASE_URL_ENV: &str = "WEALTH_API_BASE_URL";

/// Default request timeout for dashboard API calls, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client-side settings for reaching the dashboard API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Origin of the query backend (e.g., "https://api.example.com").
    /// `None` means the API is served from the same origin as the dashboard.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Per-request timeout (ignored on wasm32).
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientSettings {
    /// Settings with an explicit base URL. Blank input means same-origin.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            ..Self::default()
        }
    }

    /// Read the base URL from [`BASE_URL_ENV`]; unset or blank means same-origin.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .and_then(|v| normalize_base_url(&v));
        Self {
            base_url,
            ..Self::default()
        }
    }

    /// The origin requests are sent to: the configured base URL, or
    /// `same_origin` (the origin the dashboard itself was served from).
    pub fn resolve_base_url(&self, same_origin: &str) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => same_origin.trim().trim_end_matches('/').to_string(),
        }
    }
}

fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
