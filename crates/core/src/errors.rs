use thiserror::Error;

/// Unified error type for the entire wealth-dashboard-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Holding Store ───────────────────────────────────────────────
    #[error("Holding validation failed: {0}")]
    Validation(String),

    #[error("Duplicate holding symbol: {0}")]
    DuplicateSymbol(String),

    #[error("Data source error: {0}")]
    DataSource(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("CSV export failed: {0}")]
    Export(String),

    // ── API / Network ───────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed ({status}): {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Export(e.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        CoreError::Export(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Strip query parameters from URLs in the message.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}

impl CoreError {
    /// True for errors raised while talking to the dashboard API.
    /// The view model treats these as retryable.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            CoreError::Network(_) | CoreError::RequestFailed { .. } | CoreError::Deserialization(_)
        )
    }
}
