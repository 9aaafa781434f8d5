//! Server configuration.

use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable overriding [`ServerConfig::host`].
pub const HOST_ENV: &str = "HOST";

/// Environment variable overriding [`ServerConfig::port`].
pub const PORT_ENV: &str = "PORT";

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Answer cross-origin requests from any origin
    #[serde(default = "default_true")]
    pub cors_allow_any: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_allow_any: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Apply `HOST` / `PORT` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(HOST_ENV).ok(),
            std::env::var(PORT_ENV).ok(),
        )
    }

    /// Apply host and port overrides. Blank values are ignored, and so is a
    /// host that is not an IP address or a port that does not parse (with a
    /// warning).
    pub fn with_overrides(mut self, host: Option<String>, port: Option<String>) -> Self {
        if let Some(raw) = host.map(|h| h.trim().to_string()).filter(|h| !h.is_empty()) {
            match raw.parse::<IpAddr>() {
                Ok(_) => self.host = raw,
                Err(e) => warn!(host = %raw, error = %e, "ignoring invalid {HOST_ENV}"),
            }
        }
        if let Some(raw) = port.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()) {
            match raw.parse::<u16>() {
                Ok(port) => self.port = port,
                Err(e) => warn!(port = %raw, error = %e, "ignoring invalid {PORT_ENV}"),
            }
        }
        self
    }

    /// Socket address to bind. Fails if `host` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::io::Error> {
        let ip: IpAddr = self.host.parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid host {:?}: {e}", self.host),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
