//! Server configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// API server configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Address to bind (default: 127.0.0.1).
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on (default: 8000).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether to seed the demo catalog on startup.
    #[serde(default = "default_true")]
    pub seed: bool,

    /// Tracing filter directive (default: "info").
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            seed: true,
            log_filter: default_log_filter(),
        }
    }
}

impl ApiConfig {
    /// Load config from a file. JSON by extension, TOML otherwise.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// The socket address string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
        assert!(config.seed);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ApiConfig = toml::from_str("port = 9090").unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.log_filter, "info");
    }
}
