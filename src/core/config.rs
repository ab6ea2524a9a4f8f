//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Base path of the production lookup service.
pub const DEFAULT_BASE_URL: &str = "https://dictionary.yandex.net/api/v1/dicservice.json";

/// Default request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 30000;

/// Configuration for the dictionary client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API key sent with every request as the `key` query parameter
    pub api_key: String,
    /// Service base URL; overridable so tests can target a local stub
    pub base_url: String,
    /// Timeout applied to the underlying HTTP client
    pub timeout_ms: u64,
    /// When set, 4xx/5xx statuses outside the documented table are reported
    /// as errors instead of being passed through as success
    pub strict: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("YANDEX_DICT_API_KEY").unwrap_or_default(),
            base_url: std::env::var("YANDEX_DICT_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            strict: false,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("YANDEX_DICT_API_KEY")
            .map_err(|_| anyhow::anyhow!("YANDEX_DICT_API_KEY environment variable is required"))?;

        let base_url = std::env::var("YANDEX_DICT_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_MS.to_string())
            .parse::<u64>()?;

        let strict = std::env::var("YANDEX_DICT_STRICT")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            api_key,
            base_url,
            timeout_ms,
            strict,
        })
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    ///
    /// An empty API key is allowed: the service is the authority on key
    /// validity and rejects bad keys with 401/402.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.is_empty() {
            warn!("API key is empty; the service will reject requests with 401");
        }

        if self.base_url.is_empty() {
            return Err(anyhow::anyhow!("base_url is required"));
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        Ok(())
    }
}
