//! Async client for the dictionary lookup service

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tracing::debug;

use crate::core::config::ClientConfig;
use crate::core::errors::{classify_status, DictionaryError, Result};
use crate::core::flags::LookupFlags;

/// Endpoint listing the translation directions the service supports.
const GET_LANGS_PATH: &str = "getLangs";
/// Endpoint performing a dictionary lookup.
const LOOKUP_PATH: &str = "lookup";

/// Client for the dictionary lookup web service.
///
/// Holds an immutable API key and a pre-built `reqwest::Client`; each
/// operation is one independent GET round trip with no state carried between
/// calls, so a single client can be shared freely across tasks. `Clone` is
/// cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl DictionaryClient {
    /// Create a client with the given API key and default configuration.
    ///
    /// Any string is accepted, including an empty one: the service is the
    /// authority on key validity and answers 401/402 for bad keys.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let config = ClientConfig {
            api_key: api_key.into(),
            ..ClientConfig::default()
        };
        Self::with_config(config)
    }

    /// Create a client from a full configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create from environment
    pub fn from_env() -> anyhow::Result<Self> {
        let config = ClientConfig::from_env()?;
        config.validate()?;
        Ok(Self::with_config(config)?)
    }

    /// Active configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// List the translation directions supported by the service, e.g.
    /// `en-ru`, `ru-ru`.
    ///
    /// Returns the raw response body; no JSON parsing is performed.
    pub async fn get_langs(&self) -> Result<Bytes> {
        self.request(GET_LANGS_PATH, &[("key", self.config.api_key.as_str())])
            .await
    }

    /// Look up a word or phrase in the dictionary.
    ///
    /// * `text` - word or phrase to search for
    /// * `lang` - translation direction, e.g. `en-ru` (see [`Self::get_langs`])
    /// * `ui` - language of auxiliary metadata in the response
    /// * `flags` - optional search behaviors, sent as a decimal bitmask
    ///
    /// `lang` and `ui` are not validated locally; the service answers 501 for
    /// an unsupported direction. Returns the raw response body.
    pub async fn lookup(
        &self,
        text: &str,
        lang: &str,
        ui: &str,
        flags: LookupFlags,
    ) -> Result<Bytes> {
        let flags = flags.bits().to_string();
        let query = [
            ("key", self.config.api_key.as_str()),
            ("lang", lang),
            ("text", text),
            ("ui", ui),
            ("flags", flags.as_str()),
        ];
        self.request(LOOKUP_PATH, &query).await
    }

    /// Perform one GET round trip and classify the response status.
    async fn request(&self, path: &str, query: &[(&str, &str)]) -> Result<Bytes> {
        let url = endpoint_url(&self.config.base_url, path);
        debug!(%url, "sending dictionary request");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();

        // The service attaches a diagnostic payload to some error responses;
        // read the body before classifying so it reaches the caller either way.
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        if let Some(kind) = classify_status(status.as_u16()) {
            return Err(DictionaryError::Service { kind, body });
        }

        if self.config.strict && (status.is_client_error() || status.is_server_error()) {
            return Err(DictionaryError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

/// Join the configured base URL and an endpoint name.
fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}
