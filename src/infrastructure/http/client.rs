//! `reqwest`-backed implementation of the transport port.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header};
use tracing::{debug, warn};
use url::Url;

use crate::domain::entities::{FetchedResource, ResponseMetadata};
use crate::domain::errors::TransportError;
use crate::domain::ports::Transport;
use crate::infrastructure::config::HttpConfig;

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("recipe-fetch/", env!("CARGO_PKG_VERSION"));

/// Request timeout applied by the HTTP client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Single-request HTTP client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with default settings.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_settings(DEFAULT_USER_AGENT, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a transport from configuration.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn from_config(config: &HttpConfig) -> Result<Self, TransportError> {
        Self::with_settings(&config.user_agent, Duration::from_secs(config.timeout_secs))
    }

    /// Creates a transport with a custom user agent and timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_settings(user_agent: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::client_setup(e.to_string()))?;

        Ok(Self { client })
    }
}

fn classify(url: &Url, error: &reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::timeout(url.as_str())
    } else if error.is_connect() {
        TransportError::connect(url.as_str(), error.to_string())
    } else {
        TransportError::request(url.as_str(), error.to_string())
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<FetchedResource, TransportError> {
        debug!(url = %url, "Sending GET request");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Request failed");
            classify(url, &e)
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let bytes = response.bytes().await.map_err(|e| {
            warn!(url = %url, error = %e, "Failed to read response body");
            if e.is_timeout() {
                TransportError::timeout(url.as_str())
            } else {
                TransportError::body(url.as_str(), e.to_string())
            }
        })?;

        debug!(
            url = %url,
            status = status,
            size = bytes.len(),
            "Received response"
        );

        Ok(FetchedResource::new(
            bytes,
            ResponseMetadata::new(status, content_type),
        ))
    }
}
