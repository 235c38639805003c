use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use crate::error::UpstreamFetchError;

/// Fetch-by-URL capability the upstream client is built on
///
/// Implementations return the response body of a successful GET and report
/// every other outcome as an [`UpstreamFetchError`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, UpstreamFetchError>;
}

/// [`Transport`] over HTTP using reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .user_agent(concat!("news-gateway/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .context("Failed to create HTTP client")?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<String, UpstreamFetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(url, "request not sent", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamFetchError::new(url, format!("HTTP {}", status)));
        }

        response
            .text()
            .await
            .map_err(|e| fetch_error(url, "body not read", e))
    }
}

/// reqwest errors embed the full URL, API key included, so it is stripped
fn fetch_error(url: &str, stage: &str, err: reqwest::Error) -> UpstreamFetchError {
    UpstreamFetchError::new(url, format!("{}: {}", stage, err.without_url()))
}
