//! HTTP fetcher backed by reqwest

use super::PageFetcher;
use crate::config::ScrapeConfig;
use crate::error::{Error, FetchError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Plain GET client: no retries, no custom headers beyond the user agent
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout_ms: u64,
}

impl HttpFetcher {
    /// Build a client honoring the config's timeout and user agent
    pub fn from_config(config: &ScrapeConfig) -> Result<Self> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_millis(config.timeout_ms));
        if let Some(ua) = &config.user_agent {
            builder = builder.user_agent(ua.clone());
        }

        let client = builder
            .build()
            .map_err(|e| Error::config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            timeout_ms: config.timeout_ms,
        })
    }

    /// Timeout applied to every request
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    fn transport_error(&self, url: &str, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                ms: self.timeout_ms,
            }
        } else if err.is_builder() {
            FetchError::InvalidUrl(format!("{}: {}", url, err))
        } else {
            FetchError::NetworkError(format!("{}: {}", url, err))
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    #[instrument(skip(self))]
    async fn fetch_html(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(url, e))?;

        let status = response.status();
        debug!("{} answered {}", url, status);
        if !status.is_success() {
            return Err(FetchError::HttpError {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                self.transport_error(url, e)
            } else {
                FetchError::BodyFailed(format!("{}: {}", url, e))
            }
        })?;
        Ok(body)
    }
}
