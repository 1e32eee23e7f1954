// src/services/fetcher.rs

//! HTTP fetching service.
//!
//! One configured client serves both the page fetch and the per-asset
//! downloads; downloads override the request timeout since PDFs can be
//! large.

use std::time::Duration;

use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::FetcherConfig;

/// HTTP fetcher with a browser-like identification header.
pub struct PageFetcher {
    client: Client,
    download_timeout: Duration,
}

impl PageFetcher {
    /// Create a fetcher from the configured user agent and timeouts.
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.page_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            download_timeout: Duration::from_secs(config.download_timeout_secs),
        })
    }

    /// Fetch the target page, returning its status code and body text.
    ///
    /// Transport failures (DNS, refused connection, timeout) come back
    /// as `AppError::Unreachable`; status-code handling is the caller's
    /// concern.
    pub async fn fetch_page(&self, url: &str) -> Result<(u16, String)> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::unreachable(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::unreachable(e.to_string()))?;

        Ok((status, body))
    }

    /// Fetch raw bytes for a single asset with the download timeout.
    pub async fn fetch_bytes(&self, url: &str) -> Result<(u16, Vec<u8>)> {
        let response = self
            .client
            .get(url)
            .timeout(self.download_timeout)
            .send()
            .await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        Ok((status, bytes.to_vec()))
    }
}
