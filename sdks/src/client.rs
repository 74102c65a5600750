// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

use parley_core::application::{Delivery, MessageSink, SinkError};
use parley_core::domain::Message;

/// Client for a relay service's message API.
#[derive(Debug, Clone)]
pub struct MessageClient {
    base_url: String,
    client: Client,
}

impl MessageClient {
    /// Create a client for the service at `base_url`, e.g. `http://introvert:5000`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(10))
    }

    /// Fails when `base_url` is not an absolute `http(s)` URL with a host.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url)
            .with_context(|| format!("Invalid base URL: {}", base_url))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host().is_none() {
            anyhow::bail!("Invalid base URL: {} (expected http(s)://host[:port])", base_url);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit `text` as the form field `message` to `POST /api/message`.
    ///
    /// Any HTTP answer is a [`Delivery`]; only failures to get an answer are
    /// errors. Connect failures map to [`SinkError::Unreachable`].
    pub async fn post_message(&self, text: &str) -> Result<Delivery, SinkError> {
        let url = format!("{}/api/message", self.base_url);

        let response = self
            .client
            .post(&url)
            .form(&[("message", text)])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    SinkError::Unreachable(e.to_string())
                } else {
                    SinkError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(%status, "Message posted to {}", url);

        if status.is_success() {
            Ok(Delivery::Accepted)
        } else {
            Ok(Delivery::Rejected(status.as_u16()))
        }
    }

    /// Read the echoed message from `GET /api/message`.
    pub async fn fetch_echo(&self) -> Result<String> {
        let response = self
            .client
            .get(&format!("{}/api/message", self.base_url))
            .send()
            .await
            .context("Failed to fetch echo")?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Failed to fetch echo: {}", error_text);
        }

        response.text().await.context("Failed to read echo body")
    }

    /// Fetch the service's `/health` document.
    pub async fn health(&self) -> Result<serde_json::Value> {
        let response = self
            .client
            .get(&format!("{}/health", self.base_url))
            .send()
            .await
            .context("Failed to reach health endpoint")?;

        if !response.status().is_success() {
            anyhow::bail!("Health check failed: HTTP {}", response.status());
        }

        response
            .json()
            .await
            .context("Failed to parse health response")
    }
}

#[async_trait]
impl MessageSink for MessageClient {
    async fn deliver(&self, message: &Message) -> Result<Delivery, SinkError> {
        self.post_message(message.as_str()).await
    }
}
