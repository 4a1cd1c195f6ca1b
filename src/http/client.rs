use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use crate::config::settings::DatasetSettings;
use crate::rate_limiter::RateLimiter;

/// HTTP client with built-in rate limiting
pub struct RateLimitedClient {
    client: Client,
    rate_limiter: RateLimiter,
}

impl RateLimitedClient {
    pub fn new(settings: &DatasetSettings) -> Result<Self> {
        let client = Self::build_client(settings.user_agent, settings.timeout_secs)?;
        let rate_limiter = RateLimiter::new(settings.rate_limit_ms);

        Ok(Self {
            client,
            rate_limiter,
        })
    }

    pub async fn get(&mut self, url: &str) -> Result<reqwest::Response> {
        self.rate_limiter.wait().await;
        self.send_get_request(url).await
    }

    /// GET a URL and read the body as text, failing on non-success status
    pub async fn get_text(&mut self, url: &str) -> Result<String> {
        let response = self.get(url).await?;

        if !response.status().is_success() {
            anyhow::bail!("Request to {} returned status: {}", url, response.status());
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))
    }
}
