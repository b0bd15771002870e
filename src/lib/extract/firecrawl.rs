use reqwest::Client;
use serde_json::Value;

use crate::extract::{extract_markdown, ContentFetcher};

pub struct FirecrawlClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FirecrawlError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

impl FirecrawlClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.firecrawl.dev/v1".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub async fn send_scrape_request(
        &self,
        url: &str,
        format: &str,
    ) -> Result<Value, FirecrawlError> {
        let body = serde_json::json!({
            "url": url,
            "formats": [format]
        });

        let resp = self
            .client
            .post(format!("{}/scrape", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(FirecrawlError::Api { status, message });
        }

        Ok(resp.json::<Value>().await?)
    }
}

impl ContentFetcher for FirecrawlClient {
    type Error = FirecrawlError;

    async fn fetch_article(&self, url: &str) -> Result<String, Self::Error> {
        let response = self
            .send_scrape_request(url, Self::CONTENT_FORMAT)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to scrape article"))?;

        Ok(extract_markdown(&response).unwrap_or_default())
    }
}
