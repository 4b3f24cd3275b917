use crate::adapters::outbound::parsing::parse_catalog_document;
use crate::ports::outbound::CatalogReader;
use crate::shared::error::CatalogError;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// HttpCatalogClient adapter for catalogue documents served over HTTP
///
/// Every request carries a `v=<millis>` query parameter so intermediate
/// caches never serve a stale document. Transport failures and non-success
/// statuses are retried with a fixed delay.
pub struct HttpCatalogClient {
    client: reqwest::Client,
    retry_attempts: u32,
    retry_delay: Duration,
}

impl HttpCatalogClient {
    pub fn new(retry_attempts: u32, retry_delay: Duration) -> Result<Self> {
        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            retry_attempts: retry_attempts.max(1),
            retry_delay,
        })
    }

    fn cache_busting_url(location: &str) -> Result<Url> {
        let mut url = Url::parse(location).map_err(|e| CatalogError::DataLoadError {
            source_path: location.to_string(),
            details: e.to_string(),
            suggestion: "Check the source URL".to_string(),
        })?;
        url.query_pairs_mut()
            .append_pair("v", &Utc::now().timestamp_millis().to_string());
        Ok(url)
    }

    async fn fetch_once(&self, url: &Url) -> Result<String> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP error: {}", status);
        }
        Ok(response.text().await?)
    }

    async fn fetch_with_retry(&self, location: &str) -> Result<String> {
        let url = Self::cache_busting_url(location)?;
        let mut last_error = None;

        for attempt in 1..=self.retry_attempts {
            match self.fetch_once(&url).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    tracing::debug!(attempt, error = %e, "Catalogue fetch failed");
                    last_error = Some(e);
                    if attempt < self.retry_attempts {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
            }
        }

        let details = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "Failed after retry attempts".to_string());
        Err(CatalogError::DataLoadError {
            source_path: location.to_string(),
            details,
            suggestion: format!(
                "The server did not answer after {} attempt(s). Check your connection and try again",
                self.retry_attempts
            ),
        }
        .into())
    }
}

#[async_trait]
impl CatalogReader for HttpCatalogClient {
    async fn read_catalog(&self, location: &str) -> Result<Vec<Value>> {
        let text = self.fetch_with_retry(location).await?;
        parse_catalog_document(&text, location)
    }
}
