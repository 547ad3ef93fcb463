use crate::models::api::{PostDetailResponse, WidgetList};
use crate::scrapers::traits::ListingApi;
use crate::scrapers::types::{Endpoints, SearchParams};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Divar JSON API client
pub struct DivarClient {
    client: Client,
    params: SearchParams,
    endpoints: Endpoints,
}

impl DivarClient {
    /// Create a client for the public API with default search parameters
    pub fn new() -> Result<Self> {
        Self::with_endpoints(SearchParams::default(), Endpoints::default())
    }

    /// Create a client with custom search parameters and endpoints
    pub fn with_endpoints(params: SearchParams, endpoints: Endpoints) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            params,
            endpoints,
        })
    }
}

#[async_trait]
impl ListingApi for DivarClient {
    async fn fetch_page(&self, page: u32) -> Result<Option<WidgetList>> {
        debug!(page, url = %self.endpoints.search_url, "Fetching search page");

        let response = self
            .client
            .post(&self.endpoints.search_url)
            .json(&self.params.request(page))
            .send()
            .await
            .with_context(|| format!("Failed to fetch search page {}", page))?;

        let body = response
            .bytes()
            .await
            .context("Failed to read search response body")?;

        serde_json::from_slice(&body)
            .with_context(|| format!("Failed to decode search page {}", page))
    }

    async fn fetch_detail(&self, token: &str) -> Result<Option<PostDetailResponse>> {
        let url = self.endpoints.detail_url(token);
        debug!(token, url = %url, "Fetching detail");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch detail for {}", token))?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            warn!(token, "Too many requests");
        }

        let body = response
            .bytes()
            .await
            .context("Failed to read detail response body")?;

        match serde_json::from_slice(&body) {
            Ok(document) => Ok(Some(document)),
            Err(e) => {
                warn!(token, error = %e, "Skipping undecodable detail");
                Ok(None)
            }
        }
    }
}
