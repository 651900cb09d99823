//! PLOS search API client.
//!
//! One unauthenticated GET per search with:
//! - Connection pooling via reqwest
//! - A polite fixed delay before each request
//! - Typed status-code mapping and a two-step body decode

use std::time::Duration;

use reqwest::Client;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{Article, SearchResponse};

/// PLOS search API client.
#[derive(Clone)]
pub struct PlosClient {
    /// HTTP client.
    client: Client,

    /// Search endpoint URL.
    search_api_url: String,

    /// Field the query string is matched against.
    query_field: String,

    /// Delay applied before each request.
    rate_limit_delay: Duration,
}

impl PlosClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            search_api_url: config.search_api_url,
            query_field: config.query_field,
            rate_limit_delay: config.rate_limit_delay,
        })
    }

    /// Search for articles matching a free-text query.
    ///
    /// The query is matched against the configured document field and
    /// percent-encoded by the URL layer; no query-syntax validation is
    /// performed here. A response without a document list decodes to an
    /// empty vector.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a
    /// malformed response body.
    pub async fn search(&self, query: &str) -> ClientResult<Vec<Article>> {
        // Rate limit
        tokio::time::sleep(self.rate_limit_delay).await;

        let q = format!("{}:{}", self.query_field, query);
        tracing::debug!(url = %self.search_api_url, query = %q, "issuing search request");

        let response =
            self.client.get(&self.search_api_url).query(&[("q", q.as_str())]).send().await?;

        let response = handle_response(response).await?;
        let value: serde_json::Value = response.json().await?;
        let decoded: SearchResponse = serde_json::from_value(value)?;

        Ok(decoded.response.docs)
    }
}

/// Handle API response status codes.
async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    match status.as_u16() {
        400 => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::bad_request(text))
        }
        404 => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::not_found(text))
        }
        500..=599 => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::server(status.as_u16(), text))
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
        }
    }
}

impl std::fmt::Debug for PlosClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlosClient").field("search_api_url", &self.search_api_url).finish()
    }
}
