//! Configuration for the PLOS search client.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Search endpoint of the PLOS API.
    pub const SEARCH_URL: &str = "https://api.plos.org/search";

    /// Document field the free-text query is matched against.
    pub const QUERY_FIELD: &str = "title";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Polite delay before each request (PLOS asks clients to stay well
    /// under 10 req/min).
    pub const RATE_LIMIT_DELAY: Duration = Duration::from_millis(200);

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Articles shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Search endpoint URL (overridable for mock servers).
    pub search_api_url: String,

    /// Field the query string is matched against.
    pub query_field: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Delay applied before each request.
    pub rate_limit_delay: Duration,

    /// Articles per page in the view pipeline.
    pub page_size: usize,
}

impl Config {
    /// Create a configuration with production defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            search_api_url: api::SEARCH_URL.to_string(),
            query_field: api::QUERY_FIELD.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            rate_limit_delay: api::RATE_LIMIT_DELAY,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            search_api_url: format!("{base_url}/search"),
            query_field: api::QUERY_FIELD.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            rate_limit_delay: Duration::from_millis(0), // No delay in tests
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// `PLOS_SEARCH_URL` overrides the search endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new();
        if let Ok(url) = std::env::var("PLOS_SEARCH_URL") {
            config.search_api_url = url;
        }
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.search_api_url, api::SEARCH_URL);
        assert_eq!(config.query_field, "title");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_config_for_testing_points_at_mock() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.search_api_url, "http://127.0.0.1:9999/search");
        assert_eq!(config.rate_limit_delay, Duration::from_millis(0));
    }
}
