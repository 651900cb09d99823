//! Error types for the PLOS search client.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations.

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ClientError {
    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }
}

/// Errors from the search session.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    /// The query was empty after trimming; no request was issued.
    #[error("query is empty, nothing to search")]
    EmptyQuery,

    /// Error from the API client.
    #[error("search failed: {0}")]
    Client(#[from] ClientError),
}

impl SessionError {
    /// One-line message for the user. Transport and decode failures are not
    /// distinguished here; both surface as the same fetch error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyQuery => "Enter a search query first.".to_string(),
            Self::Client(_) => "Error while fetching data from PLOS API".to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
