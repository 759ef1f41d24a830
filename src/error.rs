//! Error types for the meXBT client library.

use thiserror::Error;

/// The main error type for all meXBT client operations.
#[derive(Error, Debug)]
pub enum MexbtError {
    /// Request could not be encoded as JSON
    #[error("Failed to serialize request: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Response body was not valid JSON or did not match the expected shape
    #[error("Failed to parse response: {source}. Body: {body}")]
    Deserialization {
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
        /// The raw response body
        body: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Method name is not of the form `<scope>/<path>`
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Missing required credentials
    #[error("Missing credentials: API key, private key and user id required for private endpoints")]
    MissingCredentials,

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The exchange answered but did not accept the operation
    #[error("meXBT rejected the request: {0}")]
    Rejected(ApiRejection),
}

impl MexbtError {
    /// Check whether the error came from the network layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, MexbtError::Http(_) | MexbtError::HttpMiddleware(_))
    }

    /// The reject reason, if the exchange refused the operation.
    pub fn reject_reason(&self) -> Option<&str> {
        match self {
            MexbtError::Rejected(rejection) => Some(&rejection.reason),
            _ => None,
        }
    }
}

/// A well-formed response carrying `IsAccepted = false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRejection {
    /// The `RejectReason` string exactly as returned by the exchange.
    pub reason: String,
}

impl std::fmt::Display for ApiRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.reason.is_empty() {
            write!(f, "no reason given")
        } else {
            write!(f, "{}", self.reason)
        }
    }
}

impl ApiRejection {
    /// Create a new rejection from a reason string.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Check if the exchange reported a lack of funds.
    pub fn is_insufficient_funds(&self) -> bool {
        self.reason.to_ascii_lowercase().contains("insufficient")
    }

    /// Check if the exchange refused the nonce.
    pub fn is_invalid_nonce(&self) -> bool {
        self.reason.to_ascii_lowercase().contains("nonce")
    }
}
