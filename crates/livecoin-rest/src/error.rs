//! Error types for REST API operations

use livecoin_auth::AuthError;
use reqwest::StatusCode;
use std::time::Duration;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Base URL or target URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Private endpoint called without a full key/secret pair
    #[error("You need to set API Key and API Secret to call this method")]
    MissingCredentials,

    /// HTTP request failed (connection, TLS, request building)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No response arrived within the configured timeout
    #[error("Timeout on reading data from Livecoin API after {timeout:?}")]
    Timeout {
        /// Timeout that elapsed
        timeout: Duration,
    },

    /// The background request task panicked or was cancelled
    #[error("Request task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Response body could not be read to the end
    #[error("Failed to read response body: {source}")]
    BodyRead {
        /// Underlying read error
        #[source]
        source: reqwest::Error,
        /// Bytes read before the failure
        partial: Vec<u8>,
    },

    /// Status other than 200 or 400
    #[error("{status}")]
    Status {
        /// HTTP status returned by the exchange
        status: StatusCode,
        /// Full response body
        body: Vec<u8>,
    },

    /// Response was not valid JSON or did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Exchange reported an error inside a well-formed body
    #[error("{message}")]
    Api {
        /// Value of the `errorMessage` field
        message: String,
    },

    /// Top-level JSON value was neither an object nor an array
    #[error("Unrecognized response shape: {0}")]
    UnrecognizedShape(&'static str),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Credential loading failed
    #[error("Auth error: {0}")]
    Auth(AuthError),
}

impl From<AuthError> for RestError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredentials => Self::MissingCredentials,
            other => Self::Auth(other),
        }
    }
}

impl RestError {
    /// Create an application error from an embedded `errorMessage`
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Check if this error is the timeout sentinel
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Check if this error was reported by the exchange inside the body
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::UnrecognizedShape(_))
    }

    /// Check if this error was raised before any network activity
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::MissingCredentials | Self::InvalidUrl(_) | Self::Auth(_)
        )
    }

    /// HTTP status, when the failure came from an unexpected status
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Body bytes carried by the error, if any were read
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Self::Status { body, .. } => Some(body),
            Self::BodyRead { partial, .. } => Some(partial),
            _ => None,
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
