//! Client Error Types
//!
//! Every failed call ends up as something a view can show: the server's
//! `detail` when it sent one, otherwise a fallback chosen by the caller.

use serde::Deserialize;
use thiserror::Error;

/// Error body shape used by the API (`{"detail": ...}`)
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Parse an error body, keeping only a plain-string `detail`.
    ///
    /// Validation errors carry a structured list instead; those are not
    /// meant for end users and are treated as absent.
    pub fn detail_from(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        match parsed.detail? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }
}

/// Anything a view can pull a server-provided detail message from
pub trait FailureDetail {
    fn detail(&self) -> Option<&str>;

    /// Server detail, or `fallback` when there is none
    fn message_or(&self, fallback: &str) -> String {
        self.detail()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// A failed request as seen by the web front end
#[derive(Error, Debug, Clone, PartialEq)]
#[error("request failed ({status:?}): {}", .detail.as_deref().unwrap_or("no detail"))]
pub struct ApiFailure {
    /// HTTP status, if a response was received
    pub status: Option<u16>,
    /// Server-provided detail message
    pub detail: Option<String>,
}

impl ApiFailure {
    /// Failure without a response (network error, bad request build)
    pub fn transport() -> Self {
        Self {
            status: None,
            detail: None,
        }
    }

    pub fn from_response(status: u16, body: &str) -> Self {
        Self {
            status: Some(status),
            detail: ErrorBody::detail_from(body),
        }
    }

    /// Judge a response by status alone: any 2xx succeeds whatever the
    /// body holds; otherwise the body is searched for `detail`
    pub fn check_status(status: u16, body: &str) -> Result<(), Self> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(Self::from_response(status, body))
        }
    }
}

impl FailureDetail for ApiFailure {
    fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

/// Errors from the native API client
#[cfg(feature = "native")]
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection, TLS, or protocol failure before a response arrived
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("API error {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Token store error: {0}")]
    TokenStore(#[from] crate::token::TokenStoreError),

    /// Protected action attempted without a stored token
    #[error("Not logged in")]
    NotAuthenticated,

    /// Request rejected locally before sending
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

#[cfg(feature = "native")]
impl FailureDetail for ClientError {
    fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    fn message_or(&self, fallback: &str) -> String {
        match self {
            ClientError::NotAuthenticated => {
                "Not logged in. Run `medscan login` first.".to_string()
            }
            ClientError::InvalidRequest(msg) => msg.clone(),
            _ => self
                .detail()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
        }
    }
}

#[cfg(feature = "native")]
impl ClientError {
    /// HTTP status, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for native client operations
#[cfg(feature = "native")]
pub type ClientResult<T> = Result<T, ClientError>;
