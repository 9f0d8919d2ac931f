//! Error types for the todo API client.
//!
//! # Design
//! Failures fall into three families the caller reacts to differently:
//! `ValidationError` is raised locally before any request exists,
//! `RemoteError` means the server answered with a non-2xx status, and
//! `TransportError` means no usable answer arrived at all. `ApiError` wraps
//! them together with the two JSON failure modes.

use thiserror::Error;

/// A local precondition failed; no request was sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("id must be numeric")]
    NonNumericId,
}

/// The server responded with a status outside 200..=299.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("remote API responded with HTTP {status}")]
pub struct RemoteError {
    pub status: u16,
    /// Raw response body, `None` when the server sent nothing.
    pub body: Option<String>,
}

/// Connection, timeout or body-read failure below the status-code layer.
#[derive(Error, Debug)]
#[error("transport failure: {message}")]
pub struct TransportError {
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Errors returned by every client operation.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A non-empty success body could not be decoded.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be encoded.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    /// Stable label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation",
            ApiError::Remote(_) => "remote",
            ApiError::Transport(_) => "transport",
            ApiError::Decode(_) => "decode",
            ApiError::Encode(_) => "encode",
        }
    }

    /// HTTP status of a remote failure, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Remote(e) => Some(e.status),
            _ => None,
        }
    }
}

/// Invalid client configuration, detected before any call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base URL is not configured")]
    MissingBaseUrl,

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("cannot build HTTP client: {0}")]
    HttpClient(String),
}
