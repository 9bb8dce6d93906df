//! Error types for the recruiting API client.
//!
//! This module contains the error enum returned by every gateway and facade call.
//! It provides:
//! - `ApiError`: the error enum covering transport, HTTP status, decoding and
//!   configuration failures
//! - Conversions from the underlying `reqwest`, `reqwest_middleware` and `serde_json` errors
//! - Helpers to tell a transport failure apart from an HTTP status failure

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// No response was received (connection refused, DNS, timeout).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// A response arrived with a non-2xx status.
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    /// The 2xx response body did not decode into the expected JSON shape.
    #[error("Failed to parse response body: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

impl ApiError {
    /// Status code of the failed response, if one was received.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub const fn is_http(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
