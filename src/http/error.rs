//! Error definitions for outbound requests.

use reqwest::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error;

/// Errors that can occur while building or executing a request.
///
/// A non-2xx status is not an error; the response body is returned as-is.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Transport or client setup failure, passed through from reqwest.
    /// Covers DNS failures, refused connections, timeouts and TLS errors.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The request URL could not be parsed.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid header name: {0}")]
    InvalidHeaderName(#[from] InvalidHeaderName),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),

    /// The request body could not be serialized.
    #[error("JSON encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body could not be decoded into the requested type.
    #[error("JSON decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// Reading a file part failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HttpError {
    /// Whether the request ran past its timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpError::Transport(e) if e.is_timeout())
    }

    /// Whether the connection could not be established.
    pub fn is_connect(&self) -> bool {
        matches!(self, HttpError::Transport(e) if e.is_connect())
    }
}

/// Result type for outbound requests.
pub type HttpResult<T> = Result<T, HttpError>;
