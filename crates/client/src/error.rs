//! Error types for the job search client.
//!
//! The taxonomy is deliberately closed: every transport failure is
//! classified here, at the client boundary, so downstream state handling
//! can match exhaustively and raw `reqwest` errors never cross the crate
//! boundary. All variants are `Clone`, which lets completion actions carry
//! them through channels without wrapping.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Message shown when the aggregation service cannot be reached.
pub const MSG_CONNECTIVITY: &str =
    "Unable to connect to the job search service. Please ensure the service is running.";

/// Message shown when the service signals rate limiting.
pub const MSG_RATE_LIMITED: &str = "Too many requests. Please try again later.";

/// Fallback message for every other search failure.
pub const MSG_GENERIC: &str = "Failed to search jobs. Please try again.";

/// Errors that can occur during job search operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The service is unreachable or the network layer refused the connection.
    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    /// Request exceeded the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Rate limited - too many requests (HTTP 429).
    #[error("Rate limited by the job search service")]
    RateLimited,

    /// Non-2xx API response other than 429.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response payload did not match the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Transport failure that is neither a refused connection nor a timeout.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid base URL supplied at build time.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Classify a raw `reqwest` error into the closed taxonomy.
    ///
    /// `url` is the request target (used for the connectivity variant) and
    /// `timeout` is the configured request timeout (reported on timeouts).
    pub fn from_transport(url: &str, timeout: Duration, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(timeout)
        } else if err.is_connect() {
            ClientError::ConnectionRefused(url.to_string())
        } else if err.is_decode() {
            ClientError::InvalidResponse(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }

    /// The human-readable message rendered for this error.
    ///
    /// Only connectivity and rate limiting get dedicated copy; everything
    /// else (timeouts included) falls back to the generic message.
    pub fn user_message(&self) -> &'static str {
        match self {
            ClientError::ConnectionRefused(_) => MSG_CONNECTIVITY,
            ClientError::RateLimited => MSG_RATE_LIMITED,
            ClientError::Timeout(_)
            | ClientError::ApiError { .. }
            | ClientError::InvalidResponse(_)
            | ClientError::Transport(_)
            | ClientError::InvalidUrl(_) => MSG_GENERIC,
        }
    }
}
