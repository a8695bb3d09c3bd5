//! Error types for store operations.
//!
//! These errors are provider-defined and opaque to the search core: they
//! are propagated as-is to whichever flow invoked the store (sign-in,
//! sign-up, record access) and never fold into the search error mapping.

use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store rejected the request (auth failure, constraint violation, ...).
    #[error("Store error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// Response payload did not match the expected shape.
    #[error("Invalid store response: {0}")]
    InvalidResponse(String),

    /// Network-level failure talking to the store.
    #[error("Store transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Operation requires a signed-in session but none is present.
    #[error("Not signed in")]
    NotAuthenticated,

    /// The store client is missing required configuration.
    #[error("Store misconfigured: {0}")]
    Misconfigured(String),
}

impl StoreError {
    /// Build an ApiError from a non-success response, preferring the
    /// provider's JSON error fields over the raw body.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                ["error_description", "msg", "message", "error"]
                    .iter()
                    .find_map(|key| v[*key].as_str().map(|s| s.to_string()))
            })
            .unwrap_or(body);

        StoreError::ApiError { status, message }
    }
}
