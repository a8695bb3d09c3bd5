//! Client builder for constructing [`JobSearchClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (request timeout)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`JobSearchClient`] methods in `mod.rs`)
//!
//! # Invariants
//! - The base URL is always normalized to have no trailing slashes
//! - The fixed request timeout is enforced by the underlying HTTP client

use std::time::Duration;

use harvest_config::Config;
use harvest_config::constants::{DEFAULT_SEARCH_BASE_URL, DEFAULT_SEARCH_TIMEOUT_SECS};

use crate::client::JobSearchClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`JobSearchClient`].
///
/// All options have sensible defaults targeting the local development
/// service (`http://127.0.0.1:8000`, 10 second timeout).
pub struct JobSearchClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for JobSearchClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_SEARCH_TIMEOUT_SECS),
        }
    }
}

impl JobSearchClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the aggregation service.
    ///
    /// This should include the protocol and port, e.g., `http://127.0.0.1:8000`.
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 10 seconds. Requests exceeding it fail with
    /// [`ClientError::Timeout`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from configuration.
    ///
    /// Centralizes the conversion from config crate types to client types.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = config.search.base_url.clone();
        self.timeout = config.search.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`JobSearchClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the base URL is empty or the
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<JobSearchClient> {
        let base_url = Self::normalize_base_url(self.base_url);
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("base_url is required".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ClientError::InvalidUrl(format!("failed to build HTTP client: {}", e)))?;

        Ok(JobSearchClient {
            http,
            base_url,
            timeout: self.timeout,
        })
    }
}
