//! Main job search client.
//!
//! This module provides the primary [`JobSearchClient`] for talking to the
//! job aggregation service.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Search lifecycle state (owned by the app crate's controller)
//!
//! # Invariants
//! - Exactly one HTTP request per [`JobSearchClient::search`] call; the
//!   client never retries on its own.
//! - Every failure is one of the [`crate::error::ClientError`] variants.

pub mod builder;

use std::time::Duration;

use crate::endpoints;
use crate::error::Result;
use crate::models::JobRecord;

/// Client for the job aggregation service.
///
/// # Creating a Client
///
/// Use [`JobSearchClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use harvest_client::JobSearchClient;
///
/// let client = JobSearchClient::builder()
///     .base_url("http://127.0.0.1:8000".to_string())
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct JobSearchClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
}

impl JobSearchClient {
    /// Create a new client builder.
    pub fn builder() -> builder::JobSearchClientBuilder {
        builder::JobSearchClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Search for jobs matching a title and optional location.
    ///
    /// Returns listings in server response order. An empty location is
    /// passed through as-is; the service treats it as "anywhere".
    pub async fn search(&self, job_title: &str, location: &str) -> Result<Vec<JobRecord>> {
        endpoints::search_jobs(&self.http, &self.base_url, job_title, location, self.timeout).await
    }
}
