//! Job search endpoint.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::{JobRecord, JobSearchRequest, JobSearchResponse};

/// Run one search against the aggregation service.
///
/// Issues exactly one `POST <base>/api/search-jobs` request; no retry. The
/// `timeout` argument is the value configured on `client` and is only used
/// to report timeouts accurately.
///
/// # Errors
///
/// Returns [`ClientError::RateLimited`] on HTTP 429, [`ClientError::ApiError`]
/// on any other non-2xx status, [`ClientError::InvalidResponse`] when the
/// payload does not match the expected shape (including listings missing
/// `Title` or `Company`), and a classified transport error otherwise.
pub async fn search_jobs(
    client: &Client,
    base_url: &str,
    job_title: &str,
    location: &str,
    timeout: Duration,
) -> Result<Vec<JobRecord>> {
    debug!(job_title, location, "Searching jobs");

    let url = format!("{}/api/search-jobs", base_url);

    let body = JobSearchRequest {
        job_title: job_title.to_string(),
        location: location.to_string(),
    };

    let response = client
        .post(&url)
        .json(&body)
        .send()
        .await
        .map_err(|e| ClientError::from_transport(&url, timeout, e))?;

    let status = response.status().as_u16();

    if status == 429 {
        return Err(ClientError::RateLimited);
    }

    if !response.status().is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        return Err(ClientError::ApiError {
            status,
            url,
            message,
        });
    }

    let parsed: JobSearchResponse = response
        .json()
        .await
        .map_err(|e| ClientError::from_transport(&url, timeout, e))?;

    debug!(count = parsed.job_results.len(), "Search completed");

    Ok(parsed.job_results)
}
