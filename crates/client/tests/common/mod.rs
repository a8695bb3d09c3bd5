//! Common test utilities for integration tests.
//!
//! This module provides shared helpers and re-exports commonly used types
//! for testing the job search client against a mock aggregation service.

use std::time::Duration;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use harvest_client::{ClientError, JobRecord, JobSearchClient};
#[allow(unused_imports)]
pub use wiremock::matchers::{body_json, method, path};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client pointed at a mock server with a short timeout.
pub fn client_for(server: &MockServer) -> JobSearchClient {
    JobSearchClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_secs(2))
        .build()
        .expect("client should build")
}

/// A one-listing response body in the service's wire shape.
pub fn single_result_body() -> serde_json::Value {
    serde_json::json!({
        "job_results": [
            {
                "Title": "Backend Engineer",
                "Company": "Acme",
                "Location": "Remote",
                "Date": null,
                "Description": null,
                "URL": null
            }
        ]
    })
}
