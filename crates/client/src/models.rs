//! Wire models for the job aggregation service.
//!
//! Field names mirror the service's JSON exactly (PascalCase keys, plus the
//! lowercase `source` portal tag). `Title` and `Company` are required; a
//! listing missing either fails deserialization of the whole batch rather
//! than being silently dropped.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/search-jobs`.
#[derive(Debug, Clone, Serialize)]
pub struct JobSearchRequest {
    pub job_title: String,
    pub location: String,
}

/// One normalized job listing as returned by the aggregation service.
///
/// Records are immutable once parsed and kept in server response order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
    #[serde(rename = "Date", default)]
    pub posted_date: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "URL", default)]
    pub url: Option<String>,
    /// Portal the listing was scraped from, when the service reports it.
    #[serde(rename = "source", default, skip_serializing_if = "Option::is_none")]
    pub source_portal: Option<String>,
}

/// Top-level response envelope of the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct JobSearchResponse {
    pub job_results: Vec<JobRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_record_parses_full_listing() {
        let json = serde_json::json!({
            "Title": "Backend Engineer",
            "Company": "Acme",
            "Location": "Remote",
            "Date": "3 days ago",
            "Description": "Build services.",
            "URL": "https://jobs.example.com/1",
            "source": "wuzzuf"
        });

        let record: JobRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.title, "Backend Engineer");
        assert_eq!(record.company, "Acme");
        assert_eq!(record.source_portal.as_deref(), Some("wuzzuf"));
    }

    #[test]
    fn test_job_record_accepts_null_optionals() {
        let json = serde_json::json!({
            "Title": "Backend Engineer",
            "Company": "Acme",
            "Location": null,
            "Date": null,
            "Description": null,
            "URL": null
        });

        let record: JobRecord = serde_json::from_value(json).unwrap();
        assert!(record.location.is_none());
        assert!(record.posted_date.is_none());
        assert!(record.description.is_none());
        assert!(record.url.is_none());
        assert!(record.source_portal.is_none());
    }

    #[test]
    fn test_job_record_rejects_missing_company() {
        let json = serde_json::json!({ "Title": "Backend Engineer" });
        assert!(serde_json::from_value::<JobRecord>(json).is_err());
    }

    #[test]
    fn test_job_record_rejects_null_title() {
        let json = serde_json::json!({ "Title": null, "Company": "Acme" });
        assert!(serde_json::from_value::<JobRecord>(json).is_err());
    }

    #[test]
    fn test_response_preserves_server_order() {
        let json = serde_json::json!({
            "job_results": [
                { "Title": "First", "Company": "A" },
                { "Title": "Second", "Company": "B" },
                { "Title": "Third", "Company": "C" }
            ]
        });

        let response: JobSearchResponse = serde_json::from_value(json).unwrap();
        let titles: Vec<_> = response.job_results.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }
}
