//! Output formatters for CLI commands.
//!
//! Provides three output formats: Table (default), JSON, and CSV.

use anyhow::Result;
use clap::ValueEnum;

use harvest_client::JobRecord;
use harvest_store::SavedJob;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        write!(f, "{}", s)
    }
}

/// Format search results.
pub fn format_jobs(jobs: &[JobRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(jobs)?),
        OutputFormat::Csv => jobs_csv(jobs),
        OutputFormat::Table => Ok(jobs_table(jobs)),
    }
}

/// Format the saved-jobs listing.
pub fn format_saved_jobs(saved: &[SavedJob], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = saved
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "id": s.id,
                        "job_title": s.job_title,
                        "company": s.company,
                        "location": s.location,
                        "url": s.url,
                        "created_at": s.created_at.to_rfc3339(),
                    })
                })
                .collect();
            Ok(serde_json::to_string_pretty(&rows)?)
        }
        OutputFormat::Csv => saved_csv(saved),
        OutputFormat::Table => Ok(saved_table(saved)),
    }
}

fn jobs_table(jobs: &[JobRecord]) -> String {
    if jobs.is_empty() {
        return "No results found.".to_string();
    }

    let mut output = String::new();
    for (index, job) in jobs.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, job.title));
        output.push_str(&format!("   {}", job.company));
        if let Some(location) = &job.location {
            output.push_str(&format!(" | {}", location));
        }
        if let Some(date) = &job.posted_date {
            output.push_str(&format!(" | {}", date));
        }
        if let Some(portal) = &job.source_portal {
            output.push_str(&format!(" | via {}", portal));
        }
        output.push('\n');
        if let Some(description) = &job.description {
            output.push_str(&format!("   {}\n", description));
        }
        if let Some(url) = &job.url {
            output.push_str(&format!("   {}\n", url));
        }
    }
    output
}

fn jobs_csv(jobs: &[JobRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["title", "company", "location", "date", "description", "url", "source"])?;
    for job in jobs {
        writer.write_record([
            job.title.as_str(),
            job.company.as_str(),
            job.location.as_deref().unwrap_or(""),
            job.posted_date.as_deref().unwrap_or(""),
            job.description.as_deref().unwrap_or(""),
            job.url.as_deref().unwrap_or(""),
            job.source_portal.as_deref().unwrap_or(""),
        ])?;
    }
    Ok(String::from_utf8(writer.into_inner()?)?)
}

fn saved_table(saved: &[SavedJob]) -> String {
    if saved.is_empty() {
        return "No saved jobs yet.".to_string();
    }

    let mut output = String::new();
    for (index, job) in saved.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, job.job_title));
        output.push_str(&format!("   {}", job.company));
        if let Some(location) = &job.location {
            output.push_str(&format!(" | {}", location));
        }
        output.push_str(&format!(" | saved {}", job.created_at.format("%Y-%m-%d")));
        output.push('\n');
        if let Some(url) = &job.url {
            output.push_str(&format!("   {}\n", url));
        }
    }
    output
}

fn saved_csv(saved: &[SavedJob]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["id", "job_title", "company", "location", "url", "created_at"])?;
    for job in saved {
        writer.write_record([
            job.id.as_str(),
            job.job_title.as_str(),
            job.company.as_str(),
            job.location.as_deref().unwrap_or(""),
            job.url.as_deref().unwrap_or(""),
            &job.created_at.to_rfc3339(),
        ])?;
    }
    Ok(String::from_utf8(writer.into_inner()?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> JobRecord {
        JobRecord {
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            location: Some("Remote".to_string()),
            posted_date: Some("3 days ago".to_string()),
            description: Some("Build services.".to_string()),
            url: Some("https://jobs.example.com/1".to_string()),
            source_portal: Some("wuzzuf".to_string()),
        }
    }

    #[test]
    fn test_table_lists_numbered_entries() {
        let output = format_jobs(&[record()], OutputFormat::Table).unwrap();
        assert!(output.contains("1. Backend Engineer"));
        assert!(output.contains("Acme | Remote | 3 days ago | via wuzzuf"));
        assert!(output.contains("https://jobs.example.com/1"));
    }

    #[test]
    fn test_table_handles_no_results() {
        let output = format_jobs(&[], OutputFormat::Table).unwrap();
        assert_eq!(output, "No results found.");
    }

    #[test]
    fn test_json_uses_wire_field_names() {
        let output = format_jobs(&[record()], OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["Title"], "Backend Engineer");
        assert_eq!(parsed[0]["Company"], "Acme");
        assert_eq!(parsed[0]["source"], "wuzzuf");
    }

    #[test]
    fn test_csv_emits_header_and_row() {
        let output = format_jobs(&[record()], OutputFormat::Csv).unwrap();
        let mut lines = output.lines();
        assert_eq!(
            lines.next().unwrap(),
            "title,company,location,date,description,url,source"
        );
        assert!(lines.next().unwrap().starts_with("Backend Engineer,Acme,Remote"));
    }

    #[test]
    fn test_csv_blanks_absent_fields() {
        let mut job = record();
        job.location = None;
        job.url = None;
        let output = format_jobs(&[job], OutputFormat::Csv).unwrap();
        assert!(output.lines().nth(1).unwrap().contains("Backend Engineer,Acme,,"));
    }
}
