//! The search command: drive the controller end-to-end and render the
//! settled state.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use harvest_app::{Query, SearchController, SearchState, handle_save_job};
use harvest_client::{JobRecord, JobSearchClient};
use harvest_config::Config;

use crate::commands::{SIGN_IN_HINT, signed_in_store};
use crate::error::ExitCode;
use crate::formatters::{OutputFormat, format_jobs};

pub async fn run(
    config: Config,
    title: String,
    location: String,
    output: OutputFormat,
    save: Option<usize>,
) -> Result<ExitCode> {
    let client = JobSearchClient::builder().from_config(&config).build()?;

    let (tx, mut rx) = mpsc::channel(8);
    let mut controller = SearchController::new(Arc::new(client), tx);

    controller.submit(&Query::new(title, location));
    controller.settle(&mut rx).await;

    match controller.state() {
        SearchState::Ready { results } => {
            println!("{}", format_jobs(results, output)?);
            match save {
                Some(n) => save_listing(&config, results, n).await,
                None => Ok(ExitCode::Success),
            }
        }
        SearchState::Failed { message } => {
            eprintln!("{}", message);
            Ok(ExitCode::from_failure_message(message))
        }
        // A settled controller is never Idle or Loading.
        SearchState::Idle | SearchState::Loading => Ok(ExitCode::GeneralError),
    }
}

/// Fire-and-forget save of the Nth displayed listing (1-based).
async fn save_listing(config: &Config, results: &[JobRecord], n: usize) -> Result<ExitCode> {
    let Some(job) = n.checked_sub(1).and_then(|i| results.get(i)) else {
        eprintln!("--save {} is out of range (1..={})", n, results.len());
        return Ok(ExitCode::ValidationError);
    };

    let Some((store, persisted)) = signed_in_store(config)? else {
        eprintln!("{}", SIGN_IN_HINT);
        return Ok(ExitCode::AuthenticationFailed);
    };

    // Wait for the attempt so the process does not exit underneath it;
    // its outcome is still not surfaced (logged at the adapter).
    let handle = handle_save_job(Arc::new(store), job, &persisted.user_id);
    let _ = handle.await;

    println!("Save attempted: {}", job.title);
    Ok(ExitCode::Success)
}
