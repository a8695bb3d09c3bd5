//! Fire-and-forget persistence of displayed listings.
//!
//! Saving is a side flow, independent of the search lifecycle: the write
//! is spawned, failures are logged and never surfaced to the user, and
//! nothing is retried. From the UI's perspective a save is "attempted",
//! not "confirmed". Gate-keeping (only offering Save to a signed-in user)
//! is the presentation layer's job; this adapter just needs the caller's
//! opaque user id.

use std::sync::Arc;

use tokio::task::JoinHandle;

use harvest_client::JobRecord;
use harvest_store::{NewSavedJob, StoreClient};

/// Persist one displayed listing for `user_id`, best-effort.
///
/// The record is built from the listing at the moment of the call and not
/// retained. Returns the spawned task's handle so a one-shot process can
/// wait for the attempt to finish before exiting; event-loop consumers
/// just drop it.
pub fn handle_save_job(
    store: Arc<StoreClient>,
    job: &JobRecord,
    user_id: &str,
) -> JoinHandle<()> {
    let record = NewSavedJob {
        user_id: user_id.to_string(),
        job_title: job.title.clone(),
        company: job.company.clone(),
        location: job.location.clone(),
        description: job.description.clone(),
        url: job.url.clone(),
    };

    tokio::spawn(async move {
        if let Err(e) = store.insert_saved_job(&record).await {
            tracing::error!(
                error = %e,
                job_title = %record.job_title,
                "Error saving job"
            );
        }
    })
}
