//! Action protocol for async search handling.
//!
//! Actions flow through a channel from spawned tasks back to the state
//! owner, where they trigger state transitions. Completion actions carry
//! the sequence number of the submission that produced them so the state
//! owner can discard results from superseded submissions.

use harvest_client::{ClientError, JobRecord};

/// Result messages delivered to the controller's event loop.
#[derive(Debug, Clone)]
pub enum Action {
    /// A search attempt settled.
    SearchComplete {
        /// Sequence number of the submission this outcome belongs to.
        seq: u64,
        /// Listings in server order, or the classified failure.
        outcome: Result<Vec<JobRecord>, ClientError>,
    },
}
