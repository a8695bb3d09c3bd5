//! The search controller: owns the lifecycle state and the in-flight
//! submission counter.
//!
//! Responsibilities:
//! - Validate input (blank titles never reach the network).
//! - Spawn the search call and tag it with a sequence number.
//! - Apply completion actions, discarding stale ones.
//!
//! Does NOT handle:
//! - Rendering (the state is the produced interface).
//! - Transport details (see the client crate).
//!
//! Invariants:
//! - `submit` moves the state to `Loading` synchronously for valid input.
//! - Every submission, including failed validation, bumps the sequence
//!   number, so outcomes of superseded submissions can never overwrite
//!   state produced by a later one.
//! - No automatic retry anywhere in the lifecycle.

use std::sync::Arc;

use tokio::sync::mpsc::{Receiver, Sender};

use harvest_client::{ClientError, JobRecord, JobSearchClient};

use crate::action::Action;
use crate::state::{MSG_BLANK_TITLE, MSG_NO_RESULTS, Query, SearchState};

/// Pure transition for a completed search.
///
/// Zero results are folded into the failed shape with [`MSG_NO_RESULTS`];
/// every typed client error renders through its user message.
pub fn resolve_search_outcome(outcome: Result<Vec<JobRecord>, ClientError>) -> SearchState {
    match outcome {
        Ok(results) if results.is_empty() => SearchState::Failed {
            message: MSG_NO_RESULTS.to_string(),
        },
        Ok(results) => SearchState::Ready { results },
        Err(e) => SearchState::Failed {
            message: e.user_message().to_string(),
        },
    }
}

/// Owns one search surface's state. One instance per surface; state is
/// never shared between surfaces.
pub struct SearchController {
    client: Arc<JobSearchClient>,
    tx: Sender<Action>,
    state: SearchState,
    seq: u64,
}

impl SearchController {
    /// Create a controller in the `Idle` state.
    ///
    /// Completion actions are delivered on the paired receiver of `tx`;
    /// the event loop owning that receiver feeds them back via
    /// [`SearchController::apply`].
    pub fn new(client: Arc<JobSearchClient>, tx: Sender<Action>) -> Self {
        Self {
            client,
            tx,
            state: SearchState::Idle,
            seq: 0,
        }
    }

    /// The current lifecycle state.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Submit a query.
    ///
    /// Blank titles fail validation locally and never reach the network.
    /// Valid input transitions to `Loading` before this function returns;
    /// the outcome arrives later as an [`Action::SearchComplete`].
    pub fn submit(&mut self, query: &Query) {
        self.seq += 1;

        let title = query.title.trim();
        if title.is_empty() {
            self.state = SearchState::Failed {
                message: MSG_BLANK_TITLE.to_string(),
            };
            return;
        }

        self.state = SearchState::Loading;

        let seq = self.seq;
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let title = title.to_string();
        let location = query.location.clone();

        tokio::spawn(async move {
            let outcome = client.search(&title, &location).await;
            // Receiver gone means the surface is shutting down; nothing to do.
            let _ = tx.send(Action::SearchComplete { seq, outcome }).await;
        });
    }

    /// Apply one action to the state.
    ///
    /// Completions tagged with a superseded sequence number are discarded.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SearchComplete { seq, outcome } => {
                if seq != self.seq {
                    tracing::debug!(
                        stale_seq = seq,
                        current_seq = self.seq,
                        "Discarding stale search outcome"
                    );
                    return;
                }
                self.state = resolve_search_outcome(outcome);
            }
        }
    }

    /// Drive the controller until the in-flight submission settles.
    ///
    /// Convenience for one-shot consumers (the CLI); an interactive event
    /// loop would interleave [`SearchController::apply`] with its own input
    /// handling instead.
    pub async fn settle(&mut self, rx: &mut Receiver<Action>) {
        while self.state.is_loading() {
            match rx.recv().await {
                Some(action) => self.apply(action),
                None => break,
            }
        }
    }
}
