//! Search lifecycle state.

use harvest_client::JobRecord;

/// Message shown when a query is submitted with a blank title.
pub const MSG_BLANK_TITLE: &str = "Please enter a job title";

/// Message shown when a search succeeds with zero results.
pub const MSG_NO_RESULTS: &str = "No jobs found. Try different search terms.";

/// A user-entered search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Job title; must be non-blank after trimming to reach the network.
    pub title: String,
    /// Optional location; empty means "anywhere".
    pub location: String,
}

impl Query {
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
        }
    }
}

/// The search surface's lifecycle state.
///
/// Exactly one variant is active at a time. Transitions form a cycle:
/// `Idle|Ready|Failed --submit--> Loading --success--> Ready`,
/// `Loading --failure--> Failed`. Zero-result searches land in `Failed`
/// with [`MSG_NO_RESULTS`]: same shape as transport failures,
/// distinguishable only by message content.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// No search has been submitted yet.
    Idle,
    /// A query is in flight.
    Loading,
    /// The last search settled with listings, in server response order.
    Ready { results: Vec<JobRecord> },
    /// The last submission settled with a renderable message.
    Failed { message: String },
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    /// The listings, when the last search settled successfully.
    pub fn results(&self) -> Option<&[JobRecord]> {
        match self {
            SearchState::Ready { results } => Some(results),
            _ => None,
        }
    }

    /// The failure message, when the last submission failed.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            SearchState::Failed { message } => Some(message),
            _ => None,
        }
    }
}
