//! Search lifecycle core for Job Harvest.
//!
//! This crate owns the query lifecycle state machine bridging user input,
//! the aggregation service client and whatever renders the result. It is
//! deliberately transport-free: all I/O goes through the client and store
//! crates, and results come back over an action channel in the same shape
//! a UI event loop would consume.

pub mod action;
pub mod controller;
pub mod save;
pub mod state;

pub use action::Action;
pub use controller::{SearchController, resolve_search_outcome};
pub use save::handle_save_job;
pub use state::{MSG_BLANK_TITLE, MSG_NO_RESULTS, Query, SearchState};
