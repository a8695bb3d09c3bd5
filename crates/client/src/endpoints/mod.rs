//! HTTP endpoint implementations for the aggregation service.

mod search;

pub use search::search_jobs;
