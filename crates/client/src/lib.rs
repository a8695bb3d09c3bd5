//! Job aggregation service client.
//!
//! This crate provides a type-safe client for the job aggregation service,
//! which fans a query out to multiple job portals and returns one unified
//! batch of listings. Transport failures are classified into a closed error
//! taxonomy at this boundary; raw `reqwest` errors never escape.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::JobSearchClient;
pub use client::builder::JobSearchClientBuilder;
pub use error::{ClientError, Result};
pub use models::{JobRecord, JobSearchResponse};
