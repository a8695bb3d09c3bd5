//! Store client: identity and record persistence for Job Harvest.
//!
//! The store is the external collaborator holding user identities and
//! durable records (saved jobs, user profiles). This crate wraps its REST
//! surface: token-based auth under `/auth/v1` and PostgREST-style record
//! access under `/rest/v1`. Store errors are a taxonomy of their own and
//! are intentionally kept out of the search error mapping.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod session;

pub use client::{StoreClient, StoreClientBuilder};
pub use error::{Result, StoreError};
pub use models::{AuthSession, NewSavedJob, ProfileRecord, SavedJob, UserIdentity};
pub use session::SessionState;
