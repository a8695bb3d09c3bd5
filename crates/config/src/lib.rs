//! Configuration management for Job Harvest.
//!
//! This crate provides types and loaders for the search-service and store
//! connection settings, read from environment variables and an optional
//! `.env` file, plus on-disk persistence of the signed-in session.

pub mod constants;
mod loader;
pub mod session;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use session::{PersistedSession, SessionFile};
pub use types::{Config, Credentials, SearchServiceConfig, StoreConfig};
