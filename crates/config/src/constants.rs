//! Centralized constants for the Job Harvest workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Search Service Defaults
// =============================================================================

/// Default base URL of the job aggregation service.
pub const DEFAULT_SEARCH_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default search request timeout in seconds.
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;

/// Maximum allowed search request timeout in seconds (5 minutes).
pub const MAX_SEARCH_TIMEOUT_SECS: u64 = 300;

// =============================================================================
// Store (identity + persistence) Defaults
// =============================================================================

/// Default base URL of the store service (local development stack).
pub const DEFAULT_STORE_BASE_URL: &str = "http://127.0.0.1:54321";

// =============================================================================
// Environment Variables
// =============================================================================

/// Base URL of the job aggregation service.
pub const ENV_API_URL: &str = "HARVEST_API_URL";

/// Search request timeout in seconds.
pub const ENV_TIMEOUT: &str = "HARVEST_TIMEOUT";

/// Base URL of the store service.
pub const ENV_STORE_URL: &str = "HARVEST_STORE_URL";

/// Publishable (anon) API key for the store service.
pub const ENV_STORE_KEY: &str = "HARVEST_STORE_KEY";

/// Email used for identity operations.
pub const ENV_EMAIL: &str = "HARVEST_EMAIL";

/// Password used for identity operations.
pub const ENV_PASSWORD: &str = "HARVEST_PASSWORD";

/// Overrides the directory holding the persisted session file.
pub const ENV_CONFIG_DIR: &str = "HARVEST_CONFIG_DIR";

// =============================================================================
// Session Persistence
// =============================================================================

/// File name of the persisted session inside the config directory.
pub const SESSION_FILE_NAME: &str = "session.json";
