//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish
//!   failure modes.
//! - Map search failure messages and store errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (messages are rendered where they occur).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use harvest_app::MSG_BLANK_TITLE;
use harvest_client::error::{MSG_CONNECTIVITY, MSG_RATE_LIMITED};
use harvest_store::StoreError;

/// Structured exit codes for the harvest CLI.
///
/// These codes enable scripts to distinguish between different failure
/// modes and take appropriate action (retry, fix input, re-authenticate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Validation error - blank title; fix the input, do not retry as-is.
    ValidationError = 2,

    /// Connection error - the aggregation service is unreachable.
    ConnectionError = 3,

    /// Rate limited - back off and retry later.
    RateLimited = 4,

    /// The search settled without usable results (including "no jobs found").
    SearchFailed = 5,

    /// Authentication failure - sign in (again) before retrying.
    AuthenticationFailed = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// Map a settled search's failure message to an exit code.
    ///
    /// The search surface exposes failures as renderable messages (one
    /// state shape for all of them), so scripting granularity is recovered
    /// from the fixed message constants.
    pub fn from_failure_message(message: &str) -> Self {
        if message == MSG_BLANK_TITLE {
            ExitCode::ValidationError
        } else if message == MSG_CONNECTIVITY {
            ExitCode::ConnectionError
        } else if message == MSG_RATE_LIMITED {
            ExitCode::RateLimited
        } else {
            ExitCode::SearchFailed
        }
    }
}

impl From<&StoreError> for ExitCode {
    fn from(err: &StoreError) -> Self {
        match err {
            StoreError::NotAuthenticated => ExitCode::AuthenticationFailed,
            StoreError::ApiError { status, .. } if matches!(status, 400 | 401 | 403) => {
                ExitCode::AuthenticationFailed
            }
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait to derive an exit code from a top-level error.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        if let Some(store_err) = self.downcast_ref::<StoreError>() {
            return ExitCode::from(store_err);
        }
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harvest_app::MSG_NO_RESULTS;
    use harvest_client::error::MSG_GENERIC;

    #[test]
    fn test_failure_message_mapping() {
        assert_eq!(
            ExitCode::from_failure_message(MSG_BLANK_TITLE),
            ExitCode::ValidationError
        );
        assert_eq!(
            ExitCode::from_failure_message(MSG_CONNECTIVITY),
            ExitCode::ConnectionError
        );
        assert_eq!(
            ExitCode::from_failure_message(MSG_RATE_LIMITED),
            ExitCode::RateLimited
        );
        assert_eq!(
            ExitCode::from_failure_message(MSG_NO_RESULTS),
            ExitCode::SearchFailed
        );
        assert_eq!(
            ExitCode::from_failure_message(MSG_GENERIC),
            ExitCode::SearchFailed
        );
    }

    #[test]
    fn test_store_error_mapping() {
        assert_eq!(
            ExitCode::from(&StoreError::NotAuthenticated),
            ExitCode::AuthenticationFailed
        );
        assert_eq!(
            ExitCode::from(&StoreError::ApiError {
                status: 401,
                message: "bad token".to_string()
            }),
            ExitCode::AuthenticationFailed
        );
        assert_eq!(
            ExitCode::from(&StoreError::ApiError {
                status: 500,
                message: "boom".to_string()
            }),
            ExitCode::GeneralError
        );
    }
}
