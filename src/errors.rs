//! Error types for the reevit-rs library.
//!
//! Every SDK method returns [`Result`]; failures propagate synchronously to
//! the caller. The SDK never retries.

use serde_json::Value;
use thiserror::Error;

/// Main error type for Reevit API operations.
#[derive(Error, Debug)]
pub enum ReevitError {
    /// Transport-level failure: DNS, connect refusal, TLS, timeout.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered with a non-2xx status.
    ///
    /// `body` is the parsed JSON error body when the server sent one, or the
    /// raw response text wrapped in a JSON string otherwise.
    #[error("API error (status {status}): {body}")]
    Api {
        /// HTTP status code of the failed response
        status: u16,
        /// Response body, parsed as JSON where possible
        body: Value,
    },
}

impl ReevitError {
    /// HTTP status code for [`ReevitError::Api`] errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ReevitError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for Reevit API operations.
pub type Result<T> = std::result::Result<T, ReevitError>;
