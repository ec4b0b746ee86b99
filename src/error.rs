//! Error types for remote lookups.

use thiserror::Error;

/// Transport-level failure on one of the remote calls.
///
/// Misses (no geocode candidate, no containing polygon) are not errors; they
/// come back as `None` from the client methods.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request could not be completed (connection failure, timeout,
    /// unreadable body).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{url} responded with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

impl LookupError {
    pub(crate) fn request(url: &str, source: reqwest::Error) -> Self {
        Self::Request {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn status(url: &str, status: reqwest::StatusCode) -> Self {
        Self::Status {
            url: url.to_string(),
            status,
        }
    }
}
