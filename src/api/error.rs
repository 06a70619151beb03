//! Error types for the characters API client.

use thiserror::Error;

/// Errors that can occur while fetching the character list.
///
/// The controller collapses every variant to its display string before
/// storing it in the observable state; the structure only exists at the
/// client boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure reaching the API.
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("Unexpected status {status} from characters endpoint")]
    UnexpectedStatus { status: u16 },

    /// The response body was not the expected JSON array.
    #[error("Failed to decode character list: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}
