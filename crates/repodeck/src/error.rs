//! Error types for the repodeck UI.

use thiserror::Error;

/// Errors surfaced by the backend client.
///
/// Every variant's display text doubles as the user-facing status message,
/// so the wording stays plain.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend answered with a failure status. The message is either the
    /// `error` field of the JSON body or a templated fallback.
    #[error("{0}")]
    Backend(String),
    /// The request never produced a response (network failure, CORS, DNS).
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),
    /// A success response whose body could not be decoded.
    #[error("Malformed response: {0}")]
    Decode(String),
}
