//! Fetch error model.

use thiserror::Error;

/// Result type used across the fetch boundary.
pub type FetchResult<T> = Result<T, FetchError>;

/// Failure of a product fetch.
///
/// Callers that only display the failure can rely on `Display`; callers
/// that need to branch can match on the kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The outbound call failed: timeout, refused connection, non-2xx status.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
