//! Remote store error model.

use thiserror::Error;

/// Result type used for remote store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure taxonomy of the remote product store.
///
/// The query and aggregation engines never raise these - they are pure and
/// total over well-formed input. Store failures are surfaced to the consumer
/// as a notification and the view falls back to its last-known snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Transport or connectivity failure (DNS, refused connection, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status outside the mapped cases.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The server rejected the submitted payload.
    #[error("validation rejected: {0}")]
    Validation(String),

    /// The referenced id does not exist on the server.
    #[error("not found")]
    NotFound,
}

impl StoreError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// True when the failure means the resource is already gone, which the
    /// idempotent delete path treats as success.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
