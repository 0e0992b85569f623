//! Error types for the store and authentication collaborators.

/// A failure reported by the remote record store.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// An append was rejected; the record was not written.
    #[error("store write failed: {0}")]
    Write(String),

    /// A snapshot or query read failed.
    #[error("store read failed: {0}")]
    Read(String),
}

/// A failure reported by the authentication provider, carrying the
/// provider's human-readable message.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
