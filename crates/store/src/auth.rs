//! The authentication provider seam.

use async_trait::async_trait;
use tokio::sync::watch;

use crate::error::AuthError;

/// The authenticated submitter's identity, as returned by the
/// provider's sign-in flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Stable identity used for the one-submission-per-user guard.
    pub email: String,
    /// Display photo URL, when the provider supplies one.
    pub photo_url: Option<String>,
}

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            photo_url: None,
        }
    }
}

/// Popup-style authentication collaborator.
///
/// Sign-in either resolves with an [`Identity`] or rejects with a
/// human-readable [`AuthError`]; on rejection the state stays
/// unauthenticated.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Run the interactive sign-in flow.
    async fn sign_in(&self) -> Result<Identity, AuthError>;

    /// Clear the current session.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// The current identity, or `None` when unauthenticated.
    fn current(&self) -> Option<Identity>;

    /// Observe authentication state changes. Drives re-evaluation of
    /// the duplicate-submission flag.
    fn watch(&self) -> watch::Receiver<Option<Identity>>;
}
