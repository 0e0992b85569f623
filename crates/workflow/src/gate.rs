//! Identity gate: authentication state plus the duplicate-submission
//! flag derived from the store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use survey_store::auth::{AuthProvider, Identity};
use survey_store::error::{AuthError, StoreError};
use survey_store::store::ResponseStore;

/// Wraps the authentication provider and exposes, alongside the
/// current identity, a cached "already submitted" flag computed by
/// querying the store for records with the identity's email.
///
/// The flag is re-evaluated on every authentication state change and
/// marked directly after a successful submit. It is a soft,
/// best-effort guard: the store enforces no uniqueness constraint, so
/// two rapid submits from one identity can race ahead of the flag
/// update. That matches the observed behavior of the hosted store.
pub struct IdentityGate {
    auth: Arc<dyn AuthProvider>,
    store: Arc<dyn ResponseStore>,
    submitted: AtomicBool,
}

impl IdentityGate {
    pub fn new(auth: Arc<dyn AuthProvider>, store: Arc<dyn ResponseStore>) -> Self {
        Self {
            auth,
            store,
            submitted: AtomicBool::new(false),
        }
    }

    /// Run the provider's sign-in flow, then re-evaluate the duplicate
    /// flag for the new identity.
    ///
    /// On provider rejection the error's textual message is surfaced
    /// and the state stays unauthenticated.
    pub async fn sign_in(&self) -> Result<Identity, AuthError> {
        let identity = self.auth.sign_in().await?;
        if let Err(err) = self.refresh().await {
            // Keep the previous flag; the next refresh will retry.
            tracing::warn!(error = %err, "duplicate check failed after sign-in");
        }
        Ok(identity)
    }

    /// Clear the session and the cached duplicate flag.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.auth.sign_out().await?;
        self.submitted.store(false, Ordering::SeqCst);
        Ok(())
    }

    /// The current identity, or `None` when unauthenticated.
    pub fn identity(&self) -> Option<Identity> {
        self.auth.current()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }

    /// The cached duplicate flag: true when the current identity
    /// already has a stored response.
    pub fn has_submitted(&self) -> bool {
        self.submitted.load(Ordering::SeqCst)
    }

    /// Recompute the duplicate flag by querying the store for the
    /// current identity. Unauthenticated sessions always read `false`.
    pub async fn refresh(&self) -> Result<bool, StoreError> {
        let flag = match self.identity() {
            Some(identity) => !self
                .store
                .find_by_submitter(&identity.email)
                .await?
                .is_empty(),
            None => false,
        };
        self.submitted.store(flag, Ordering::SeqCst);
        Ok(flag)
    }

    /// Mark the flag after a successful write, ahead of the store
    /// subscription catching up.
    pub(crate) fn mark_submitted(&self) {
        self.submitted.store(true, Ordering::SeqCst);
    }
}
