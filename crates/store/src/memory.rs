//! In-memory reference implementations of the collaborator seams.
//!
//! [`MemoryStore`] mirrors the hosted store's observable behavior:
//! append-assigned keys, full-snapshot subscriptions, field-equals
//! queries. [`MemoryAuth`] plays the popup provider, optionally
//! configured to reject sign-in for failure-path tests.

use async_trait::async_trait;
use survey_core::response::SurveyResponse;
use survey_core::types::ResponseKey;
use tokio::sync::{watch, RwLock};
use uuid::Uuid;

use crate::auth::{AuthProvider, Identity};
use crate::config::StoreConfig;
use crate::error::{AuthError, StoreError};
use crate::store::{ResponseMap, ResponseStore};

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory response collection with watch-based snapshot fan-out.
///
/// Keys are UUIDv7 strings — time-ordered, standing in for the hosted
/// store's push identifiers.
pub struct MemoryStore {
    collection: String,
    records: RwLock<ResponseMap>,
    snapshots: watch::Sender<ResponseMap>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let (snapshots, _) = watch::channel(ResponseMap::new());
        Self {
            collection: "responses".into(),
            records: RwLock::new(ResponseMap::new()),
            snapshots,
        }
    }

    /// Build a store bound to the configured collection path.
    pub fn with_config(config: &StoreConfig) -> Self {
        let mut store = Self::new();
        store.collection = config.collection.clone();
        store
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseStore for MemoryStore {
    async fn append(&self, record: &SurveyResponse) -> Result<ResponseKey, StoreError> {
        let key = Uuid::now_v7().to_string();
        let mut records = self.records.write().await;
        records.insert(key.clone(), record.clone());
        // Fan out the complete new snapshot; send_replace never fails,
        // even with zero subscribers.
        self.snapshots.send_replace(records.clone());
        tracing::debug!(collection = %self.collection, key = %key, "record appended");
        Ok(key)
    }

    async fn snapshot(&self) -> Result<ResponseMap, StoreError> {
        Ok(self.records.read().await.clone())
    }

    fn subscribe(&self) -> watch::Receiver<ResponseMap> {
        self.snapshots.subscribe()
    }

    async fn find_by_submitter(&self, email: &str) -> Result<Vec<SurveyResponse>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|r| r.user_email.as_deref() == Some(email))
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// MemoryAuth
// ---------------------------------------------------------------------------

/// In-memory authentication provider.
///
/// Holds one configured identity; `sign_in` either establishes it or,
/// when built with [`MemoryAuth::denying`], rejects with the given
/// message and leaves the state unauthenticated.
pub struct MemoryAuth {
    identity: Identity,
    deny: Option<String>,
    state: watch::Sender<Option<Identity>>,
}

impl MemoryAuth {
    pub fn new(identity: Identity) -> Self {
        let (state, _) = watch::channel(None);
        Self {
            identity,
            deny: None,
            state,
        }
    }

    /// A provider that rejects every sign-in with `message`.
    pub fn denying(message: impl Into<String>) -> Self {
        let mut auth = Self::new(Identity::new("denied@example.com"));
        auth.deny = Some(message.into());
        auth
    }
}

#[async_trait]
impl AuthProvider for MemoryAuth {
    async fn sign_in(&self) -> Result<Identity, AuthError> {
        if let Some(message) = &self.deny {
            return Err(AuthError::new(message.clone()));
        }
        self.state.send_replace(Some(self.identity.clone()));
        Ok(self.identity.clone())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.state.send_replace(None);
        Ok(())
    }

    fn current(&self) -> Option<Identity> {
        self.state.borrow().clone()
    }

    fn watch(&self) -> watch::Receiver<Option<Identity>> {
        self.state.subscribe()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
