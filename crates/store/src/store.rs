//! The remote record store seam.

use std::collections::BTreeMap;

use async_trait::async_trait;
use survey_core::response::SurveyResponse;
use survey_core::types::ResponseKey;
use tokio::sync::watch;

use crate::error::StoreError;

/// The store's full key→record mapping, as delivered by snapshots and
/// subscriptions. Keys are the store's append-assigned identifiers.
pub type ResponseMap = BTreeMap<ResponseKey, SurveyResponse>;

/// An append-only collection of survey responses hosted by a remote
/// real-time data store.
///
/// Records are immutable once written; there is no update or delete
/// path. Subscriptions are long-lived and deliver the complete current
/// snapshot on every underlying change, not incremental diffs —
/// dropping the receiver unsubscribes.
#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Durably append one record, resolving with its new key.
    ///
    /// Atomic at single-record granularity: the record is either fully
    /// written or not written at all.
    async fn append(&self, record: &SurveyResponse) -> Result<ResponseKey, StoreError>;

    /// Read the full current key→record mapping once.
    async fn snapshot(&self) -> Result<ResponseMap, StoreError>;

    /// Subscribe to the full collection. The receiver always holds the
    /// latest complete snapshot.
    fn subscribe(&self) -> watch::Receiver<ResponseMap>;

    /// Records whose `userEmail` equals `email` — the duplicate-check
    /// query.
    async fn find_by_submitter(&self, email: &str) -> Result<Vec<SurveyResponse>, StoreError>;
}
