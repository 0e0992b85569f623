//! Live, chronologically sorted view of the stored responses.

use survey_core::response::SurveyResponse;
use survey_store::store::{ResponseMap, ResponseStore};
use tokio::sync::watch;

/// Holds the store subscription for the lifetime of a viewing session
/// and derives the sorted view on demand.
///
/// The receiver always carries the complete current snapshot; the
/// sorted view is computed fresh on every access and never mutates
/// the underlying mapping. Dropping the aggregator unsubscribes.
pub struct ResponseAggregator {
    snapshots: watch::Receiver<ResponseMap>,
}

impl ResponseAggregator {
    pub fn new(store: &dyn ResponseStore) -> Self {
        Self {
            snapshots: store.subscribe(),
        }
    }

    /// All responses, oldest first.
    ///
    /// Timestamps were parsed from the wire at decode time; ties keep
    /// the store's key order (the sort is stable).
    pub fn sorted(&self) -> Vec<SurveyResponse> {
        let mut list: Vec<SurveyResponse> = self.snapshots.borrow().values().cloned().collect();
        list.sort_by_key(|r| r.timestamp);
        list
    }

    /// Number of responses in the current snapshot.
    pub fn len(&self) -> usize {
        self.snapshots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.borrow().is_empty()
    }

    /// Wait for the next snapshot delivery.
    ///
    /// Returns `false` if the store side shut down; the last-known
    /// snapshot stays readable rather than clearing the view.
    pub async fn changed(&mut self) -> bool {
        match self.snapshots.changed().await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "response subscription closed; keeping last snapshot");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use survey_core::draft::Draft;
    use survey_store::memory::MemoryStore;

    use super::*;

    fn record(day: u32) -> SurveyResponse {
        let ts = Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap();
        SurveyResponse::from_draft(&Draft::default(), ts, None)
    }

    #[tokio::test]
    async fn sorted_view_is_ascending_regardless_of_append_order() {
        let store = MemoryStore::new();
        let aggregator = ResponseAggregator::new(&store);

        store.append(&record(2)).await.unwrap();
        store.append(&record(1)).await.unwrap();
        store.append(&record(3)).await.unwrap();

        let sorted = aggregator.sorted();
        assert_eq!(sorted.len(), 3);
        assert!(sorted.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        assert_eq!(sorted[0].timestamp.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[tokio::test]
    async fn view_updates_as_snapshots_arrive() {
        let store = MemoryStore::new();
        let mut aggregator = ResponseAggregator::new(&store);
        assert!(aggregator.is_empty());

        store.append(&record(1)).await.unwrap();
        assert!(aggregator.changed().await);
        assert_eq!(aggregator.len(), 1);
    }

    #[tokio::test]
    async fn closed_store_keeps_last_snapshot() {
        let store = MemoryStore::new();
        store.append(&record(1)).await.unwrap();

        let mut aggregator = ResponseAggregator::new(&store);
        drop(store);

        assert!(!aggregator.changed().await);
        assert_eq!(aggregator.sorted().len(), 1);
    }
}
