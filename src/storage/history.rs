//! Bounded per-token hook history

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use crate::{config::MIN_CACHE_WIDTH, types::HookRecord};

/// Shared snapshot of one token's history, oldest first.
pub type History = Vec<Arc<HookRecord>>;

/// Keeps the last `capacity` hook records for every hook token.
///
/// Appends and reads of the whole table are serialized by one `RwLock`, so a reader
/// never sees a history longer than `capacity` or a half-applied append. Reads hand
/// out cloned `Arc`s, never references into the table.
pub struct HookHistoryStore {
    capacity: usize,
    hooks: RwLock<HashMap<String, VecDeque<Arc<HookRecord>>>>,
}

impl HookHistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(MIN_CACHE_WIDTH),
            hooks: RwLock::new(HashMap::new()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends `record` to `token`'s history, evicting the oldest entries beyond capacity.
    /// Returns the history length after the append.
    pub async fn append(&self, token: &str, record: HookRecord) -> usize {
        let record = Arc::new(record);
        let mut hooks = self.hooks.write().await;
        let history = hooks
            .entry(token.to_string())
            .or_insert_with(|| VecDeque::with_capacity(self.capacity));

        history.push_back(record);
        while history.len() > self.capacity {
            history.pop_front();
        }

        debug!(hook_token = %token, retained = history.len(), "Appended hook record");
        history.len()
    }

    /// Snapshot of `token`'s history; empty for a token never seen.
    pub async fn get(&self, token: &str) -> History {
        self.hooks
            .read()
            .await
            .get(token)
            .map(|history| history.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Snapshot of every token's history, ordered by token.
    pub async fn get_all(&self) -> BTreeMap<String, History> {
        self.hooks
            .read()
            .await
            .iter()
            .map(|(token, history)| (token.clone(), history.iter().cloned().collect()))
            .collect()
    }
}

impl Default for HookHistoryStore {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_CACHE_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HookResponse;
    use proptest::prelude::*;

    fn record(token: &str, marker: i64) -> HookRecord {
        HookRecord {
            hook_token: token.to_string(),
            receive_date: marker,
            receive_date_str: String::new(),
            headers: None,
            received_body: Vec::new(),
            response_date: None,
            response_body: HookResponse { success: true, status_code: 200 },
            error: None,
        }
    }

    fn markers(history: &History) -> Vec<i64> {
        history.iter().map(|r| r.receive_date).collect()
    }

    #[tokio::test]
    async fn unknown_token_yields_empty_history() {
        let store = HookHistoryStore::new(3);
        assert!(store.get("nonexistent").await.is_empty());
        assert!(store.get_all().await.is_empty());
    }

    #[tokio::test]
    async fn keeps_last_records_in_arrival_order() {
        let store = HookHistoryStore::new(3);
        for marker in 1..=5 {
            store.append("abc", record("abc", marker)).await;
        }
        assert_eq!(markers(&store.get("abc").await), vec![3, 4, 5]);
    }

    #[tokio::test]
    async fn tokens_are_isolated() {
        let store = HookHistoryStore::new(2);
        store.append("a", record("a", 1)).await;
        store.append("b", record("b", 10)).await;
        store.append("a", record("a", 2)).await;
        store.append("a", record("a", 3)).await;

        assert_eq!(markers(&store.get("a").await), vec![2, 3]);
        assert_eq!(markers(&store.get("b").await), vec![10]);
    }

    #[tokio::test]
    async fn empty_token_is_a_regular_bucket() {
        let store = HookHistoryStore::default();
        store.append("", record("", 1)).await;

        let all = store.get_all().await;
        assert_eq!(all.keys().cloned().collect::<Vec<_>>(), vec![String::new()]);
        assert_eq!(store.get("").await.len(), 1);
    }

    #[tokio::test]
    async fn snapshot_is_unaffected_by_later_appends() {
        let store = HookHistoryStore::new(2);
        store.append("abc", record("abc", 1)).await;
        let snapshot = store.get("abc").await;

        store.append("abc", record("abc", 2)).await;
        store.append("abc", record("abc", 3)).await;

        assert_eq!(markers(&snapshot), vec![1]);
        assert_eq!(markers(&store.get("abc").await), vec![2, 3]);
    }

    #[test]
    fn zero_capacity_is_raised_to_minimum() {
        assert_eq!(HookHistoryStore::new(0).capacity(), MIN_CACHE_WIDTH);
    }

    proptest! {
        #[test]
        fn history_never_exceeds_capacity(capacity in 1usize..20, appends in 0usize..60) {
            let store = HookHistoryStore::new(capacity);
            let history = tokio_test::block_on(async {
                for marker in 0..appends {
                    let len = store.append("key", record("key", marker as i64)).await;
                    assert!(len <= capacity);
                }
                store.get("key").await
            });

            let expected: Vec<i64> = (appends.saturating_sub(capacity)..appends)
                .map(|m| m as i64)
                .collect();
            prop_assert_eq!(markers(&history), expected);
        }
    }
}
