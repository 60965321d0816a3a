// In-memory implementation of PerformanceLogStore.
//
// Mirrors the SQLite store's contract (ids increase and are never reused,
// listings are oldest first) so the service can be exercised without a
// database.

use crate::core::performance::{
    NewPerformanceLog, PerformanceLogEntry, PerformanceLogError, PerformanceLogStore,
};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

pub struct InMemoryPerformanceLogStore {
    /// Maps entry id -> entry
    entries: DashMap<i64, PerformanceLogEntry>,
    /// Last id handed out; AUTOINCREMENT semantics
    last_id: AtomicI64,
}

impl InMemoryPerformanceLogStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            last_id: AtomicI64::new(0),
        }
    }
}

impl Default for InMemoryPerformanceLogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PerformanceLogStore for InMemoryPerformanceLogStore {
    async fn insert(&self, entry: NewPerformanceLog) -> Result<i64, PerformanceLogError> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.entries.insert(id, entry.into_entry(id));
        Ok(id)
    }

    async fn list_recent(
        &self,
        user_id: u64,
        limit: u32,
    ) -> Result<Vec<PerformanceLogEntry>, PerformanceLogError> {
        let mut matching: Vec<PerformanceLogEntry> = self
            .entries
            .iter()
            .filter(|e| e.user_id == user_id)
            .map(|e| e.value().clone())
            .collect();

        // Newest first to apply the limit, then flip for display order.
        matching.sort_by(|a, b| b.id.cmp(&a.id));
        matching.truncate(limit as usize);
        matching.reverse();
        Ok(matching)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, PerformanceLogError> {
        Ok(self.entries.remove(&id).map(|_| 1).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_log(user_id: u64, score: i64) -> NewPerformanceLog {
        NewPerformanceLog {
            user_id,
            username: "Jogador".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            score: Some(score),
            errors: None,
            note: None,
        }
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = InMemoryPerformanceLogStore::new();

        let first = store.insert(new_log(1, 1)).await.unwrap();
        let second = store.insert(new_log(1, 2)).await.unwrap();
        assert_eq!(store.delete_by_id(second).await.unwrap(), 1);

        let third = store.insert(new_log(1, 3)).await.unwrap();
        assert!(first < second);
        assert!(third > second);
    }
}
