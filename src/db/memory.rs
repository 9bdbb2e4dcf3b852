//! In-memory signal store for tests and storeless development runs.

use crate::db::{SignalStore, StoreError};
use crate::models::{Signal, SignalRecord};
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct MemorySignalStore {
    signals: Mutex<Vec<Signal>>,
    next_id: AtomicI64,
}

impl MemorySignalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SignalStore for MemorySignalStore {
    async fn save(&self, record: &SignalRecord) -> Result<i64, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut signals = self.signals.lock().await;
        signals.push(record.clone().into_signal(id));
        Ok(id)
    }

    async fn query_recent(&self, limit: usize) -> Result<Vec<Signal>, StoreError> {
        let signals = self.signals.lock().await;
        let mut all: Vec<Signal> = signals.clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all.truncate(limit);
        Ok(all)
    }

    async fn query_by_min_strength(
        &self,
        min_strength: u8,
        limit: usize,
    ) -> Result<Vec<Signal>, StoreError> {
        let signals = self.signals.lock().await;
        let mut matching: Vec<Signal> = signals
            .iter()
            .filter(|s| s.strength >= min_strength)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching.truncate(limit);
        Ok(matching)
    }
}
