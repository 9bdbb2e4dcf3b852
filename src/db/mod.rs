//! Append-only signal persistence.
//!
//! The engine never updates or deletes a signal, so the store contract is
//! save plus two recency queries. One production backend (QuestDB) and one
//! in-memory backend for tests.

pub mod memory;
pub mod questdb;

pub use memory::MemorySignalStore;
pub use questdb::QuestDatabase;

use crate::models::{Signal, SignalRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection not available")]
    NotConnected,

    #[error(transparent)]
    Postgres(#[from] tokio_postgres::Error),
}

#[async_trait::async_trait]
pub trait SignalStore: Send + Sync {
    /// Append one signal atomically and return its id.
    async fn save(&self, record: &SignalRecord) -> Result<i64, StoreError>;

    /// Most recent signals first, truncated to `limit`.
    async fn query_recent(&self, limit: usize) -> Result<Vec<Signal>, StoreError>;

    /// Most recent signals with `strength >= min_strength`, truncated to
    /// `limit`.
    async fn query_by_min_strength(
        &self,
        min_strength: u8,
        limit: usize,
    ) -> Result<Vec<Signal>, StoreError>;
}
