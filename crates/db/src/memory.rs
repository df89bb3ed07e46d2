//! In-process implementation of the store ports.
//!
//! Records live in two vectors behind a `tokio` read/write lock. Each insert
//! takes the write lock once, so a record is either fully visible or absent.
//! Nothing survives a restart.

use std::cmp::Reverse;

use async_trait::async_trait;
use tokio::sync::RwLock;
use yarn_core::store::{Store, StoreError, StrandStore, ThreadStore};
use yarn_core::strand::Strand;
use yarn_core::thread::Thread;
use yarn_core::types::DbId;

#[derive(Default)]
struct Records {
    threads: Vec<Thread>,
    strands: Vec<Strand>,
}

/// Store handle holding every record in memory.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Records>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn thread_count(&self) -> usize {
        self.records.read().await.threads.len()
    }

    pub async fn strand_count(&self) -> usize {
        self.records.read().await.strands.len()
    }
}

#[async_trait]
impl ThreadStore for MemoryStore {
    async fn list_threads(&self) -> Result<Vec<Thread>, StoreError> {
        let mut threads = self.records.read().await.threads.clone();
        threads.sort_by_key(|t| Reverse((t.created_at, t.id)));
        Ok(threads)
    }

    async fn find_thread(&self, id: DbId) -> Result<Option<Thread>, StoreError> {
        let records = self.records.read().await;
        Ok(records.threads.iter().find(|t| t.id == id).cloned())
    }

    async fn insert_thread(&self, thread: &Thread) -> Result<Thread, StoreError> {
        self.records.write().await.threads.push(thread.clone());
        tracing::debug!(thread_id = %thread.id, "Thread stored in memory");
        Ok(thread.clone())
    }
}

#[async_trait]
impl StrandStore for MemoryStore {
    async fn list_strands_for_thread(&self, thread_id: DbId) -> Result<Vec<Strand>, StoreError> {
        let mut strands: Vec<Strand> = self
            .records
            .read()
            .await
            .strands
            .iter()
            .filter(|s| s.thread_id == thread_id)
            .cloned()
            .collect();
        strands.sort_by_key(|s| (s.created_at, s.id));
        Ok(strands)
    }

    async fn insert_strand(&self, strand: &Strand) -> Result<Strand, StoreError> {
        self.records.write().await.strands.push(strand.clone());
        tracing::debug!(strand_id = %strand.id, thread_id = %strand.thread_id, "Strand stored in memory");
        Ok(strand.clone())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
