//! Store ports.
//!
//! Persistence adapters implement these traits; the core operations in
//! [`crate::thread`] and [`crate::strand`] only ever talk to them. A store
//! must make each insert visible atomically: once `insert_*` returns, the
//! record is either fully readable or was never written.

use async_trait::async_trait;

use crate::strand::Strand;
use crate::thread::Thread;
use crate::types::DbId;

/// Error raised by a persistence backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Any other backend error, kept intact so its message reaches the caller.
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StoreError::Backend(Box::new(err))
    }
}

/// Thread persistence.
#[async_trait]
pub trait ThreadStore: Send + Sync {
    /// All threads, newest `created_at` first.
    async fn list_threads(&self) -> Result<Vec<Thread>, StoreError>;

    async fn find_thread(&self, id: DbId) -> Result<Option<Thread>, StoreError>;

    /// Persist a fully-formed thread and return it as stored.
    async fn insert_thread(&self, thread: &Thread) -> Result<Thread, StoreError>;
}

/// Strand persistence.
#[async_trait]
pub trait StrandStore: Send + Sync {
    /// Strands belonging to `thread_id`, oldest `created_at` first.
    async fn list_strands_for_thread(&self, thread_id: DbId) -> Result<Vec<Strand>, StoreError>;

    async fn insert_strand(&self, strand: &Strand) -> Result<Strand, StoreError>;
}

/// A complete backend: both record collections plus a liveness probe.
#[async_trait]
pub trait Store: ThreadStore + StrandStore {
    async fn health_check(&self) -> Result<(), StoreError>;
}
