//! PostgreSQL implementation of the store ports.

use async_trait::async_trait;
use yarn_core::store::{Store, StoreError, StrandStore, ThreadStore};
use yarn_core::strand::Strand;
use yarn_core::thread::Thread;
use yarn_core::types::DbId;

use crate::repositories::{StrandRepo, ThreadRepo};
use crate::DbPool;

/// Store handle backed by a `sqlx` connection pool. Cheap to clone.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn store_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            tracing::error!(error = %err, "Database pool unavailable");
            StoreError::Unavailable(err.to_string())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            StoreError::backend(other)
        }
    }
}

#[async_trait]
impl ThreadStore for PgStore {
    async fn list_threads(&self) -> Result<Vec<Thread>, StoreError> {
        let rows = ThreadRepo::list(&self.pool).await.map_err(store_error)?;
        Ok(rows.into_iter().map(Thread::from).collect())
    }

    async fn find_thread(&self, id: DbId) -> Result<Option<Thread>, StoreError> {
        let row = ThreadRepo::find_by_id(&self.pool, id)
            .await
            .map_err(store_error)?;
        Ok(row.map(Thread::from))
    }

    async fn insert_thread(&self, thread: &Thread) -> Result<Thread, StoreError> {
        let row = ThreadRepo::create(&self.pool, thread)
            .await
            .map_err(store_error)?;
        Ok(row.into())
    }
}

#[async_trait]
impl StrandStore for PgStore {
    async fn list_strands_for_thread(&self, thread_id: DbId) -> Result<Vec<Strand>, StoreError> {
        let rows = StrandRepo::list_by_thread(&self.pool, thread_id)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(Strand::from).collect())
    }

    async fn insert_strand(&self, strand: &Strand) -> Result<Strand, StoreError> {
        let row = StrandRepo::create(&self.pool, strand)
            .await
            .map_err(store_error)?;
        Ok(row.into())
    }
}

#[async_trait]
impl Store for PgStore {
    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await.map_err(store_error)
    }
}
