//! Repository for the `threads` table.

use sqlx::PgPool;
use yarn_core::thread::Thread;
use yarn_core::types::DbId;

use crate::models::thread::ThreadRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, tags, created_at";

/// Provides create and read operations for threads.
pub struct ThreadRepo;

impl ThreadRepo {
    /// Insert a fully-formed thread, returning the stored row.
    pub async fn create(pool: &PgPool, thread: &Thread) -> Result<ThreadRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO threads (id, title, description, tags, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ThreadRow>(&query)
            .bind(thread.id)
            .bind(&thread.title)
            .bind(&thread.description)
            .bind(&thread.tags)
            .bind(thread.created_at)
            .fetch_one(pool)
            .await
    }

    /// Find a thread by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ThreadRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM threads WHERE id = $1");
        sqlx::query_as::<_, ThreadRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all threads, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ThreadRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM threads ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, ThreadRow>(&query).fetch_all(pool).await
    }
}
