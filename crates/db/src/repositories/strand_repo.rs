//! Repository for the `strands` table.

use sqlx::PgPool;
use yarn_core::strand::Strand;
use yarn_core::types::DbId;

use crate::models::strand::StrandRow;

const COLUMNS: &str = "id, thread_id, contributor_name, content, created_at";

/// Provides create and list operations for strands.
pub struct StrandRepo;

impl StrandRepo {
    /// Insert a fully-formed strand, returning the stored row.
    pub async fn create(pool: &PgPool, strand: &Strand) -> Result<StrandRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO strands (id, thread_id, contributor_name, content, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StrandRow>(&query)
            .bind(strand.id)
            .bind(strand.thread_id)
            .bind(&strand.contributor_name)
            .bind(&strand.content)
            .bind(strand.created_at)
            .fetch_one(pool)
            .await
    }

    /// List strands for a thread in contribution order (oldest first).
    pub async fn list_by_thread(
        pool: &PgPool,
        thread_id: DbId,
    ) -> Result<Vec<StrandRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM strands
             WHERE thread_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, StrandRow>(&query)
            .bind(thread_id)
            .fetch_all(pool)
            .await
    }
}
