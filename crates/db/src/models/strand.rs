//! Row mapping for the `strands` table.

use sqlx::FromRow;
use yarn_core::strand::Strand;
use yarn_core::types::{DbId, Timestamp};

/// A row from the `strands` table.
#[derive(Debug, Clone, FromRow)]
pub struct StrandRow {
    pub id: DbId,
    pub thread_id: DbId,
    pub contributor_name: String,
    pub content: String,
    pub created_at: Timestamp,
}

impl From<StrandRow> for Strand {
    fn from(row: StrandRow) -> Self {
        Strand {
            id: row.id,
            thread_id: row.thread_id,
            contributor_name: row.contributor_name,
            content: row.content,
            created_at: row.created_at,
        }
    }
}
