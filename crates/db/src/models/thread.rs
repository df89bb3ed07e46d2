//! Row mapping for the `threads` table.

use sqlx::FromRow;
use yarn_core::thread::Thread;
use yarn_core::types::{DbId, Timestamp};

/// A row from the `threads` table.
#[derive(Debug, Clone, FromRow)]
pub struct ThreadRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
}

impl From<ThreadRow> for Thread {
    fn from(row: ThreadRow) -> Self {
        Thread {
            id: row.id,
            title: row.title,
            description: row.description,
            tags: row.tags,
            created_at: row.created_at,
        }
    }
}
