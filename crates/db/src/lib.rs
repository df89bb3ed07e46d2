//! Persistence adapters for the core store ports.
//!
//! - [`PgStore`]: PostgreSQL via `sqlx`, the production backend.
//! - [`MemoryStore`]: in-process collections, used in tests and when no
//!   database is configured.

pub mod memory;
pub mod models;
pub mod pg_store;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub use memory::MemoryStore;
pub use pg_store::PgStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations under `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
