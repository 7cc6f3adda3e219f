//! Shared fixtures for the integration suites.

use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use platform_db::{DbPool, connect_url};

/// Fresh, fully migrated in-memory database.
///
/// Every SQLite `:memory:` connection is its own database, so the pool is
/// pinned to a single connection.
pub async fn migrated_memory_db() -> Result<DbPool> {
    let pool = connect_url("sqlite::memory:", 1)
        .await
        .context("failed to open in-memory sqlite")?;
    Migrator::up(&pool, None)
        .await
        .context("failed to run migrations")?;
    Ok(pool)
}
