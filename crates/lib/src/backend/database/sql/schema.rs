//! SQL schema definitions and migrations.
//!
//! # Migration System
//!
//! Migrations are code-based functions rather than SQL files. Each migration
//! receives the store and executes whatever SQL it needs.
//!
//! ## Adding a New Migration
//!
//! 1. Increment `SCHEMA_VERSION`
//! 2. Add a new `migrate_vN_to_vM` async function
//! 3. Add the migration to the match statement in `run_migration`

use crate::Result;
use crate::backend::errors::BackendError;

use super::{Sqlite, SqlxResultExt};

/// Current schema version.
///
/// Increment this when making schema changes that require migration.
pub const SCHEMA_VERSION: i64 = 1;

/// SQL statements to create the schema tables.
pub const CREATE_TABLES: &[&str] = &[
    // Schema version tracking
    "CREATE TABLE IF NOT EXISTS schema_version (
        version BIGINT PRIMARY KEY
    )",
    // Flat key-value storage; values are JSON text
    "CREATE TABLE IF NOT EXISTS kv_items (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )",
];

/// Initialize the database schema.
///
/// Creates tables if they don't exist, and handles migrations
/// if the schema version has changed.
pub async fn initialize(store: &Sqlite) -> Result<()> {
    let pool = store.pool();

    for statement in CREATE_TABLES {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| BackendError::SqlxError {
                reason: format!("Schema creation failed: {e} - SQL: {statement}"),
                source: Some(e),
            })?;
    }

    let row: Option<(i64,)> = sqlx::query_as("SELECT version FROM schema_version")
        .fetch_optional(pool)
        .await
        .sql_context("Failed to check schema version")?;

    match row {
        None => {
            // First initialization
            sqlx::query("INSERT INTO schema_version (version) VALUES ($1)")
                .bind(SCHEMA_VERSION)
                .execute(pool)
                .await
                .sql_context("Failed to initialize schema version")?;
        }
        Some((current_version,)) if current_version < SCHEMA_VERSION => {
            migrate(store, current_version, SCHEMA_VERSION).await?;
        }
        Some(_) => {}
    }

    Ok(())
}

/// Run migrations sequentially from one schema version to another.
async fn migrate(store: &Sqlite, from: i64, to: i64) -> Result<()> {
    tracing::info!(from, to, "Starting SQL schema migration");

    let mut current = from;
    while current < to {
        let next = current + 1;
        run_migration(store, current, next).await?;

        sqlx::query("UPDATE schema_version SET version = $1")
            .bind(next)
            .execute(store.pool())
            .await
            .sql_context("Failed to update schema version")?;

        tracing::info!(version = next, "Migration completed");
        current = next;
    }

    Ok(())
}

/// Execute a single migration step.
async fn run_migration(_store: &Sqlite, from: i64, to: i64) -> Result<()> {
    // No migrations exist yet; version 1 is the first schema.
    Err(BackendError::SqlxError {
        reason: format!("No migration defined from v{from} to v{to}"),
        source: None,
    }
    .into())
}
