//! Schema migrations using PRAGMA user_version.

pub mod v001_initial;

use funcreg_core::errors::StorageError;
use rusqlite::Connection;

/// One step in the linear migration chain.
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    pub sql: &'static str,
}

/// Every known migration, in application order.
pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial",
    sql: v001_initial::MIGRATION_SQL,
}];

/// Highest version this build knows how to produce.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |m| m.version)
}

/// Run all pending migrations. Each one commits atomically together with
/// its `user_version` bump, so a failure leaves the previous version intact.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current = current_version(conn)?;
    let latest = latest_version();
    if current > latest {
        return Err(StorageError::SchemaTooNew {
            found: current,
            supported: latest,
        });
    }

    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        apply(conn, migration)?;
        tracing::info!(
            version = migration.version,
            name = migration.name,
            "applied migration"
        );
    }

    Ok(())
}

fn apply(conn: &Connection, migration: &Migration) -> Result<(), StorageError> {
    let failed = |e: rusqlite::Error| StorageError::MigrationFailed {
        version: migration.version,
        message: e.to_string(),
    };

    let tx = conn.unchecked_transaction().map_err(failed)?;
    tx.execute_batch(migration.sql).map_err(failed)?;
    tx.pragma_update(None, "user_version", migration.version)
        .map_err(failed)?;
    tx.commit().map_err(failed)
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })
}

/// Versions not yet applied to `conn`.
pub fn pending_versions(conn: &Connection) -> Result<Vec<u32>, StorageError> {
    let current = current_version(conn)?;
    Ok(MIGRATIONS
        .iter()
        .filter(|m| m.version > current)
        .map(|m| m.version)
        .collect())
}
