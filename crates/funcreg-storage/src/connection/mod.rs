//! Connection management: write-serialized + read-pooled.

pub mod pool;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use funcreg_core::errors::StorageError;
use rusqlite::Connection;

use self::pool::ReadPool;
use crate::migrations;

/// Writer pragmas. WAL lets the read pool proceed while a write is open.
const WRITER_PRAGMAS: &str = "
    PRAGMA journal_mode = WAL;
    PRAGMA synchronous = NORMAL;
    PRAGMA foreign_keys = ON;
    PRAGMA busy_timeout = 5000;
";

fn open_writer(conn: rusqlite::Result<Connection>, what: &str) -> Result<Connection, StorageError> {
    let conn = conn.map_err(|e| StorageError::SqliteError {
        message: format!("open {what}: {e}"),
    })?;
    conn.execute_batch(WRITER_PRAGMAS)
        .map_err(|e| StorageError::SqliteError {
            message: format!("writer pragmas for {what}: {e}"),
        })?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Owns the single write connection and, for file-backed databases,
/// a pool of read connections.
pub struct DatabaseManager {
    writer: Mutex<Connection>,
    /// `None` in memory: a second in-memory connection would be a separate
    /// database, so reads go through the writer.
    readers: Option<ReadPool>,
    path: Option<PathBuf>,
}

impl DatabaseManager {
    /// Open a database at the given path, apply pragmas, run migrations.
    pub fn open(path: &Path, read_pool_size: usize) -> Result<Self, StorageError> {
        let writer = open_writer(Connection::open(path), &path.display().to_string())?;

        // Readers open after migrations so they never see a half-built schema.
        let readers = ReadPool::open(path, read_pool_size)?;
        tracing::debug!(path = %path.display(), readers = readers.size(), "database opened");

        Ok(Self {
            writer: Mutex::new(writer),
            readers: Some(readers),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let writer = open_writer(Connection::open_in_memory(), ":memory:")?;

        Ok(Self {
            writer: Mutex::new(writer),
            readers: None,
            path: None,
        })
    }

    /// Execute a write operation with the serialized writer connection.
    pub fn with_writer<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let guard = self.writer.lock().map_err(|_| StorageError::SqliteError {
            message: "write lock poisoned".to_string(),
        })?;
        f(&guard)
    }

    /// Execute a read operation on a pooled reader, or the writer in memory.
    pub fn with_reader<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        match &self.readers {
            Some(pool) => pool.with_conn(f),
            None => self.with_writer(f),
        }
    }

    /// Run a WAL checkpoint (TRUNCATE mode).
    pub fn checkpoint(&self) -> Result<(), StorageError> {
        self.with_writer(|conn| {
            conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")
                .map_err(|e| StorageError::SqliteError {
                    message: e.to_string(),
                })
        })
    }

    /// Journal mode reported by the writer: `wal` on disk, `memory` in memory.
    pub fn journal_mode(&self) -> Result<String, StorageError> {
        self.with_writer(|conn| {
            conn.pragma_query_value(None, "journal_mode", |row| row.get::<_, String>(0))
                .map(|mode| mode.to_ascii_lowercase())
                .map_err(|e| StorageError::SqliteError {
                    message: e.to_string(),
                })
        })
    }

    /// Get the database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of read connections (0 in memory).
    pub fn reader_count(&self) -> usize {
        self.readers.as_ref().map_or(0, ReadPool::size)
    }
}
