//! ReadPool: query-only connections handed out round-robin.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use funcreg_core::config::storage_config::MAX_READ_POOL_SIZE;
use funcreg_core::errors::StorageError;
use rusqlite::{Connection, OpenFlags};

/// Read-only connections sharing one database file.
pub struct ReadPool {
    connections: Vec<Mutex<Connection>>,
    next: AtomicUsize,
}

fn open_reader(path: &Path) -> Result<Connection, StorageError> {
    let err = |e: rusqlite::Error| StorageError::SqliteError {
        message: format!("open reader on {}: {e}", path.display()),
    };
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(err)?;
    conn.pragma_update(None, "query_only", true).map_err(err)?;
    conn.busy_timeout(std::time::Duration::from_secs(5))
        .map_err(err)?;
    Ok(conn)
}

impl ReadPool {
    /// Open `pool_size` readers, clamped to 1..=8.
    pub fn open(path: &Path, pool_size: usize) -> Result<Self, StorageError> {
        let connections = (0..pool_size.clamp(1, MAX_READ_POOL_SIZE))
            .map(|_| open_reader(path).map(Mutex::new))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            connections,
            next: AtomicUsize::new(0),
        })
    }

    /// Run `f` on the next reader in turn.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let idx = self.next.fetch_add(1, Ordering::Relaxed) % self.connections.len();
        let guard = self.connections[idx]
            .lock()
            .map_err(|_| StorageError::SqliteError {
                message: format!("reader {idx} lock poisoned"),
            })?;
        f(&guard)
    }

    pub fn size(&self) -> usize {
        self.connections.len()
    }
}
