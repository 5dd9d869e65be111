//! FunctionStore: owns the DatabaseManager and implements IFunctionStorage.

use std::path::Path;

use funcreg_core::config::RegistryConfig;
use funcreg_core::errors::StorageError;
use funcreg_core::function::kinds;
use funcreg_core::traits::{IFunctionStorage, Page};
use funcreg_core::Function;

use crate::connection::DatabaseManager;
use crate::migrations;
use crate::queries::functions as q;

/// The function registry store.
pub struct FunctionStore {
    db: DatabaseManager,
}

impl FunctionStore {
    /// Open a store backed by a file on disk, with the default read pool.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Self::open_with_pool(path, funcreg_core::config::storage_config::DEFAULT_READ_POOL_SIZE)
    }

    /// Open a file-backed store with `read_pool_size` reader connections.
    pub fn open_with_pool(path: &Path, read_pool_size: usize) -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open(path, read_pool_size)?,
        })
    }

    /// Open the store described by a loaded configuration.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, StorageError> {
        Self::open_with_pool(
            &config.storage.effective_path(),
            config.storage.effective_read_pool_size(),
        )
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open_in_memory()?,
        })
    }

    /// Access the underlying connections.
    pub fn database(&self) -> &DatabaseManager {
        &self.db
    }

    /// Current schema version of the open database.
    pub fn schema_version(&self) -> Result<u32, StorageError> {
        self.db.with_reader(migrations::current_version)
    }

    /// Insert many functions atomically. Returns the number inserted.
    pub fn create_bulk(&self, functions: &[Function]) -> Result<usize, StorageError> {
        let n = self.db.with_writer(|conn| q::insert_bulk(conn, functions))?;
        tracing::info!(count = n, "registered functions in bulk");
        Ok(n)
    }

    fn note_kind(function: &Function) {
        if !kinds::is_known(&function.kind) {
            tracing::debug!(
                name = %function.name,
                kind = %function.kind,
                "function type outside the usual categories"
            );
        }
    }

    /// Flush the WAL into the main database file.
    pub fn checkpoint(&self) -> Result<(), StorageError> {
        self.db.checkpoint()
    }
}

impl IFunctionStorage for FunctionStore {
    fn create(&self, function: &Function) -> Result<(), StorageError> {
        self.db.with_writer(|conn| q::insert_function(conn, function))?;
        Self::note_kind(function);
        tracing::info!(name = %function.name, kind = %function.kind, "function registered");
        Ok(())
    }

    fn get(&self, name: &str) -> Result<Option<Function>, StorageError> {
        self.db.with_reader(|conn| q::get_function(conn, name))
    }

    fn update(&self, function: &Function) -> Result<(), StorageError> {
        self.db.with_writer(|conn| q::update_function(conn, function))?;
        tracing::debug!(name = %function.name, "function updated");
        Ok(())
    }

    fn update_status(&self, name: &str, status: &str) -> Result<(), StorageError> {
        self.db.with_writer(|conn| q::update_status(conn, name, status))?;
        tracing::debug!(name, status, "function status changed");
        Ok(())
    }

    fn upsert(&self, function: &Function) -> Result<bool, StorageError> {
        let created = self.db.with_writer(|conn| q::upsert_function(conn, function))?;
        Self::note_kind(function);
        tracing::debug!(name = %function.name, created, "function upserted");
        Ok(created)
    }

    fn delete(&self, name: &str) -> Result<bool, StorageError> {
        let removed = self.db.with_writer(|conn| q::delete_function(conn, name))?;
        if removed {
            tracing::info!(name, "function deregistered");
        } else {
            tracing::warn!(name, "deregister of unknown function");
        }
        Ok(removed)
    }

    fn list(&self) -> Result<Vec<Function>, StorageError> {
        self.db.with_reader(q::list_functions)
    }

    fn list_page(&self, after: Option<&str>, limit: usize) -> Result<Page<Function>, StorageError> {
        self.db.with_reader(|conn| q::list_page(conn, after, limit))
    }

    fn list_by_kind(&self, kind: &str) -> Result<Vec<Function>, StorageError> {
        self.db.with_reader(|conn| q::list_by_kind(conn, kind))
    }

    fn list_by_status(&self, status: &str) -> Result<Vec<Function>, StorageError> {
        self.db.with_reader(|conn| q::list_by_status(conn, status))
    }

    fn count(&self) -> Result<u64, StorageError> {
        self.db.with_reader(q::count)
    }
}
