//! Storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_DB_PATH: &str = "funcreg.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const MAX_READ_POOL_SIZE: usize = 8;

/// Where the registry database lives and how it is accessed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file. Relative paths resolve against the project root.
    pub path: Option<String>,
    /// Number of read-only connections. 1..=8.
    pub read_pool_size: Option<usize>,
}

impl StorageConfig {
    /// Returns the effective database path, defaulting to `funcreg.db`.
    pub fn effective_path(&self) -> PathBuf {
        PathBuf::from(self.path.as_deref().unwrap_or(DEFAULT_DB_PATH))
    }

    /// Returns the effective read pool size, defaulting to 4.
    pub fn effective_read_pool_size(&self) -> usize {
        self.read_pool_size.unwrap_or(DEFAULT_READ_POOL_SIZE)
    }
}
