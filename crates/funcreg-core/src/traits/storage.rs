use serde::{Deserialize, Serialize};

use crate::errors::StorageError;
use crate::function::Function;

/// One page of a keyset-paginated listing ordered by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub has_more: bool,
    /// Name of the last item; pass it back as `after` for the next page.
    pub next_cursor: Option<String>,
}

/// Registration lifecycle for functions: register, refresh, deregister, list.
/// Every listing is ascending by name.
pub trait IFunctionStorage: Send + Sync {
    // --- CRUD ---
    fn create(&self, function: &Function) -> Result<(), StorageError>;
    fn get(&self, name: &str) -> Result<Option<Function>, StorageError>;
    fn update(&self, function: &Function) -> Result<(), StorageError>;
    fn update_status(&self, name: &str, status: &str) -> Result<(), StorageError>;
    /// Returns true when the function was newly registered.
    fn upsert(&self, function: &Function) -> Result<bool, StorageError>;
    fn delete(&self, name: &str) -> Result<bool, StorageError>;

    // --- Listing ---
    fn list(&self) -> Result<Vec<Function>, StorageError>;
    fn list_page(&self, after: Option<&str>, limit: usize) -> Result<Page<Function>, StorageError>;
    fn list_by_kind(&self, kind: &str) -> Result<Vec<Function>, StorageError>;
    fn list_by_status(&self, status: &str) -> Result<Vec<Function>, StorageError>;

    // --- Aggregation ---
    fn count(&self) -> Result<u64, StorageError>;
}
