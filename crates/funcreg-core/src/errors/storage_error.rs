//! Storage-layer errors for SQLite operations.

use super::error_code::{self, RegistryErrorCode};
use super::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("database schema version {found} is newer than supported version {supported}")]
    SchemaTooNew { found: u32, supported: u32 },

    #[error("function not found: {name}")]
    NotFound { name: String },

    #[error("function already registered: {name}")]
    AlreadyExists { name: String },

    #[error("constraint violated: {message}")]
    ConstraintViolation { message: String },

    #[error("invalid function: {0}")]
    Validation(#[from] ValidationError),
}

impl RegistryErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SqliteError { .. } => error_code::STORAGE_ERROR,
            Self::MigrationFailed { .. } | Self::SchemaTooNew { .. } => {
                error_code::MIGRATION_FAILED
            }
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::AlreadyExists { .. } => error_code::ALREADY_EXISTS,
            Self::ConstraintViolation { .. } => error_code::CONSTRAINT_VIOLATION,
            Self::Validation(e) => e.error_code(),
        }
    }
}
