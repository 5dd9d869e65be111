//! # funcreg-core
//!
//! Foundation crate for the serverless function registry.
//! Defines the `Function` record, its limits, storage traits, errors,
//! config, and tracing setup. `funcreg-storage` depends on this.

pub mod config;
pub mod errors;
pub mod function;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::RegistryConfig;
pub use errors::{ConfigError, StorageError, ValidationError};
pub use function::Function;
pub use traits::{IFunctionStorage, Page};
