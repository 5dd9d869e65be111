//! Configuration for the registry.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod registry_config;
pub mod storage_config;

pub use registry_config::{ConfigOverrides, RegistryConfig};
pub use storage_config::StorageConfig;
