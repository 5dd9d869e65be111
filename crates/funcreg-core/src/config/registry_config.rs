//! Top-level registry configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::storage_config::{StorageConfig, MAX_READ_POOL_SIZE};
use crate::errors::ConfigError;

/// Name of the project-level config file.
pub const CONFIG_FILE_NAME: &str = "funcreg.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`FUNCREG_*`)
/// 3. Project config (`funcreg.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RegistryConfig {
    pub storage: StorageConfig,
}

/// Caller-supplied overrides, typically from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub db_path: Option<String>,
    pub read_pool_size: Option<usize>,
}

impl RegistryConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        // Relative db paths are anchored at the project root.
        if let Some(ref p) = config.storage.path {
            if Path::new(p).is_relative() {
                config.storage.path = Some(root.join(p).display().to_string());
            }
        }

        Self::validate(&config)?;
        tracing::debug!(db_path = ?config.storage.path, "configuration loaded");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &RegistryConfig) -> Result<(), ConfigError> {
        if let Some(size) = config.storage.read_pool_size {
            if size == 0 || size > MAX_READ_POOL_SIZE {
                return Err(ConfigError::ValidationFailed {
                    field: "storage.read_pool_size".to_string(),
                    message: format!("must be between 1 and {MAX_READ_POOL_SIZE}"),
                });
            }
        }
        if let Some(ref path) = config.storage.path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "storage.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut RegistryConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: RegistryConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut RegistryConfig, other: &RegistryConfig) {
        if other.storage.path.is_some() {
            base.storage.path = other.storage.path.clone();
        }
        if other.storage.read_pool_size.is_some() {
            base.storage.read_pool_size = other.storage.read_pool_size;
        }
    }

    /// Apply environment variable overrides.
    /// `FUNCREG_DB_PATH`, `FUNCREG_READ_POOL_SIZE`.
    fn apply_env_overrides(config: &mut RegistryConfig) {
        if let Ok(val) = std::env::var("FUNCREG_DB_PATH") {
            if !val.is_empty() {
                config.storage.path = Some(val);
            }
        }
        if let Ok(val) = std::env::var("FUNCREG_READ_POOL_SIZE") {
            match val.parse::<usize>() {
                Ok(v) => config.storage.read_pool_size = Some(v),
                Err(e) => tracing::warn!(
                    value = %val,
                    error = %e,
                    "ignoring unparsable FUNCREG_READ_POOL_SIZE"
                ),
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut RegistryConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.db_path {
            config.storage.path = Some(v.clone());
        }
        if let Some(v) = overrides.read_pool_size {
            config.storage.read_pool_size = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
