//! Settings
//!
//! Crate configuration loaded through the `config` crate: an optional TOML
//! file layered under `ZONEFS_*` environment overrides
//! (e.g. `ZONEFS_LOGGING__LEVEL=debug`).

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Node store configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the sled database; None means the platform data directory
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    /// The database path to open, applying the platform default
    pub fn resolved_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        let project_dirs = directories::ProjectDirs::from("", "zonefs", "zonefs")
            .ok_or_else(|| {
                ConfigError::Invalid(
                    "could not determine platform data directory for node store".to_string(),
                )
            })?;
        Ok(project_dirs.data_dir().join("nodes"))
    }
}

/// Top-level crate settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Load settings from an optional file plus environment overrides
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let raw = builder
            .add_source(config::Environment::with_prefix("ZONEFS").separator("__"))
            .build()?;
        Ok(raw.try_deserialize()?)
    }
}
