//! Configuration System
//!
//! Layered configuration built with the `config` crate. Sources, lowest
//! priority first:
//!
//! 1. Built-in defaults
//! 2. TOML file (explicit path, or `<config dir>/entrykit/config.toml`)
//! 3. Environment variables: `ENTRYKIT_` prefix, `__` between nested keys,
//!    e.g. `ENTRYKIT_LISTING__BATCH_SIZE=16`

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use crate::walker::WalkerConfig;
use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default number of children requested per listing batch.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrykitConfig {
    /// Recursive reader settings
    #[serde(default)]
    pub walker: WalkerConfig,

    /// Directory listing settings
    #[serde(default)]
    pub listing: ListingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Directory listing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Children per batch for backends that page their listings
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
        }
    }
}

impl EntrykitConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listing.batch_size == 0 {
            return Err(ConfigError::Invalid(
                "listing.batch_size must be at least 1".to_string(),
            ));
        }
        self.logging.validate()
    }
}

/// Loads [`EntrykitConfig`] from its layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Path of the per-user config file, if a home directory is known.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "entrykit").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load using the per-user config file.
    pub fn load() -> Result<EntrykitConfig, ConfigError> {
        Self::load_from(Self::default_config_path().as_deref())
    }

    /// Load using `path` as the config file. A missing file is skipped.
    pub fn load_from(path: Option<&Path>) -> Result<EntrykitConfig, ConfigError> {
        let mut builder =
            Config::builder().set_default("listing.batch_size", DEFAULT_BATCH_SIZE as i64)?;

        if let Some(path) = path {
            if path.is_file() {
                debug!(config_path = %path.display(), "Loading configuration file");
                builder = builder.add_source(File::from(path).required(false));
            } else {
                debug!(config_path = %path.display(), "Configuration file not found, skipping");
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("ENTRYKIT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: EntrykitConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
