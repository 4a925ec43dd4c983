//! Configuration management for finetune-prep.
//!
//! Sampling parameters can come from defaults, a TOML/JSON file, or
//! `FINETUNE_PREP_*` environment variables. Every source is validated before
//! the configuration is handed out.

pub mod core;

pub use self::core::{SamplingConfig, SamplingConfigBuilder};

use crate::core::error::Result;
use std::path::Path;

/// Where a configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Default configuration values
    Default,
    /// Configuration from file
    File(String),
    /// Configuration from environment variables
    Environment,
}

/// Configuration management utilities
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: SamplingConfig,
    source: ConfigSource,
}

impl ConfigManager {
    /// Create a manager holding the default configuration
    pub fn new() -> Self {
        ConfigManager {
            config: SamplingConfig::default(),
            source: ConfigSource::Default,
        }
    }

    /// Load configuration from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        Ok(ConfigManager {
            config: SamplingConfig::load_from_file(path)?,
            source: ConfigSource::File(path.to_string_lossy().to_string()),
        })
    }

    /// Load configuration from environment variables
    pub fn from_environment() -> Result<Self> {
        Ok(ConfigManager {
            config: SamplingConfig::load_from_environment()?,
            source: ConfigSource::Environment,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    /// Get the configuration source
    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// Apply configuration overrides from environment variables
    pub fn apply_environment_overrides(&mut self) -> Result<()> {
        self.config.apply_environment_overrides()
    }

    /// Get configuration summary for debugging
    pub fn summary(&self) -> String {
        format!(
            "Configuration Summary:\n\
             Source: {:?}\n\
             Category Field: {}\n\
             Train Size: {}\n\
             Validation Size: {}\n\
             Seed: {}",
            self.source,
            self.config.category_field,
            self.config.train_size,
            self.config.validation_size,
            self.config.seed,
        )
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
