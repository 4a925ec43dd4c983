//! Sampling configuration structure and builder.

use crate::core::constants::*;
use crate::core::error::{PrepError, Result};
use crate::core::types::Seed;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Parameters of a stratified train/validation split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Name of the boolean column used to stratify
    pub category_field: String,
    /// Number of training rows
    pub train_size: usize,
    /// Number of validation rows
    pub validation_size: usize,
    /// Random seed for reproducible sampling
    pub seed: Seed,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        SamplingConfig {
            category_field: DEFAULT_CATEGORY_FIELD.to_string(),
            train_size: DEFAULT_TRAIN_SIZE,
            validation_size: DEFAULT_VALIDATION_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

impl SamplingConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.category_field.trim().is_empty() {
            return Err(PrepError::config("category_field must not be empty"));
        }

        if self.train_size.checked_add(self.validation_size).is_none() {
            return Err(PrepError::config(format!(
                "train_size {} plus validation_size {} overflows",
                self.train_size, self.validation_size
            )));
        }

        Ok(())
    }

    /// Total number of rows a split with this configuration needs
    pub fn required_rows(&self) -> usize {
        self.train_size.saturating_add(self.validation_size)
    }

    /// Load configuration from a `.toml` or `.json` file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| PrepError::config(format!("Failed to read config file: {}", e)))?;

        let config: SamplingConfig = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| PrepError::config(format!("Failed to parse JSON config: {}", e)))?,
            Some("toml") => toml::from_str(&content)
                .map_err(|e| PrepError::config(format!("Failed to parse TOML config: {}", e)))?,
            _ => {
                return Err(PrepError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        config.validate()?;
        log::debug!("Loaded sampling config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a `.toml` or `.json` file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)
                .map_err(|e| PrepError::config(format!("Failed to serialize to JSON: {}", e)))?,
            Some("toml") => toml::to_string_pretty(self)
                .map_err(|e| PrepError::config(format!("Failed to serialize to TOML: {}", e)))?,
            _ => {
                return Err(PrepError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        std::fs::write(path, content)
            .map_err(|e| PrepError::config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn load_from_environment() -> Result<Self> {
        let mut config = SamplingConfig::default();
        config.apply_environment_overrides()?;
        Ok(config)
    }

    /// Override fields with any `FINETUNE_PREP_*` variables that are set
    pub fn apply_environment_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|name| std::env::var(format!("{}{}", ENV_PREFIX, name)).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("CATEGORY_FIELD") {
            self.category_field = val;
        }

        if let Some(val) = lookup("TRAIN_SIZE") {
            self.train_size = val
                .parse()
                .map_err(|_| PrepError::config(format!("Invalid {}TRAIN_SIZE", ENV_PREFIX)))?;
        }

        if let Some(val) = lookup("VALIDATION_SIZE") {
            self.validation_size = val.parse().map_err(|_| {
                PrepError::config(format!("Invalid {}VALIDATION_SIZE", ENV_PREFIX))
            })?;
        }

        if let Some(val) = lookup("SEED") {
            self.seed = val
                .parse()
                .map_err(|_| PrepError::config(format!("Invalid {}SEED", ENV_PREFIX)))?;
        }

        self.validate()
    }

    /// Get configuration as a parameter map
    pub fn as_parameter_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("category_field".to_string(), self.category_field.clone());
        map.insert("train_size".to_string(), self.train_size.to_string());
        map.insert(
            "validation_size".to_string(),
            self.validation_size.to_string(),
        );
        map.insert("seed".to_string(), self.seed.to_string());
        map
    }
}

/// Builder for [`SamplingConfig`]
#[derive(Debug, Clone, Default)]
pub struct SamplingConfigBuilder {
    config: SamplingConfig,
}

impl SamplingConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category field
    pub fn category_field<S: Into<String>>(mut self, field: S) -> Self {
        self.config.category_field = field.into();
        self
    }

    /// Set the number of training rows
    pub fn train_size(mut self, size: usize) -> Self {
        self.config.train_size = size;
        self
    }

    /// Set the number of validation rows
    pub fn validation_size(mut self, size: usize) -> Self {
        self.config.validation_size = size;
        self
    }

    /// Set the random seed
    pub fn seed(mut self, seed: Seed) -> Self {
        self.config.seed = seed;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<SamplingConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
