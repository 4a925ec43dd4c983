//! Configured sampler bound to one category field and seed.

use super::{downsample, train_validation_split, Split, Stratify};
use crate::config::SamplingConfig;
use crate::core::constants::{DEFAULT_CATEGORY_FIELD, DEFAULT_SEED};
use crate::core::error::Result;
use crate::core::types::Seed;

/// Stratified sampler configured with a category field, a seed and the
/// sizes of the train/validation split.
#[derive(Debug, Clone, PartialEq)]
pub struct StratifiedSampler {
    category_field: String,
    seed: Seed,
    train_size: usize,
    validation_size: usize,
}

impl StratifiedSampler {
    /// Create a sampler over `category_field` with the default seed.
    pub fn new<S: Into<String>>(category_field: S) -> Self {
        StratifiedSampler {
            category_field: category_field.into(),
            seed: DEFAULT_SEED,
            train_size: 0,
            validation_size: 0,
        }
    }

    /// Create a sampler from a validated configuration.
    pub fn from_config(config: &SamplingConfig) -> Result<Self> {
        config.validate()?;
        Ok(StratifiedSampler {
            category_field: config.category_field.clone(),
            seed: config.seed,
            train_size: config.train_size,
            validation_size: config.validation_size,
        })
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Set the split sizes used by [`StratifiedSampler::split`]
    pub fn with_split_sizes(mut self, train_size: usize, validation_size: usize) -> Self {
        self.train_size = train_size;
        self.validation_size = validation_size;
        self
    }

    /// Category field the sampler stratifies on
    pub fn category_field(&self) -> &str {
        &self.category_field
    }

    /// Random seed
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Distribution-preserving sample of `sample_size` rows
    pub fn downsample<D: Stratify>(&self, dataset: &D, sample_size: usize) -> Result<D> {
        downsample(dataset, &self.category_field, sample_size, self.seed)
    }

    /// Train/validation split with the configured sizes
    pub fn split<D: Stratify>(&self, dataset: &D) -> Result<Split<D>> {
        train_validation_split(
            dataset,
            &self.category_field,
            self.train_size,
            self.validation_size,
            self.seed,
        )
    }
}

impl Default for StratifiedSampler {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY_FIELD)
    }
}
