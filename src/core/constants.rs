//! Default configuration values used throughout the crate.

use crate::core::types::Seed;

/// Default name of the boolean column used to stratify samples.
pub const DEFAULT_CATEGORY_FIELD: &str = "flag";

/// Default random seed for reproducible sampling.
pub const DEFAULT_SEED: Seed = 42;

/// Default number of training rows (0 = no training sample requested).
pub const DEFAULT_TRAIN_SIZE: usize = 0;

/// Default number of validation rows (0 = no validation sample requested).
pub const DEFAULT_VALIDATION_SIZE: usize = 0;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "FINETUNE_PREP_";

/// Number of seconds in a minute, used by duration formatting.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Width of the job identifier column in tabular reports.
pub const JOB_ID_COLUMN_WIDTH: usize = 30;
