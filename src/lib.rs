//! # finetune-prep
//!
//! Helpers for preparing fine-tuning data and summarizing fine-tuning jobs.
//!
//! The centerpiece is distribution-preserving sampling over a boolean
//! category column: a sample keeps the source's share of `true` rows (rounded
//! down), and a train/validation split draws validation rows only from what
//! the training sample left behind.
//!
//! ## Quick Start
//!
//! ```rust
//! use finetune_prep::{Dataset, Value};
//!
//! # fn main() -> finetune_prep::Result<()> {
//! let rows = (0..100)
//!     .map(|i| vec![Value::Int(i), Value::Bool(i < 60)])
//!     .collect();
//! let dataset = Dataset::new(vec!["id".into(), "flag".into()], rows)?;
//!
//! let sample = dataset.downsample("flag", 10, 42)?;
//! assert_eq!(sample.count_true("flag")?, 6);
//!
//! let split = dataset.train_validation_split("flag", 10, 5, 42)?;
//! assert_eq!(split.train.len(), 10);
//! assert_eq!(split.validation.len(), 5);
//! # Ok(())
//! # }
//! ```
//!
//! ### Working with Polars DataFrames
//!
//! ```rust,no_run
//! # #[cfg(feature = "polars")]
//! # {
//! use finetune_prep::dataset::loader::polars::{read_csv_frame, train_validation_split_frame};
//!
//! # fn example() -> finetune_prep::Result<()> {
//! let df = read_csv_frame("train.csv")?;
//! let split = train_validation_split_frame(&df, "is_positive", 1000, 200, 7)?;
//! println!("{}", split.train.height());
//! # Ok(())
//! # }
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Error handling, shared types, defaults, seeded randomness, logging
//! - [`config`]: Sampling configuration from files and environment
//! - [`dataset`]: Typed tables and their loaders
//! - [`sampling`]: Stratified sampling and train/validation splits
//! - [`report`]: Fine-tuning job summaries

#![doc(html_root_url = "https://docs.rs/finetune-prep/")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure module - always available
pub mod core;

// Configuration management module
pub mod config;

// Dataset management module
pub mod dataset;

// Stratified sampling module
pub mod sampling;

// Job reporting module
pub mod report;

pub use crate::core::{
    constants::*,
    error::{PrepError, Result},
    initialize_logging,
    types::*,
};

pub use crate::config::{ConfigManager, SamplingConfig, SamplingConfigBuilder};

pub use crate::dataset::{DataLoader, Dataset, JsonLinesLoader, LoaderConfig, Record, Value};

#[cfg(feature = "csv")]
#[cfg_attr(docsrs, doc(cfg(feature = "csv")))]
pub use crate::dataset::CsvLoader;

#[cfg(feature = "polars")]
#[cfg_attr(docsrs, doc(cfg(feature = "polars")))]
pub use crate::dataset::loader::polars::{
    downsample_frame, read_csv_frame, train_validation_split_frame,
};

pub use crate::sampling::{
    downsample, split_indices, stratified_indices, train_validation_split, SamplePlan, Split,
    StratifiedSampler, Stratify,
};

pub use crate::report::{
    format_job_summary, format_job_summary_now, render_summary_table, summarize_jobs,
    summarize_jobs_now, table_header, table_row, JobInfo, JobRecord, JobStatus, JobSummary,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
