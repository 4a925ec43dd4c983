//! Dataset management module for finetune-prep.
//!
//! Provides the typed in-memory table that sampling operates on, plus loaders
//! for CSV and JSON Lines files and an adapter for Polars DataFrames.

pub mod dataset;
pub mod loader;
pub mod value;

pub use dataset::{Dataset, DatasetMetadata, Record};
#[cfg(feature = "csv")]
pub use loader::CsvLoader;
pub use loader::{DataLoader, JsonLinesLoader, LoaderConfig};
pub use value::Value;
