//! Dataset loaders.
//!
//! Loaders read records from files or readers and, when a category field is
//! configured, validate that column to strict booleans before returning.

#[cfg(feature = "csv")]
pub mod csv;
pub mod jsonl;
#[cfg(feature = "polars")]
pub mod polars;

#[cfg(feature = "csv")]
pub use self::csv::CsvLoader;
pub use self::jsonl::JsonLinesLoader;

use crate::core::error::{PrepError, Result};
use crate::dataset::Dataset;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Data loader configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Column to validate as the boolean category field
    pub category_field: Option<String>,
    /// Maximum rows to read
    pub max_rows: Option<usize>,
}

/// Data loader trait
pub trait DataLoader {
    /// Load data from any reader
    fn load_from_reader<R: Read>(&self, reader: R) -> Result<Dataset>;

    /// Get loader configuration
    fn config(&self) -> &LoaderConfig;

    /// Load data from a file
    fn load<P: AsRef<Path>>(&self, path: P) -> Result<Dataset> {
        let path = path.as_ref();
        log::info!("Loading dataset from {}", path.display());

        if !path.is_file() {
            return Err(PrepError::data_loading(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        let file = std::fs::File::open(path).map_err(|e| {
            PrepError::data_loading(format!("Failed to open file {}: {}", path.display(), e))
        })?;
        let mut dataset = self.load_from_reader(std::io::BufReader::new(file))?;
        dataset.metadata_mut().source_path = Some(path.display().to_string());
        Ok(dataset)
    }
}

/// Validate the configured category column and stamp loader metadata.
pub(crate) fn finish_loading(
    mut dataset: Dataset,
    config: &LoaderConfig,
    format: &str,
) -> Result<Dataset> {
    if let Some(field) = &config.category_field {
        dataset.coerce_category(field)?;
        log::debug!(
            "Category field '{}' validated: {} of {} rows are true",
            field,
            dataset.count_true(field)?,
            dataset.len()
        );
    }

    let (num_rows, num_cols) = (dataset.len(), dataset.columns().len());
    let metadata = dataset.metadata_mut();
    metadata.format = format.to_string();
    metadata
        .properties
        .insert("num_rows".to_string(), num_rows.to_string());
    metadata
        .properties
        .insert("num_cols".to_string(), num_cols.to_string());

    Ok(dataset)
}
