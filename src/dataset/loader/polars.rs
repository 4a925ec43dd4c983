//! Polars DataFrame support.
//!
//! `DataFrame` implements [`Stratify`], so the same sampling code that runs on
//! [`Dataset`](crate::dataset::Dataset) runs on frames. The category column
//! must have boolean dtype and no nulls. Row identity within a frame is
//! positional.

use crate::core::error::{PrepError, Result};
use crate::core::types::Seed;
use crate::sampling::{self, Split, Stratify};
use ::polars::prelude::*;
use std::path::Path;

impl Stratify for DataFrame {
    fn num_rows(&self) -> usize {
        self.height()
    }

    fn category_values(&self, field: &str) -> Result<Vec<bool>> {
        let column = self.column(field).map_err(|_| {
            PrepError::invalid_argument(format!("category column '{}' not found", field))
        })?;
        let values = column.as_materialized_series().bool().map_err(|_| {
            PrepError::invalid_argument(format!(
                "category column '{}' must be boolean, found {}",
                field,
                column.dtype()
            ))
        })?;

        values
            .into_iter()
            .enumerate()
            .map(|(row, value)| {
                value.ok_or_else(|| {
                    PrepError::invalid_argument(format!(
                        "category column '{}' is null at row {}",
                        field, row
                    ))
                })
            })
            .collect()
    }

    fn select_rows(&self, positions: &[usize]) -> Result<Self> {
        let indices = positions
            .iter()
            .map(|&p| {
                IdxSize::try_from(p).map_err(|_| {
                    PrepError::invalid_argument(format!(
                        "row position {} exceeds the polars index range",
                        p
                    ))
                })
            })
            .collect::<Result<Vec<IdxSize>>>()?;
        let indices = IdxCa::from_vec("positions".into(), indices);
        Ok(self.take(&indices)?)
    }
}

/// Distribution-preserving sample of a DataFrame.
pub fn downsample_frame(df: &DataFrame, field: &str, sample_size: usize, seed: Seed) -> Result<DataFrame> {
    sampling::downsample(df, field, sample_size, seed)
}

/// Disjoint train and validation samples of a DataFrame.
pub fn train_validation_split_frame(
    df: &DataFrame,
    field: &str,
    train_size: usize,
    validation_size: usize,
    seed: Seed,
) -> Result<Split<DataFrame>> {
    sampling::train_validation_split(df, field, train_size, validation_size, seed)
}

/// Read a headered CSV file into a DataFrame.
pub fn read_csv_frame<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let path = path.as_ref();
    log::info!("Loading CSV with Polars: {}", path.display());

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    Ok(df)
}
