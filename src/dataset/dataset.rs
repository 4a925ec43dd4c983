//! Core dataset structure for finetune-prep.
//!
//! A [`Dataset`] is an ordered table of [`Record`]s with named columns. Each
//! record keeps the [`RowId`] it was given when first loaded, so samples and
//! splits can always be traced back to (and compared by) their source rows.

use crate::core::error::{PrepError, Result};
use crate::core::types::*;
use crate::dataset::value::Value;
use crate::sampling::{self, Split, Stratify};

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One row of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    id: RowId,
    values: Vec<Value>,
}

impl Record {
    /// Create a record with an explicit identity
    pub fn new(id: RowId, values: Vec<Value>) -> Self {
        Record { id, values }
    }

    /// Identity of the record in its original dataset
    pub fn id(&self) -> RowId {
        self.id
    }

    /// All field values, in column order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Value at a column position
    pub fn get(&self, column: usize) -> Option<&Value> {
        self.values.get(column)
    }
}

/// Dataset metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    /// Source file path
    pub source_path: Option<String>,
    /// Data format
    pub format: String,
    /// Custom properties
    pub properties: HashMap<String, String>,
}

impl Default for DatasetMetadata {
    fn default() -> Self {
        DatasetMetadata {
            source_path: None,
            format: "memory".to_string(),
            properties: HashMap::new(),
        }
    }
}

/// In-memory table of records
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
    metadata: DatasetMetadata,
}

impl Dataset {
    /// Create a dataset from rows of values. Rows are numbered `0..n`.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, values)| Record::new(RowId(i), values))
            .collect();
        Self::from_records(columns, records)
    }

    /// Create a dataset from records that already carry identities.
    pub fn from_records(columns: Vec<String>, records: Vec<Record>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(PrepError::invalid_argument(format!(
                    "duplicate column name '{}'",
                    name
                )));
            }
        }

        let mut ids = HashSet::with_capacity(records.len());
        for record in &records {
            if record.values.len() != columns.len() {
                return Err(PrepError::invalid_argument(format!(
                    "row {} has {} values, expected {}",
                    record.id,
                    record.values.len(),
                    columns.len()
                )));
            }
            if !ids.insert(record.id) {
                return Err(PrepError::invalid_argument(format!(
                    "duplicate row identity {}",
                    record.id
                )));
            }
        }

        Ok(Dataset {
            columns,
            records,
            metadata: DatasetMetadata::default(),
        })
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Records in dataset order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Record at a position
    pub fn record(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    /// Identities of all records, in dataset order
    pub fn row_ids(&self) -> Vec<RowId> {
        self.records.iter().map(Record::id).collect()
    }

    /// Dataset metadata
    pub fn metadata(&self) -> &DatasetMetadata {
        &self.metadata
    }

    /// Mutable dataset metadata
    pub fn metadata_mut(&mut self) -> &mut DatasetMetadata {
        &mut self.metadata
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| PrepError::invalid_argument(format!("column '{}' not found", name)))
    }

    /// Value of a named field at a record position
    pub fn value(&self, position: usize, column: &str) -> Option<&Value> {
        let column = self.column_index(column).ok()?;
        self.records.get(position)?.get(column)
    }

    /// Category value of every record, in dataset order.
    ///
    /// Every value of the column must be a boolean.
    pub fn category_values(&self, field: &str) -> Result<Vec<bool>> {
        let column = self.column_index(field)?;
        self.records
            .iter()
            .map(|record| {
                record.values[column].as_bool().ok_or_else(|| {
                    PrepError::invalid_argument(format!(
                        "category field '{}' of row {} is {}, expected a boolean",
                        field, record.id, record.values[column]
                    ))
                })
            })
            .collect()
    }

    /// Number of records whose category field is `true`
    pub fn count_true(&self, field: &str) -> Result<usize> {
        Ok(self.category_values(field)?.into_iter().filter(|&v| v).count())
    }

    /// Rewrite a category column to strict booleans.
    ///
    /// Loaders call this so that looser spellings (`1`, `"True"`, ...) are
    /// validated once, at load time.
    pub fn coerce_category(&mut self, field: &str) -> Result<()> {
        let column = self.column_index(field)?;
        let flags = self
            .records
            .iter()
            .map(|record| {
                let value = &record.values[column];
                value.as_category().ok_or_else(|| {
                    PrepError::invalid_argument(format!(
                        "category field '{}' of row {} has non-boolean value '{}'",
                        field, record.id, value
                    ))
                })
            })
            .collect::<Result<Vec<bool>>>()?;

        // Nothing is rewritten unless every row converts
        for (record, flag) in self.records.iter_mut().zip(flags) {
            record.values[column] = Value::Bool(flag);
        }
        Ok(())
    }

    /// New dataset holding the records at `positions`, in that order.
    pub fn select(&self, positions: &[usize]) -> Result<Dataset> {
        let records = positions
            .iter()
            .map(|&p| {
                self.records.get(p).cloned().ok_or_else(|| {
                    PrepError::invalid_argument(format!(
                        "row position {} out of bounds for {} rows",
                        p,
                        self.records.len()
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut selected = Dataset::from_records(self.columns.clone(), records)?;
        selected.metadata = self.metadata.clone();
        Ok(selected)
    }

    /// Distribution-preserving sample of `sample_size` records.
    ///
    /// See [`sampling::downsample`].
    pub fn downsample(&self, field: &str, sample_size: usize, seed: Seed) -> Result<Dataset> {
        sampling::downsample(self, field, sample_size, seed)
    }

    /// Disjoint train and validation samples.
    ///
    /// See [`sampling::train_validation_split`].
    pub fn train_validation_split(
        &self,
        field: &str,
        train_size: usize,
        validation_size: usize,
        seed: Seed,
    ) -> Result<Split<Dataset>> {
        sampling::train_validation_split(self, field, train_size, validation_size, seed)
    }
}

impl Stratify for Dataset {
    fn num_rows(&self) -> usize {
        self.len()
    }

    fn category_values(&self, field: &str) -> Result<Vec<bool>> {
        Dataset::category_values(self, field)
    }

    fn select_rows(&self, positions: &[usize]) -> Result<Self> {
        self.select(positions)
    }
}
