//! JSON Lines loader.
//!
//! Fine-tuning corpora are usually stored one JSON object per line. Columns
//! are the union of all keys, ordered by the line that first introduced them
//! (keys of one object follow `serde_json`'s map order). A record missing a
//! key gets `Null` for it.

use super::{finish_loading, DataLoader, LoaderConfig};
use crate::core::error::{PrepError, Result};
use crate::dataset::{Dataset, Value};
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};

/// Loads newline-delimited JSON objects into a [`Dataset`].
#[derive(Debug, Clone, Default)]
pub struct JsonLinesLoader {
    config: LoaderConfig,
}

impl JsonLinesLoader {
    /// Create a loader with the given configuration
    pub fn new(config: LoaderConfig) -> Self {
        JsonLinesLoader { config }
    }

    /// Validate `field` as the category column
    pub fn with_category_field<S: Into<String>>(mut self, field: S) -> Self {
        self.config.category_field = Some(field.into());
        self
    }

    /// Load from an in-memory string
    pub fn load_str(&self, content: &str) -> Result<Dataset> {
        self.load_from_reader(content.as_bytes())
    }
}

impl DataLoader for JsonLinesLoader {
    fn load_from_reader<R: Read>(&self, reader: R) -> Result<Dataset> {
        let mut columns: Vec<String> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut objects = Vec::new();

        for (line_num, line) in BufReader::new(reader).lines().enumerate() {
            if self.config.max_rows.is_some_and(|max| objects.len() >= max) {
                break;
            }
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let value: serde_json::Value = serde_json::from_str(&line).map_err(|e| {
                PrepError::data_loading(format!("Invalid JSON on line {}: {}", line_num + 1, e))
            })?;
            let serde_json::Value::Object(object) = value else {
                return Err(PrepError::data_loading(format!(
                    "Line {} is not a JSON object",
                    line_num + 1
                )));
            };

            for key in object.keys() {
                if !positions.contains_key(key) {
                    positions.insert(key.clone(), columns.len());
                    columns.push(key.clone());
                }
            }
            objects.push(object);
        }

        let rows = objects
            .iter()
            .map(|object| {
                let mut row = vec![Value::Null; columns.len()];
                for (key, value) in object {
                    row[positions[key]] = Value::from_json(value);
                }
                row
            })
            .collect();

        let dataset = Dataset::new(columns, rows)?;
        finish_loading(dataset, &self.config, "jsonl")
    }

    fn config(&self) -> &LoaderConfig {
        &self.config
    }
}
