//! CSV loader built on the `csv` crate.

use super::{finish_loading, DataLoader, LoaderConfig};
use crate::core::error::{PrepError, Result};
use crate::dataset::{Dataset, Value};
use ::csv::{ReaderBuilder, Trim};
use std::io::Read;

/// Loads a headered CSV file into a [`Dataset`].
///
/// Cells are trimmed; empty cells become `Null`, numbers are read as `Int` or
/// `Float`, and `true`/`false` as `Bool`.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    config: LoaderConfig,
    delimiter: u8,
}

impl CsvLoader {
    /// Create a comma-separated loader
    pub fn new(config: LoaderConfig) -> Self {
        CsvLoader {
            config,
            delimiter: b',',
        }
    }

    /// Validate `field` as the category column
    pub fn with_category_field<S: Into<String>>(mut self, field: S) -> Self {
        self.config.category_field = Some(field.into());
        self
    }

    /// Use a different field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load from an in-memory string
    pub fn load_str(&self, content: &str) -> Result<Dataset> {
        self.load_from_reader(content.as_bytes())
    }
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}

impl DataLoader for CsvLoader {
    fn load_from_reader<R: Read>(&self, reader: R) -> Result<Dataset> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if columns.is_empty() {
            return Err(PrepError::data_loading("CSV input has no header columns"));
        }

        let mut rows = Vec::new();
        for (line, result) in reader.records().enumerate() {
            if self.config.max_rows.is_some_and(|max| rows.len() >= max) {
                break;
            }
            let record = result.map_err(|e| {
                PrepError::data_loading(format!("CSV parsing error at record {}: {}", line + 1, e))
            })?;
            rows.push(record.iter().map(Value::parse).collect::<Vec<_>>());
        }

        let dataset = Dataset::new(columns, rows)?;
        finish_loading(dataset, &self.config, "csv")
    }

    fn config(&self) -> &LoaderConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RowId;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "prompt,completion,flag\n\
                          hello, world ,True\n\
                          2+2,4,0\n\
                          ,empty,1\n";

    #[test]
    fn test_load_csv_string() {
        let dataset = CsvLoader::default()
            .with_category_field("flag")
            .load_str(SAMPLE)
            .unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.columns().len(), 3);
        assert_eq!(dataset.value(0, "completion"), Some(&Value::from("world")));
        assert_eq!(dataset.value(1, "completion"), Some(&Value::Int(4)));
        assert_eq!(dataset.value(2, "prompt"), Some(&Value::Null));
        assert_eq!(
            dataset.category_values("flag").unwrap(),
            vec![true, false, true]
        );
        assert_eq!(dataset.metadata().format, "csv");
    }

    #[test]
    fn test_invalid_category_value() {
        let err = CsvLoader::default()
            .with_category_field("flag")
            .load_str("a,flag\n1,maybe\n")
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_missing_category_column() {
        let err = CsvLoader::default()
            .with_category_field("flag")
            .load_str("a,b\n1,2\n")
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_max_rows_and_delimiter() {
        let loader = CsvLoader::new(LoaderConfig {
            max_rows: Some(2),
            ..Default::default()
        })
        .with_delimiter(b';');
        let dataset = loader.load_str("x;y\n1;2\n3;4\n5;6\n").unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.row_ids(), vec![RowId(0), RowId(1)]);
    }

    #[test]
    fn test_load_csv_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dataset = CsvLoader::default().load(file.path()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert!(dataset.metadata().source_path.is_some());

        assert!(CsvLoader::default().load("/definitely/not/here.csv").is_err());
    }
}
