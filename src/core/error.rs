//! Error handling and error types for finetune-prep.
//!
//! Sampling and splitting report a single failure kind, `InvalidArgument`.
//! The remaining variants belong to the ambient layers: configuration files,
//! dataset loaders and the optional DataFrame adapter.

use std::io;
use thiserror::Error;

/// Main error type for the finetune-prep library.
#[derive(Error, Debug)]
pub enum PrepError {
    /// Caller supplied arguments that violate an operation's constraints
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Configuration and validation errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Data loading and parsing errors
    #[error("Data loading error: {message}")]
    DataLoading { message: String },

    /// File I/O errors
    #[error("I/O error: {source}")]
    IO {
        #[from]
        source: io::Error,
    },

    /// CSV parsing errors
    #[cfg(feature = "csv")]
    #[error("CSV parsing error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// DataFrame errors
    #[cfg(feature = "polars")]
    #[error("Polars error: {source}")]
    Polars {
        #[from]
        source: polars::error::PolarsError,
    },
}

/// Type alias for Results using PrepError
pub type Result<T> = std::result::Result<T, PrepError>;

impl PrepError {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        PrepError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        PrepError::Config {
            message: message.into(),
        }
    }

    /// Create a data loading error
    pub fn data_loading<S: Into<String>>(message: S) -> Self {
        PrepError::DataLoading {
            message: message.into(),
        }
    }

    /// Whether this error was raised by argument validation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PrepError::InvalidArgument { .. })
    }

    /// Get the error category as a string
    pub fn category(&self) -> &'static str {
        match self {
            PrepError::InvalidArgument { .. } => "invalid_argument",
            PrepError::Config { .. } => "config",
            PrepError::DataLoading { .. } => "data_loading",
            PrepError::IO { .. } => "io",
            #[cfg(feature = "csv")]
            PrepError::Csv { .. } => "csv",
            PrepError::Json { .. } => "json",
            #[cfg(feature = "polars")]
            PrepError::Polars { .. } => "polars",
        }
    }
}
