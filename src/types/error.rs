//! Error types for the review normalizer
//!
//! This module defines every error that can abort a normalization run.
//! None of them are recoverable: the first error stops processing and is
//! reported to the user by `main`.
//!
//! # Error Categories
//!
//! - **Input Errors**: File not found, unreadable file, missing header row
//! - **CSV Parsing Errors**: Malformed quoting, invalid UTF-8, ragged records
//! - **Schema Errors**: A target column is not present in the header
//! - **Configuration Errors**: Rejected delimiter or column list
//! - **Output Errors**: Temporary file creation, write, sync or rename failures

use std::path::Path;
use thiserror::Error;

/// Main error type for the normalizer
///
/// Each variant carries enough context to be printed directly as the
/// diagnostic line of a failed run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    /// Input file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading the input
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Covers malformed quoting, invalid UTF-8 and records whose field count
    /// differs from the header.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// The input file has no header row
    #[error("Missing header row in {path}")]
    MissingHeader {
        /// The input path
        path: String,
    },

    /// A target column is not declared in the header row
    #[error("Column '{column}' not found in header")]
    ColumnNotFound {
        /// The missing column name
        column: String,
    },

    /// A configuration value was rejected
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Why the value was rejected
        message: String,
    },

    /// The output file could not be written
    #[error("Failed to write output '{path}': {message}")]
    OutputWrite {
        /// The output path
        path: String,
        /// Description of the underlying failure
        message: String,
    },
}

impl From<std::io::Error> for NormalizeError {
    fn from(error: std::io::Error) -> Self {
        NormalizeError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for NormalizeError {
    fn from(error: csv::Error) -> Self {
        if let csv::ErrorKind::Io(io_error) = error.kind() {
            return NormalizeError::IoError {
                message: io_error.to_string(),
            };
        }

        NormalizeError::ParseError {
            line: error.position().map(|pos| pos.line()),
            message: error.to_string(),
        }
    }
}

impl From<csv_async::Error> for NormalizeError {
    fn from(error: csv_async::Error) -> Self {
        if let csv_async::ErrorKind::Io(io_error) = error.kind() {
            return NormalizeError::IoError {
                message: io_error.to_string(),
            };
        }

        NormalizeError::ParseError {
            line: error.position().map(|pos| pos.line()),
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl NormalizeError {
    /// Classify a failure to open the input file
    ///
    /// A missing file becomes `FileNotFound`; anything else (permissions,
    /// the path being a directory, ...) becomes `IoError` with the path in
    /// the message.
    pub fn open_input(path: &Path, error: &std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            NormalizeError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            NormalizeError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), error),
            }
        }
    }

    /// Create an OutputWrite error
    pub fn output_write(path: &Path, error: impl std::fmt::Display) -> Self {
        NormalizeError::OutputWrite {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create a MissingHeader error
    pub fn missing_header(path: &Path) -> Self {
        NormalizeError::MissingHeader {
            path: path.display().to_string(),
        }
    }

    /// Create a ColumnNotFound error
    pub fn column_not_found(column: &str) -> Self {
        NormalizeError::ColumnNotFound {
            column: column.to_string(),
        }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        NormalizeError::InvalidConfig {
            message: message.into(),
        }
    }
}
