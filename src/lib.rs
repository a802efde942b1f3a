//! Review Normalizer Library
//! # Overview
//!
//! This library cleans free-text columns of a CSV export (by default the
//! Olist `order_reviews` dataset) so that every record fits on one line, and
//! rewrites the file with a new field delimiter.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Dataset, NormalizerConfig, NormalizeError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::normalize`] - Line-break substitution for a single field
//!   - [`core::normalizer`] - Column selection and record normalization
//! - [`io`] - CSV readers, dialect configuration and atomic output
//! - [`strategy`] - In-memory and streaming processing pipelines
//!
//! # Normalization Rules
//!
//! For every designated free-text column:
//!
//! - **Line feed** (`\n`): replaced with a single space
//! - **Carriage return** (`\r`): removed
//! - **Absent value** (empty field, or a configured marker such as `NA`):
//!   written as `nan` (or left empty with
//!   [`types::MissingPolicy::Empty`])
//!
//! All other columns, the header row and the record order are preserved.
//! The output uses minimal quoting: a field is quoted only if it contains
//! the delimiter, a quote character or a line break.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{normalize_field, normalize_text, NormalizeSummary, RecordNormalizer};
pub use io::write_dataset;
pub use types::{Dataset, MissingPolicy, NormalizeError, NormalizerConfig};
