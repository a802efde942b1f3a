//! Processing strategy module
//!
//! This module defines the Strategy pattern for complete normalization
//! pipelines: reading the input, normalizing the free-text columns and
//! writing the output atomically. Implementations (in-memory, streaming)
//! are selected at runtime and produce identical output.

use crate::core::NormalizeSummary;
use crate::types::{MissingPolicy, NormalizeError, NormalizerConfig, StrategyType};
use std::path::Path;

pub mod in_memory;
pub mod streaming;

pub use in_memory::InMemoryProcessingStrategy;
pub use streaming::StreamingProcessingStrategy;

/// Processing strategy trait for complete normalization pipelines
pub trait ProcessingStrategy: Send + Sync {
    /// Normalize `input_path` and write the result to `output_path`
    ///
    /// The output file is only created (or replaced) once every record has
    /// been written; on error any existing file at `output_path` is left as
    /// it was.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (file not found, permission denied)
    /// - The input has no header, or a target column is missing from it
    /// - A record is malformed or not valid UTF-8
    /// - The output cannot be staged, written or renamed into place
    fn process(
        &self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<NormalizeSummary, NormalizeError>;
}

/// Format options shared by every strategy
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    pub input_delimiter: u8,
    pub output_delimiter: u8,
    pub columns: Vec<String>,
    pub missing: MissingPolicy,
    pub na_values: Vec<String>,
}

impl From<&NormalizerConfig> for FormatOptions {
    fn from(config: &NormalizerConfig) -> Self {
        Self {
            input_delimiter: config.input_delimiter,
            output_delimiter: config.output_delimiter,
            columns: config.columns.clone(),
            missing: config.missing,
            na_values: config.na_values.clone(),
        }
    }
}

/// Create a processing strategy for a validated configuration
///
/// # Returns
///
/// A boxed trait object implementing the ProcessingStrategy trait
pub fn create_strategy(config: &NormalizerConfig) -> Box<dyn ProcessingStrategy> {
    let options = FormatOptions::from(config);
    match config.strategy {
        StrategyType::InMemory => Box::new(InMemoryProcessingStrategy::new(options)),
        StrategyType::Streaming => {
            Box::new(StreamingProcessingStrategy::new(options, config.batch_size))
        }
    }
}
