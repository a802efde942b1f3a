//! In-memory processing strategy
//!
//! Loads the whole input into a [`Dataset`](crate::types::Dataset),
//! normalizes it in place and serializes it to a staged output file. This
//! is the default strategy.
//!
//! # Design
//!
//! The InMemoryProcessingStrategy focuses on orchestration, delegating:
//! - CSV parsing to `SyncReader::read_dataset`
//! - Field rewriting to `RecordNormalizer`
//! - CSV output to `csv_format::write_dataset`
//! - Atomic replacement to `AtomicOutput`

use crate::core::{NormalizeSummary, RecordNormalizer};
use crate::io::csv_format::write_dataset;
use crate::io::{AtomicOutput, SyncReader};
use crate::strategy::{FormatOptions, ProcessingStrategy};
use crate::types::NormalizeError;
use std::path::Path;
use tracing::info;

/// Whole-file processing strategy
///
/// # Examples
///
/// ```no_run
/// use review_normalizer::strategy::{FormatOptions, InMemoryProcessingStrategy, ProcessingStrategy};
/// use review_normalizer::types::NormalizerConfig;
/// use std::path::Path;
///
/// let config = NormalizerConfig::default();
/// let strategy = InMemoryProcessingStrategy::new(FormatOptions::from(&config));
///
/// strategy
///     .process(Path::new("reviews.csv"), Path::new("reviews_clean.csv"))
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryProcessingStrategy {
    options: FormatOptions,
}

impl InMemoryProcessingStrategy {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }
}

impl ProcessingStrategy for InMemoryProcessingStrategy {
    /// Run the in-memory pipeline
    ///
    /// 1. Reads the header and every record into a Dataset
    /// 2. Binds a RecordNormalizer to the header
    /// 3. Normalizes the dataset in place
    /// 4. Writes it to a staged file and renames it over the target
    fn process(
        &self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<NormalizeSummary, NormalizeError> {
        let mut dataset = SyncReader::new(input_path, self.options.input_delimiter)?.read_dataset()?;

        let normalizer = RecordNormalizer::for_headers(
            dataset.headers.iter(),
            &self.options.columns,
            self.options.missing,
        )?
        .with_na_values(self.options.na_values.clone());
        let summary = normalizer.normalize_dataset(&mut dataset);

        let mut output = AtomicOutput::create(output_path)?;
        write_dataset(&dataset, output.file(), self.options.output_delimiter)
            .map_err(|e| NormalizeError::output_write(output_path, e))?;
        output.commit()?;

        info!(
            records = summary.records,
            columns = summary.columns,
            normalized_fields = summary.normalized_fields,
            output = %output_path.display(),
            "In-memory normalization complete"
        );

        Ok(summary)
    }
}
