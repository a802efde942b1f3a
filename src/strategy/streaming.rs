//! Streaming processing strategy
//!
//! Reads the input in batches with csv-async, normalizes each batch and
//! writes it straight to the staged output, so memory use is bounded by the
//! batch size instead of the file size.
//!
//! # Architecture
//!
//! ```text
//! StreamingProcessingStrategy
//!     ├── batch_size
//!     ├── AsyncReader (batch CSV reading)
//!     ├── RecordNormalizer (per-record rewriting)
//!     └── csv_async::AsyncWriter → AtomicOutput (staged, renamed on commit)
//! ```
//!
//! Batches are processed strictly in order on a current-thread runtime, so
//! record order is the same as in the input.

use crate::core::{NormalizeSummary, RecordNormalizer};
use crate::io::csv_format::async_writer_builder;
use crate::io::{AsyncReader, AtomicOutput};
use crate::strategy::{FormatOptions, ProcessingStrategy};
use crate::types::config::DEFAULT_BATCH_SIZE;
use crate::types::NormalizeError;
use std::path::Path;
use tokio_util::compat::{TokioAsyncReadCompatExt, TokioAsyncWriteCompatExt};
use tracing::{debug, info, warn};

/// Batch-at-a-time processing strategy
#[derive(Debug, Clone)]
pub struct StreamingProcessingStrategy {
    options: FormatOptions,
    batch_size: usize,
}

impl StreamingProcessingStrategy {
    /// Create a streaming strategy
    ///
    /// A zero `batch_size` falls back to the default with a warning.
    pub fn new(options: FormatOptions, batch_size: usize) -> Self {
        let batch_size = if batch_size == 0 {
            warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size, DEFAULT_BATCH_SIZE
            );
            DEFAULT_BATCH_SIZE
        } else {
            batch_size
        };

        Self {
            options,
            batch_size,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    async fn run(
        &self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<NormalizeSummary, NormalizeError> {
        let file = tokio::fs::File::open(input_path)
            .await
            .map_err(|e| NormalizeError::open_input(input_path, &e))?;
        let mut reader = AsyncReader::new(file.compat(), self.options.input_delimiter);

        let headers = reader.headers().await?;
        if headers.is_empty() {
            return Err(NormalizeError::missing_header(input_path));
        }

        let normalizer = RecordNormalizer::for_headers(
            headers.iter(),
            &self.options.columns,
            self.options.missing,
        )?
        .with_na_values(self.options.na_values.clone());

        let output = AtomicOutput::create(output_path)?;
        let staged = tokio::fs::File::from_std(output.reopen()?);
        let mut writer =
            async_writer_builder(self.options.output_delimiter).create_writer(staged.compat_write());

        let write_error = |e: csv_async::Error| NormalizeError::output_write(output_path, e);

        writer.write_record(&headers).await.map_err(write_error)?;

        let mut summary = NormalizeSummary {
            columns: headers.len(),
            ..NormalizeSummary::default()
        };

        loop {
            let batch = reader.read_batch(self.batch_size).await?;
            if batch.is_empty() {
                break;
            }

            for record in &batch {
                let normalized = normalizer.normalize_record(record.iter());
                writer
                    .write_record(&normalized.fields)
                    .await
                    .map_err(write_error)?;
                summary.record(&normalized);
            }

            debug!(batch = batch.len(), total = summary.records, "Wrote batch");
        }

        writer
            .flush()
            .await
            .map_err(|e| NormalizeError::output_write(output_path, e))?;
        drop(writer);

        output.commit()?;
        Ok(summary)
    }
}

impl ProcessingStrategy for StreamingProcessingStrategy {
    /// Run the streaming pipeline on a current-thread tokio runtime
    fn process(
        &self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<NormalizeSummary, NormalizeError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .map_err(|e| NormalizeError::IoError {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        let summary = runtime.block_on(self.run(input_path, output_path))?;

        info!(
            records = summary.records,
            columns = summary.columns,
            normalized_fields = summary.normalized_fields,
            batch_size = self.batch_size,
            output = %output_path.display(),
            "Streaming normalization complete"
        );

        Ok(summary)
    }
}
