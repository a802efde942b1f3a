//! Asynchronous CSV reader with batch interface
//!
//! Reads the input in batches of records for the streaming strategy, so at
//! most one batch is held in memory at a time.
//!
//! # Architecture
//!
//! ```text
//! tokio::fs::File → compat → AsyncReader → Vec<StringRecord> batches
//!                                 ↓
//!                          csv_format module
//!                      (async_reader_builder)
//! ```

use crate::io::csv_format::async_reader_builder;
use crate::types::NormalizeError;
use csv_async::StringRecord;
use futures::io::AsyncRead;

/// Asynchronous CSV reader
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncReader<R>,
}

impl<R: AsyncRead + Unpin + Send> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    ///
    /// # Arguments
    ///
    /// * `reader` - Async reader providing CSV data
    /// * `delimiter` - Input field delimiter
    pub fn new(reader: R, delimiter: u8) -> Self {
        let csv_reader = async_reader_builder(delimiter).create_reader(reader);
        Self { csv_reader }
    }

    /// Read the header row
    ///
    /// Returns an empty record when the input is empty; the caller decides
    /// whether that is an error.
    pub async fn headers(&mut self) -> Result<StringRecord, NormalizeError> {
        Ok(self.csv_reader.headers().await?.clone())
    }

    /// Read up to `batch_size` records
    ///
    /// Returns an empty vector once the end of the input is reached. The
    /// first malformed record aborts the batch with a `ParseError`.
    pub async fn read_batch(
        &mut self,
        batch_size: usize,
    ) -> Result<Vec<StringRecord>, NormalizeError> {
        let mut batch = Vec::with_capacity(batch_size);

        while batch.len() < batch_size {
            let mut record = StringRecord::new();
            if !self.csv_reader.read_record(&mut record).await? {
                break;
            }
            batch.push(record);
        }

        Ok(batch)
    }
}
