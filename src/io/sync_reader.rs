//! Synchronous CSV reader with iterator interface
//!
//! Provides an iterator over the records of the input file, plus
//! [`SyncReader::read_dataset`] which materializes the whole file for the
//! in-memory strategy. Dialect configuration comes from `csv_format`.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<StringRecord, NormalizeError>` for each CSV row:
//!
//! ```no_run
//! use review_normalizer::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let mut reader = SyncReader::new(Path::new("reviews.csv"), b',').unwrap();
//! println!("columns: {:?}", reader.headers().unwrap());
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("{:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal open errors (file not found, permissions) are returned from `new()`
//! - Parse errors carry the line number of the offending record
//! - `read_dataset` stops at the first error

use crate::io::csv_format::reader_builder;
use crate::types::{Dataset, NormalizeError};
use csv::StringRecord;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Synchronous CSV reader
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    path: PathBuf,
    records_read: usize,
}

impl SyncReader {
    /// Open a CSV file for reading
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV file
    /// * `delimiter` - Input field delimiter
    ///
    /// # Returns
    ///
    /// * `Ok(SyncReader)` if the file opened successfully
    /// * `Err(NormalizeError::FileNotFound)` if it does not exist
    /// * `Err(NormalizeError::IoError)` for any other open failure
    pub fn new(path: &Path, delimiter: u8) -> Result<Self, NormalizeError> {
        let file = File::open(path).map_err(|e| NormalizeError::open_input(path, &e))?;

        Ok(Self {
            reader: reader_builder(delimiter).from_reader(file),
            path: path.to_path_buf(),
            records_read: 0,
        })
    }

    /// Read the header row
    ///
    /// Fails with `MissingHeader` when the file is empty.
    pub fn headers(&mut self) -> Result<StringRecord, NormalizeError> {
        let headers = self.reader.headers()?.clone();
        if headers.is_empty() {
            return Err(NormalizeError::missing_header(&self.path));
        }
        Ok(headers)
    }

    /// Records yielded so far
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Read the header and every record into memory
    pub fn read_dataset(mut self) -> Result<Dataset, NormalizeError> {
        let headers = self.headers()?;
        let records = self.by_ref().collect::<Result<Vec<_>, _>>()?;

        debug!(
            path = %self.path.display(),
            records = self.records_read(),
            columns = headers.len(),
            "Loaded dataset"
        );

        Ok(Dataset::new(headers, records))
    }
}

impl Iterator for SyncReader {
    type Item = Result<StringRecord, NormalizeError>;

    /// Get the next record from the CSV file
    ///
    /// # Returns
    ///
    /// * `Some(Ok(StringRecord))` - Successfully parsed record
    /// * `Some(Err(NormalizeError))` - Parse error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut record = StringRecord::new();

        match self.reader.read_record(&mut record) {
            Ok(true) => {
                self.records_read += 1;
                Some(Ok(record))
            }
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}
