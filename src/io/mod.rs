//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV dialect handling (reader/writer builders, dataset serialization)
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface
//! - `atomic_output` - Write-then-rename output staging

pub mod async_reader;
pub mod atomic_output;
pub mod csv_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use atomic_output::AtomicOutput;
pub use csv_format::write_dataset;
pub use sync_reader::SyncReader;
