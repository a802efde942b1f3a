//! CSV format handling for input parsing and output serialization
//!
//! This module centralizes all CSV dialect concerns, providing:
//! - Reader builders for the input dialect (sync and async)
//! - Writer builders for the output dialect with minimal quoting
//! - Dataset serialization
//!
//! Both strategies build their readers and writers here; their output must
//! stay byte-identical.

use crate::types::Dataset;
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use std::io::Write;

/// Quote character for both input and output
pub const QUOTE: u8 = b'"';

/// Sync reader builder for the input dialect
///
/// The reader is configured to:
/// - Require a header row
/// - Reject records whose field count differs from the header
/// - Keep whitespace verbatim (no trimming)
/// - Treat quoted `\n` / `\r` as field data
pub fn reader_builder(delimiter: u8) -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(delimiter)
        .quote(QUOTE)
        .double_quote(true)
        .has_headers(true)
        .flexible(false)
        .buffer_capacity(8 * 1024);
    builder
}

/// Sync writer builder for the output dialect
///
/// Fields are quoted only when they contain the delimiter, the quote
/// character or a line break. Records end with `\n`.
pub fn writer_builder(delimiter: u8) -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .delimiter(delimiter)
        .quote(QUOTE)
        .double_quote(true)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'));
    builder
}

/// Async reader builder, same dialect as [`reader_builder`]
pub fn async_reader_builder(delimiter: u8) -> csv_async::AsyncReaderBuilder {
    let mut builder = csv_async::AsyncReaderBuilder::new();
    builder
        .delimiter(delimiter)
        .quote(QUOTE)
        .double_quote(true)
        .has_headers(true)
        .flexible(false);
    builder
}

/// Async writer builder, same dialect as [`writer_builder`]
pub fn async_writer_builder(delimiter: u8) -> csv_async::AsyncWriterBuilder {
    let mut builder = csv_async::AsyncWriterBuilder::new();
    builder
        .delimiter(delimiter)
        .quote(QUOTE)
        .double_quote(true)
        .quote_style(csv_async::QuoteStyle::Necessary)
        .terminator(csv_async::Terminator::Any(b'\n'));
    builder
}

/// Write a dataset (header first) in the output dialect
///
/// # Arguments
///
/// * `dataset` - Header and records to serialize
/// * `output` - Mutable reference to a writer for the serialized bytes
/// * `delimiter` - Output field delimiter
pub fn write_dataset(
    dataset: &Dataset,
    output: &mut dyn Write,
    delimiter: u8,
) -> Result<(), csv::Error> {
    let mut writer = writer_builder(delimiter).from_writer(output);

    writer.write_record(&dataset.headers)?;
    for record in &dataset.records {
        writer.write_record(record)?;
    }

    writer.flush()?;
    Ok(())
}
