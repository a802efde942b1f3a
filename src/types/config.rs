//! Run configuration
//!
//! `NormalizerConfig` carries everything a run needs: the two paths, both
//! delimiters, the target columns and the missing-value policy. It is built
//! and validated from CLI arguments by `CliArgs::to_config`.

use crate::types::NormalizeError;
use clap::ValueEnum;
use std::path::PathBuf;

/// Default input file (the Olist order reviews export)
pub const DEFAULT_INPUT: &str = "olist_order_reviews_dataset.csv";

/// Default output file
pub const DEFAULT_OUTPUT: &str = "olist_order_reviews_CLEAN.csv";

/// Free-text columns normalized by default
pub const DEFAULT_COLUMNS: [&str; 2] = ["review_comment_title", "review_comment_message"];

/// Default records per batch for the streaming strategy
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Missing-value markers pandas recognizes by default, the empty string aside
pub const PANDAS_NA_VALUES: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Available processing strategies
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    #[default]
    InMemory,
    Streaming,
}

/// What to write when a free-text field is absent (empty in the input)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MissingPolicy {
    /// Write the literal `nan`
    #[default]
    Nan,
    /// Keep the field empty
    Empty,
}

impl MissingPolicy {
    /// Text written in place of an absent value
    pub fn placeholder(self) -> &'static str {
        match self {
            MissingPolicy::Nan => "nan",
            MissingPolicy::Empty => "",
        }
    }
}

/// Validated configuration for one normalization run
#[derive(Clone, Debug)]
pub struct NormalizerConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub input_delimiter: u8,
    pub output_delimiter: u8,
    pub columns: Vec<String>,
    pub missing: MissingPolicy,
    /// Free-text values treated as absent besides the empty field
    pub na_values: Vec<String>,
    pub strategy: StrategyType,
    pub batch_size: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            input_delimiter: b',',
            output_delimiter: b'|',
            columns: DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            missing: MissingPolicy::default(),
            na_values: Vec::new(),
            strategy: StrategyType::default(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl NormalizerConfig {
    /// Check the invariants the readers and writers rely on
    ///
    /// Delimiters must not collide with the quote character or a line
    /// break, and the column list must name at least one non-blank column.
    pub fn validate(&self) -> Result<(), NormalizeError> {
        check_delimiter("input", self.input_delimiter)?;
        check_delimiter("output", self.output_delimiter)?;

        if self.columns.is_empty() {
            return Err(NormalizeError::invalid_config(
                "at least one target column is required",
            ));
        }
        if self.columns.iter().any(|c| c.trim().is_empty()) {
            return Err(NormalizeError::invalid_config(
                "target column names must not be blank",
            ));
        }

        Ok(())
    }
}

fn check_delimiter(which: &str, delimiter: u8) -> Result<(), NormalizeError> {
    match delimiter {
        b'"' | b'\n' | b'\r' => Err(NormalizeError::invalid_config(format!(
            "{} delimiter {:?} conflicts with quoting or record separators",
            which, delimiter as char
        ))),
        _ => Ok(()),
    }
}

/// Parse a delimiter argument into a single ASCII byte
///
/// Accepts one ASCII character, or `\t` / `tab` for a tab.
pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "\\t" | "tab" => return Ok(b'\t'),
        _ => {}
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(format!(
            "delimiter must be a single ASCII character, got '{}'",
            value
        )),
    }
}
