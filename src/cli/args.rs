use crate::types::config::{
    parse_delimiter, DEFAULT_BATCH_SIZE, DEFAULT_COLUMNS, DEFAULT_INPUT, DEFAULT_OUTPUT,
    PANDAS_NA_VALUES,
};
use crate::types::{MissingPolicy, NormalizeError, NormalizerConfig, StrategyType};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::Level;

/// Normalize line breaks in free-text CSV columns and re-delimit the file
#[derive(Parser, Debug)]
#[command(name = "review-normalizer")]
#[command(
    about = "Normalize line breaks in free-text CSV columns and re-delimit the file",
    long_about = None
)]
pub struct CliArgs {
    /// Input CSV file path
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT, help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Output file path
    #[arg(
        short = 'o',
        long = "output",
        value_name = "OUTPUT",
        default_value = DEFAULT_OUTPUT,
        help = "Path of the normalized output file (replaced atomically)"
    )]
    pub output_file: PathBuf,

    /// Input field delimiter
    #[arg(
        long = "input-delimiter",
        value_name = "CHAR",
        default_value = ",",
        value_parser = parse_delimiter,
        help = "Input field delimiter (single ASCII character, or 'tab')"
    )]
    pub input_delimiter: u8,

    /// Output field delimiter
    #[arg(
        long = "output-delimiter",
        value_name = "CHAR",
        default_value = "|",
        value_parser = parse_delimiter,
        help = "Output field delimiter (single ASCII character, or 'tab')"
    )]
    pub output_delimiter: u8,

    /// Free-text columns to normalize
    #[arg(
        long = "columns",
        value_name = "NAMES",
        value_delimiter = ',',
        default_values = DEFAULT_COLUMNS,
        help = "Comma-separated list of free-text columns to normalize"
    )]
    pub columns: Vec<String>,

    /// What to write for absent free-text values
    #[arg(
        long = "missing",
        value_name = "POLICY",
        default_value = "nan",
        help = "Placeholder for absent values: 'nan' or 'empty'"
    )]
    pub missing: MissingPolicy,

    /// Free-text values to treat as absent
    #[arg(
        long = "na-values",
        value_name = "VALUES",
        value_delimiter = ',',
        help = "Comma-separated free-text values written as absent (e.g. 'NA,null')"
    )]
    pub na_values: Vec<String>,

    /// Treat pandas' default missing-value markers as absent
    #[arg(
        long = "pandas-na",
        help = "Also treat pandas' default markers (NA, N/A, null, NaN, None, ...) as absent"
    )]
    pub pandas_na: bool,

    /// Processing strategy
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "in-memory",
        help = "Processing strategy: 'in-memory' loads the whole file, 'streaming' works in batches"
    )]
    pub strategy: StrategyType,

    /// Number of records per batch (streaming mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of records per batch in streaming mode (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl CliArgs {
    /// Build a validated NormalizerConfig from CLI arguments
    pub fn to_config(&self) -> Result<NormalizerConfig, NormalizeError> {
        let mut na_values = self.na_values.clone();
        if self.pandas_na {
            na_values.extend(PANDAS_NA_VALUES.iter().map(|value| value.to_string()));
        }

        let config = NormalizerConfig {
            input_path: self.input_file.clone(),
            output_path: self.output_file.clone(),
            input_delimiter: self.input_delimiter,
            output_delimiter: self.output_delimiter,
            columns: self
                .columns
                .iter()
                .map(|column| column.trim().to_string())
                .collect(),
            missing: self.missing,
            na_values,
            strategy: self.strategy,
            batch_size: self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE),
        };

        config.validate()?;
        Ok(config)
    }

    /// Maximum log level selected by `-v` / `-q`
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
