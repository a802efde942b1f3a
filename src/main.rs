//! Review Normalizer CLI
//!
//! Command-line interface for cleaning line breaks out of free-text CSV
//! columns and re-delimiting the file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- olist_order_reviews_dataset.csv -o olist_order_reviews_CLEAN.csv
//! cargo run -- --strategy streaming --batch-size 5000 reviews.csv -o reviews_clean.csv
//! cargo run -- --columns title,body --missing empty --output-delimiter tab posts.csv -o posts.tsv
//! cargo run -- --pandas-na olist_order_reviews_dataset.csv
//! ```
//!
//! The program reads the input CSV, normalizes the target columns, writes
//! the result atomically to the output path and prints one confirmation
//! line to stdout. Logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, parse error, missing column, unwritable output, etc.)

use review_normalizer::cli;
use review_normalizer::strategy;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    let config = match args.to_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let strategy = strategy::create_strategy(&config);

    match strategy.process(&config.input_path, &config.output_path) {
        Ok(summary) => println!(
            "Clean file written: {} ({} records)",
            config.output_path.display(),
            summary.records
        ),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
