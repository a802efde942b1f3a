//! Benchmark suite for comparing processing strategies
//!
//! This benchmark compares the in-memory and streaming strategies using the
//! divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! # Benchmark Datasets
//!
//! Datasets are generated once per run in a temporary directory, in the
//! shape of the Olist reviews export:
//! - small: 100 reviews
//! - medium: 10,000 reviews
//! - large: 200,000 reviews
//!
//! Every third review has a multi-line message and every fifth has no title.

use review_normalizer::strategy::create_strategy;
use review_normalizer::types::{NormalizerConfig, StrategyType};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;
use tempfile::TempDir;

fn main() {
    divan::main();
}

struct Datasets {
    dir: TempDir,
}

impl Datasets {
    fn input(&self, rows: usize) -> PathBuf {
        self.dir.path().join(format!("reviews_{}.csv", rows))
    }

    fn output(&self, rows: usize, strategy: StrategyType) -> PathBuf {
        self.dir
            .path()
            .join(format!("clean_{}_{:?}.csv", rows, strategy))
    }
}

const SIZES: [usize; 3] = [100, 10_000, 200_000];

fn generate(rows: usize) -> String {
    let mut csv = String::from(
        "review_id,order_id,review_score,review_comment_title,review_comment_message,review_creation_date,review_answer_timestamp\n",
    );
    for i in 0..rows {
        let title = if i % 5 == 0 { "" } else { "recomendo" };
        let message = if i % 3 == 0 {
            "\"Chegou antes do prazo.\r\nProduto, embalagem e \"\"nota\"\" ok\n\""
        } else {
            "Produto conforme o anunciado"
        };
        writeln!(
            csv,
            "{:032x},{:032x},{},{},{},2018-01-18 00:00:00,2018-01-18 21:46:59",
            i,
            i * 7,
            i % 5 + 1,
            title,
            message
        )
        .unwrap();
    }
    csv
}

fn datasets() -> &'static Datasets {
    static DATASETS: OnceLock<Datasets> = OnceLock::new();
    DATASETS.get_or_init(|| {
        let dir = TempDir::new().expect("Failed to create benchmark dir");
        let datasets = Datasets { dir };
        for rows in SIZES {
            fs::write(datasets.input(rows), generate(rows)).expect("Failed to write dataset");
        }
        datasets
    })
}

fn run(rows: usize, strategy: StrategyType) {
    let datasets = datasets();
    let config = NormalizerConfig {
        strategy,
        ..NormalizerConfig::default()
    };

    create_strategy(&config)
        .process(&datasets.input(rows), &datasets.output(rows, strategy))
        .expect("Processing failed");
}

/// Benchmark the in-memory strategy
#[divan::bench(args = SIZES)]
fn in_memory_strategy(rows: usize) {
    run(rows, StrategyType::InMemory);
}

/// Benchmark the streaming strategy
#[divan::bench(args = SIZES)]
fn streaming_strategy(rows: usize) {
    run(rows, StrategyType::Streaming);
}
