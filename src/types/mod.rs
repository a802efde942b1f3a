//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `config`: Run configuration and the missing-value policy
//! - `dataset`: In-memory header plus records
//! - `error`: Error types for the normalizer

pub mod config;
pub mod dataset;
pub mod error;

pub use config::{MissingPolicy, NormalizerConfig, StrategyType};
pub use dataset::Dataset;
pub use error::NormalizeError;
