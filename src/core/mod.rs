//! Core normalization logic
//!
//! This module contains the business logic:
//! - `normalize` - pure text substitution for a single field
//! - `normalizer` - column selection and record/dataset normalization

pub mod normalize;
pub mod normalizer;

pub use normalize::{normalize_field, normalize_text};
pub use normalizer::{ColumnSelection, NormalizeSummary, NormalizedRecord, RecordNormalizer};
