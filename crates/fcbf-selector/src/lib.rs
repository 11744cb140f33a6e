//! FCBF Feature Selection
//!
//! Greedy correlation-based filter reducing wide feature tables to a
//! maximal-relevance, minimal-redundancy subset.

mod mask;
mod selector;
mod thresholds;

pub use mask::SelectionMask;
pub use selector::FcbfSelector;
pub use thresholds::SelectionThresholds;

use thiserror::Error;

/// Errors during selection
#[derive(Debug, Error, PartialEq)]
pub enum SelectorError {
    #[error("Threshold {name} out of range: {value} (must lie in [0, 1])")]
    ThresholdOutOfRange { name: &'static str, value: f64 },
    #[error("Feature count mismatch: matrix covers {matrix} features, relevance covers {relevance}")]
    FeatureCountMismatch { matrix: usize, relevance: usize },
    #[error("Mask length mismatch: {names} names for {flags} flags")]
    MaskLengthMismatch { names: usize, flags: usize },
}
