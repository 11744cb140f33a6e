//! Correlation Engine
//!
//! Computes the absolute Pearson correlation structure of a spectral
//! feature table: a symmetric feature-feature matrix (CorrXX) and a
//! feature-target matrix (CorrXy), the two inputs of FCBF selection.

mod engine;
mod matrix;
pub mod statistics;

pub use engine::CorrelationEngine;
pub use matrix::{CorrelationMatrix, TargetCorrelations};

use thiserror::Error;

/// Errors raised while building correlation matrices
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorrelationError {
    /// Feature and target tables are not row-aligned
    #[error("feature table has {x_rows} rows but target table has {y_rows}")]
    RowCountMismatch { x_rows: usize, y_rows: usize },

    /// Matrix dimensions disagree with the supplied name list
    #[error("{names} names given for a matrix of dimension {dim}")]
    NameCountMismatch { names: usize, dim: usize },

    /// A feature-feature matrix must be square
    #[error("feature matrix is {rows}x{cols}, expected square")]
    NotSquare { rows: usize, cols: usize },
}
