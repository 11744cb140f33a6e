//! Correlation Engine Implementation

use crate::matrix::{CorrelationMatrix, TargetCorrelations};
use crate::{statistics, CorrelationError};
use ndarray::Array2;
use spectral_table::ColumnTable;
use tracing::{debug, info, warn};

/// Computes absolute Pearson correlation matrices over columnar tables.
///
/// Pure: inputs are never mutated and no IO happens here. The dominant
/// cost is the feature matrix at O(p^2 * n); callers persist the result
/// and reuse it across selection runs rather than recomputing.
pub struct CorrelationEngine;

impl CorrelationEngine {
    /// Create a new engine
    pub fn new() -> Self {
        Self
    }

    /// Symmetric p x p matrix of |pearson| between every feature pair.
    ///
    /// The upper triangle is computed once and mirrored into the lower,
    /// so (i, j) and (j, i) always hold the same value. The diagonal is
    /// set to 1.0 explicitly; zero-variance columns correlate 0.0 with
    /// every other column.
    pub fn feature_matrix(&self, x: &ColumnTable) -> CorrelationMatrix {
        let p = x.n_cols();
        let n = x.n_rows();
        debug!("computing {}x{} feature correlations over {} rows", p, p, n);

        self.warn_degenerate(x, "feature");

        let mut values = Array2::zeros((p, p));
        for i in 0..p {
            values[[i, i]] = 1.0;
            for j in (i + 1)..p {
                let r = statistics::pearson(x.column(i), x.column(j)).abs().min(1.0);
                values[[i, j]] = r;
                values[[j, i]] = r;
            }
        }

        CorrelationMatrix::new(x.names().to_vec(), values)
    }

    /// p x k matrix of |pearson| between every feature and every target.
    ///
    /// Fails when the tables are not row-aligned; empty tables produce an
    /// empty matrix rather than an error.
    pub fn target_matrix(
        &self,
        x: &ColumnTable,
        y: &ColumnTable,
    ) -> Result<TargetCorrelations, CorrelationError> {
        self.check_alignment(x, y)?;

        let p = x.n_cols();
        let k = y.n_cols();
        debug!("computing {}x{} target correlations", p, k);

        self.warn_degenerate(y, "target");

        let mut values = Array2::zeros((p, k));
        for i in 0..p {
            for t in 0..k {
                values[[i, t]] = statistics::pearson(x.column(i), y.column(t)).abs().min(1.0);
            }
        }

        Ok(TargetCorrelations::new(
            x.names().to_vec(),
            y.names().to_vec(),
            values,
        ))
    }

    /// Both matrices at once, validating row alignment up front
    pub fn compute(
        &self,
        x: &ColumnTable,
        y: &ColumnTable,
    ) -> Result<(CorrelationMatrix, TargetCorrelations), CorrelationError> {
        self.check_alignment(x, y)?;
        let xx = self.feature_matrix(x);
        let xy = self.target_matrix(x, y)?;
        info!(
            "computed correlations: {} features, {} targets, {} rows",
            xx.len(),
            xy.n_targets(),
            x.n_rows()
        );
        Ok((xx, xy))
    }

    fn check_alignment(&self, x: &ColumnTable, y: &ColumnTable) -> Result<(), CorrelationError> {
        // An empty side has no rows to align
        if !x.is_empty() && !y.is_empty() && x.n_rows() != y.n_rows() {
            return Err(CorrelationError::RowCountMismatch {
                x_rows: x.n_rows(),
                y_rows: y.n_rows(),
            });
        }
        Ok(())
    }

    fn warn_degenerate(&self, table: &ColumnTable, role: &str) {
        if table.n_rows() < 2 {
            if !table.is_empty() {
                debug!(
                    "{} table has {} rows; all correlations are degenerate",
                    role,
                    table.n_rows()
                );
            }
            return;
        }
        for (name, column) in table.iter() {
            if statistics::is_constant(column) {
                warn!(
                    "{} column '{}' has zero variance; correlations default to 0",
                    role, name
                );
            }
        }
    }
}

impl Default for CorrelationEngine {
    fn default() -> Self {
        Self::new()
    }
}
