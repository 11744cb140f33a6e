//! Correlation Matrix Containers

use crate::CorrelationError;
use ndarray::Array2;

/// Symmetric p x p matrix of absolute feature-feature correlations.
///
/// Entries lie in [0, 1]; the diagonal is pinned to exactly 1.0 (including
/// zero-variance features, which correlate 0 with everything else).
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    names: Vec<String>,
    values: Array2<f64>,
}

impl CorrelationMatrix {
    // Engine-internal constructor; shapes are correct by construction
    pub(crate) fn new(names: Vec<String>, values: Array2<f64>) -> Self {
        Self { names, values }
    }

    /// Rebuild a matrix from its parts (used when reloading artifacts)
    pub fn from_parts(names: Vec<String>, values: Array2<f64>) -> Result<Self, CorrelationError> {
        let (rows, cols) = values.dim();
        if rows != cols {
            return Err(CorrelationError::NotSquare { rows, cols });
        }
        if names.len() != rows {
            return Err(CorrelationError::NameCountMismatch {
                names: names.len(),
                dim: rows,
            });
        }
        Ok(Self { names, values })
    }

    /// Number of features (p)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the matrix covers zero features
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Correlation between features `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[[i, j]]
    }

    /// Feature names in table order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Raw matrix values
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }
}

/// p x k matrix of absolute feature-target correlations, one column per
/// target variable.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetCorrelations {
    feature_names: Vec<String>,
    target_names: Vec<String>,
    values: Array2<f64>,
}

impl TargetCorrelations {
    // Engine-internal constructor; shapes are correct by construction
    pub(crate) fn new(
        feature_names: Vec<String>,
        target_names: Vec<String>,
        values: Array2<f64>,
    ) -> Self {
        Self {
            feature_names,
            target_names,
            values,
        }
    }

    /// Rebuild from parts (used when reloading artifacts)
    pub fn from_parts(
        feature_names: Vec<String>,
        target_names: Vec<String>,
        values: Array2<f64>,
    ) -> Result<Self, CorrelationError> {
        let (rows, cols) = values.dim();
        if feature_names.len() != rows {
            return Err(CorrelationError::NameCountMismatch {
                names: feature_names.len(),
                dim: rows,
            });
        }
        if target_names.len() != cols {
            return Err(CorrelationError::NameCountMismatch {
                names: target_names.len(),
                dim: cols,
            });
        }
        Ok(Self {
            feature_names,
            target_names,
            values,
        })
    }

    /// Number of features (p)
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Number of targets (k)
    pub fn n_targets(&self) -> usize {
        self.target_names.len()
    }

    /// Correlation between feature `i` and target `t`
    pub fn get(&self, i: usize, t: usize) -> f64 {
        self.values[[i, t]]
    }

    /// Feature names in table order
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Target names in table order
    pub fn target_names(&self) -> &[String] {
        &self.target_names
    }

    /// Raw matrix values
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_from_parts_validates_square() {
        let err = CorrelationMatrix::from_parts(
            vec!["a".into()],
            Array2::zeros((1, 2)),
        )
        .unwrap_err();
        assert_eq!(err, CorrelationError::NotSquare { rows: 1, cols: 2 });
    }

    #[test]
    fn test_from_parts_validates_names() {
        let err = CorrelationMatrix::from_parts(
            vec!["a".into()],
            Array2::zeros((2, 2)),
        )
        .unwrap_err();
        assert_eq!(err, CorrelationError::NameCountMismatch { names: 1, dim: 2 });
    }

    #[test]
    fn test_target_correlations_accessors() {
        let xy = TargetCorrelations::from_parts(
            vec!["a".into(), "b".into()],
            vec!["t".into()],
            arr2(&[[0.5], [0.25]]),
        )
        .unwrap();
        assert_eq!(xy.n_features(), 2);
        assert_eq!(xy.n_targets(), 1);
        assert_eq!(xy.get(1, 0), 0.25);
    }

    #[test]
    fn test_target_correlations_name_mismatch() {
        let err = TargetCorrelations::from_parts(
            vec!["a".into(), "b".into()],
            vec!["t".into(), "u".into()],
            arr2(&[[0.5], [0.25]]),
        )
        .unwrap_err();
        assert_eq!(err, CorrelationError::NameCountMismatch { names: 2, dim: 1 });
    }
}
