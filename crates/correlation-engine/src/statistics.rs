//! Correlation Primitives

/// Arithmetic mean; 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// True when the column has no spread (empty, single row, or constant)
pub fn is_constant(values: &[f64]) -> bool {
    match values.first() {
        Some(first) => values.iter().all(|v| v == first),
        None => true,
    }
}

/// Pearson correlation coefficient between two equal-length columns.
///
/// Zero-variance policy: when either column is constant (which covers
/// n < 2 and n == 0), the correlation is undefined and this returns 0.0
/// instead of NaN. Mismatched lengths are treated the same way; callers
/// validate row alignment before getting here. Finite inputs never
/// produce NaN.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let (cov, var_x, var_y) =
        x.iter()
            .zip(y.iter())
            .fold((0.0, 0.0, 0.0), |(cov, vx, vy), (&xi, &yi)| {
                let dx = xi - mean_x;
                let dy = yi - mean_y;
                (cov + dx * dy, vx + dx * dx, vy + dy * dy)
            });

    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }

    cov / (var_x.sqrt() * var_y.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_is_constant() {
        assert!(is_constant(&[]));
        assert!(is_constant(&[3.0]));
        assert!(is_constant(&[2.0, 2.0, 2.0]));
        assert!(!is_constant(&[2.0, 2.1]));
    }

    #[test]
    fn test_pearson_perfect_positive() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        assert!((pearson(&x, &y) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&x, &y) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_known_value() {
        // r = 0.5 for this pair (hand-checked)
        let x = [1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 2.0];
        assert!((pearson(&x, &y) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_zero_variance_is_zero() {
        let constant = [5.0, 5.0, 5.0];
        let varying = [1.0, 2.0, 3.0];
        assert_eq!(pearson(&constant, &varying), 0.0);
        assert_eq!(pearson(&varying, &constant), 0.0);
        assert_eq!(pearson(&constant, &constant), 0.0);
    }

    #[test]
    fn test_pearson_degenerate_lengths() {
        assert_eq!(pearson(&[], &[]), 0.0);
        assert_eq!(pearson(&[1.0], &[2.0]), 0.0);
        assert_eq!(pearson(&[1.0, 2.0], &[1.0]), 0.0);
    }
}
