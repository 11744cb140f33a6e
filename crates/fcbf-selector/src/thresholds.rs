//! Selection Thresholds

use crate::SelectorError;

/// Validated threshold pair driving the greedy filter.
///
/// `level_xx` bounds tolerated feature-feature redundancy; `level_xy` is the
/// minimum target relevance a feature must exceed to be selected. Both bars
/// are strict: a score exactly equal to its threshold does not pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionThresholds {
    level_xx: f64,
    level_xy: f64,
}

impl SelectionThresholds {
    /// Validate and build a threshold pair; both values must lie in [0, 1]
    pub fn new(level_xx: f64, level_xy: f64) -> Result<Self, SelectorError> {
        Self::check("level_xx", level_xx)?;
        Self::check("level_xy", level_xy)?;
        Ok(Self { level_xx, level_xy })
    }

    fn check(name: &'static str, value: f64) -> Result<(), SelectorError> {
        // NaN fails the containment check and is rejected like any other
        // out-of-range value
        if !(0.0..=1.0).contains(&value) {
            return Err(SelectorError::ThresholdOutOfRange { name, value });
        }
        Ok(())
    }

    /// Redundancy threshold applied to feature-feature correlations
    pub fn level_xx(&self) -> f64 {
        self.level_xx
    }

    /// Relevance threshold applied to feature-target scores
    pub fn level_xy(&self) -> f64 {
        self.level_xy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_range() {
        let t = SelectionThresholds::new(0.0, 1.0).unwrap();
        assert_eq!(t.level_xx(), 0.0);
        assert_eq!(t.level_xy(), 1.0);
    }

    #[test]
    fn test_rejects_above_one() {
        let err = SelectionThresholds::new(1.2, 0.5).unwrap_err();
        assert_eq!(
            err,
            SelectorError::ThresholdOutOfRange {
                name: "level_xx",
                value: 1.2
            }
        );
    }

    #[test]
    fn test_rejects_negative() {
        let err = SelectionThresholds::new(0.5, -0.1).unwrap_err();
        assert_eq!(
            err,
            SelectorError::ThresholdOutOfRange {
                name: "level_xy",
                value: -0.1
            }
        );
    }

    #[test]
    fn test_rejects_nan() {
        assert!(SelectionThresholds::new(f64::NAN, 0.5).is_err());
        assert!(SelectionThresholds::new(0.5, f64::NAN).is_err());
    }
}
