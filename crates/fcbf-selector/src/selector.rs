//! Greedy Filter Implementation

use crate::{SelectionMask, SelectionThresholds, SelectorError};
use correlation_engine::{CorrelationMatrix, TargetCorrelations};
use tracing::{debug, info, warn};

/// Greedy correlation-based feature filter.
///
/// Selection proceeds in rounds over a working relevance vector: the highest
/// scoring feature is selected, then every still-eligible feature whose
/// correlation with it exceeds `level_xx` is cleared for good. Cleared
/// features are never reconsidered, even when a later round would have kept
/// them. The loop stops once no remaining score exceeds `level_xy`.
pub struct FcbfSelector {
    thresholds: SelectionThresholds,
}

impl FcbfSelector {
    /// Create a selector with validated thresholds
    pub fn new(thresholds: SelectionThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds driving this selector
    pub fn thresholds(&self) -> SelectionThresholds {
        self.thresholds
    }

    /// Collapse per-target correlations into one relevance score per feature.
    ///
    /// Scores multiply across targets, so a feature uncorrelated with any
    /// single target scores near zero overall no matter how strongly it
    /// tracks the rest.
    pub fn reduce_relevance(&self, xy: &TargetCorrelations) -> Vec<f64> {
        let p = xy.n_features();
        let k = xy.n_targets();
        if k == 0 {
            warn!("no target columns; relevance defaults to 0 for all {} features", p);
            return vec![0.0; p];
        }
        (0..p)
            .map(|i| (0..k).map(|t| xy.get(i, t)).product())
            .collect()
    }

    /// Run the full filter: reduce relevance, then select greedily
    pub fn select(
        &self,
        xx: &CorrelationMatrix,
        xy: &TargetCorrelations,
    ) -> Result<SelectionMask, SelectorError> {
        let relevance = self.reduce_relevance(xy);
        self.select_with_relevance(xx, &relevance)
    }

    /// Greedy selection over an already-reduced relevance vector.
    ///
    /// The caller's inputs are never mutated; the loop owns its working copy
    /// of the scores and marks retired features with a 0 sentinel. Ties on
    /// the round maximum resolve to the lowest feature index.
    pub fn select_with_relevance(
        &self,
        xx: &CorrelationMatrix,
        relevance: &[f64],
    ) -> Result<SelectionMask, SelectorError> {
        if xx.len() != relevance.len() {
            return Err(SelectorError::FeatureCountMismatch {
                matrix: xx.len(),
                relevance: relevance.len(),
            });
        }

        let p = xx.len();
        let mut selected = vec![false; p];
        let mut work = relevance.to_vec();
        let mut rounds = 0;

        while let Some(best) = first_argmax(&work) {
            if work[best] <= self.thresholds.level_xy() {
                break;
            }
            rounds += 1;
            debug!(
                "round {}: selected '{}' with relevance {:.4}",
                rounds,
                xx.names()[best],
                work[best]
            );
            selected[best] = true;
            work[best] = 0.0;

            // Clearing is permanent; a feature dropped here never comes back
            for i in 0..p {
                if !selected[i] && work[i] > 0.0 && xx.get(best, i) > self.thresholds.level_xx() {
                    debug!(
                        "round {}: cleared '{}' as redundant with '{}'",
                        rounds,
                        xx.names()[i],
                        xx.names()[best]
                    );
                    work[i] = 0.0;
                }
            }
        }

        let mask = SelectionMask::new(xx.names().to_vec(), selected);
        info!(
            "selected {} of {} features in {} rounds",
            mask.n_selected(),
            p,
            rounds
        );
        Ok(mask)
    }
}

// First strictly-greater scan; ties resolve to the lowest index. None only
// when the slice is empty.
fn first_argmax(values: &[f64]) -> Option<usize> {
    let mut best = None;
    let mut best_value = f64::NEG_INFINITY;
    for (i, &value) in values.iter().enumerate() {
        if value > best_value {
            best = Some(i);
            best_value = value;
        }
    }
    best
}
