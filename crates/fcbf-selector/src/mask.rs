//! Selection Mask

use crate::SelectorError;
use serde::{Deserialize, Serialize};

/// Boolean feature mask, index-aligned with the feature table's columns.
///
/// Entry `i` refers to the i-th feature column of the table the correlations
/// were computed from. Immutable once produced; deserialization funnels
/// through [`SelectionMask::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MaskParts")]
pub struct SelectionMask {
    names: Vec<String>,
    selected: Vec<bool>,
}

impl SelectionMask {
    // Selector-internal constructor; lengths match by construction
    pub(crate) fn new(names: Vec<String>, selected: Vec<bool>) -> Self {
        Self { names, selected }
    }

    /// Rebuild a mask from its parts (used when reloading artifacts)
    pub fn from_parts(names: Vec<String>, selected: Vec<bool>) -> Result<Self, SelectorError> {
        if names.len() != selected.len() {
            return Err(SelectorError::MaskLengthMismatch {
                names: names.len(),
                flags: selected.len(),
            });
        }
        Ok(Self { names, selected })
    }

    /// Number of features covered by the mask
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// True when the mask covers zero features
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether feature `i` was selected
    pub fn is_selected(&self, i: usize) -> bool {
        self.selected[i]
    }

    /// Number of selected features
    pub fn n_selected(&self) -> usize {
        self.selected.iter().filter(|&&s| s).count()
    }

    /// Feature names in table order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Raw boolean flags in table order
    pub fn flags(&self) -> &[bool] {
        &self.selected
    }

    /// Names of the selected features, preserving table order
    pub fn selected_names(&self) -> Vec<&str> {
        self.names
            .iter()
            .zip(&self.selected)
            .filter(|(_, &s)| s)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Iterate (name, selected) pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.selected.iter().copied())
    }
}

#[derive(Deserialize)]
struct MaskParts {
    names: Vec<String>,
    selected: Vec<bool>,
}

impl TryFrom<MaskParts> for SelectionMask {
    type Error = SelectorError;

    fn try_from(parts: MaskParts) -> Result<Self, SelectorError> {
        Self::from_parts(parts.names, parts.selected)
    }
}
