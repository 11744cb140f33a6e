//! Column Table Implementation

use crate::TableError;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Ordered sequence of named f64 columns with a common row count.
///
/// Feature identity is column name plus stable index; operations that
/// produce a new table (slicing, masking) keep the original column order.
/// Deserialization funnels through [`ColumnTable::new`], so serialized
/// input cannot carry a row count that disagrees with its columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableParts")]
pub struct ColumnTable {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
    #[serde(skip_serializing)]
    n_rows: usize,
}

impl ColumnTable {
    /// Build a table from parallel name and column vectors.
    ///
    /// All columns must share one row count; the first column defines it.
    pub fn new(names: Vec<String>, columns: Vec<Vec<f64>>) -> Result<Self, TableError> {
        if names.len() != columns.len() {
            return Err(TableError::NameCountMismatch {
                names: names.len(),
                columns: columns.len(),
            });
        }

        let n_rows = columns.first().map_or(0, Vec::len);
        for (name, column) in names.iter().zip(&columns) {
            if column.len() != n_rows {
                return Err(TableError::RaggedColumn {
                    name: name.clone(),
                    expected: n_rows,
                    got: column.len(),
                });
            }
        }

        Ok(Self {
            names,
            columns,
            n_rows,
        })
    }

    /// Table with zero columns and zero rows
    pub fn empty() -> Self {
        Self {
            names: Vec::new(),
            columns: Vec::new(),
            n_rows: 0,
        }
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// True when the table has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// All column names in order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name of column `idx`
    pub fn name(&self, idx: usize) -> &str {
        &self.names[idx]
    }

    /// Values of column `idx`
    pub fn column(&self, idx: usize) -> &[f64] {
        &self.columns[idx]
    }

    /// Iterate columns as (name, values) pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter().map(Vec::as_slice))
    }

    /// Contiguous column block as a new table (used for the spectral split)
    pub fn slice_cols(&self, range: Range<usize>) -> Result<Self, TableError> {
        if range.start > range.end || range.end > self.n_cols() {
            return Err(TableError::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                width: self.n_cols(),
            });
        }

        let names = self.names[range.clone()].to_vec();
        let columns = self.columns[range].to_vec();
        let n_rows = if columns.is_empty() { 0 } else { self.n_rows };

        Ok(Self {
            names,
            columns,
            n_rows,
        })
    }

    /// Keep only the columns where `mask[i]` is true.
    ///
    /// This is the downstream contract of a selection mask: a positional
    /// column filter that needs no other artifact to apply.
    pub fn select(&self, mask: &[bool]) -> Result<Self, TableError> {
        if mask.len() != self.n_cols() {
            return Err(TableError::MaskLengthMismatch {
                mask: mask.len(),
                columns: self.n_cols(),
            });
        }

        let mut names = Vec::new();
        let mut columns = Vec::new();
        for (i, &keep) in mask.iter().enumerate() {
            if keep {
                names.push(self.names[i].clone());
                columns.push(self.columns[i].clone());
            }
        }

        let n_rows = if columns.is_empty() { 0 } else { self.n_rows };
        Ok(Self {
            names,
            columns,
            n_rows,
        })
    }
}

#[derive(Deserialize)]
struct TableParts {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl TryFrom<TableParts> for ColumnTable {
    type Error = TableError;

    fn try_from(parts: TableParts) -> Result<Self, TableError> {
        Self::new(parts.names, parts.columns)
    }
}
