//! Columnar Numeric Table
//!
//! Provides the ordered named-column table shared by the ingestion,
//! correlation, and selection stages. Column order is significant and
//! preserved end-to-end: downstream selection masks are positional.

mod table;

pub use table::ColumnTable;

use thiserror::Error;

/// Errors raised by table construction and column operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A column's row count disagrees with the rest of the table
    #[error("column '{name}' has {got} rows, expected {expected}")]
    RaggedColumn {
        name: String,
        expected: usize,
        got: usize,
    },

    /// Name list and column list have different lengths
    #[error("{names} column names given for {columns} columns")]
    NameCountMismatch { names: usize, columns: usize },

    /// Column range exceeds the table width
    #[error("column range {start}..{end} out of bounds for width {width}")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        width: usize,
    },

    /// Selection mask length disagrees with the column count
    #[error("mask has {mask} entries but table has {columns} columns")]
    MaskLengthMismatch { mask: usize, columns: usize },
}
