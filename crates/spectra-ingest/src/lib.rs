//! Raw Spectroscopy Ingestion
//!
//! Loads wide acquisition CSVs and splits them into Raman, absorption and
//! ion-concentration blocks by column position.

mod reader;
mod split;

pub use reader::RawReader;
pub use split::{split_blocks, ColumnSplit, SplitBlocks};

use thiserror::Error;

/// Errors during ingestion
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Non-numeric cell at data row {row}, column '{column}': '{value}'")]
    NonNumericCell {
        row: usize,
        column: String,
        value: String,
    },
    #[error("Split wider than table: {need} columns configured, {have} available")]
    SplitTooWide { have: usize, need: usize },
    #[error("Table error: {0}")]
    Table(#[from] spectral_table::TableError),
}
