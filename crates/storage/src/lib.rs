//! Storage Layer
//!
//! Persists correlation matrices, selection masks and split tables as CSV
//! artifacts that can be reloaded and re-associated by feature name.

mod store;

pub use store::ArtifactStore;

use std::path::PathBuf;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Malformed artifact {}: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },
    #[error("Correlation artifact error: {0}")]
    Correlation(#[from] correlation_engine::CorrelationError),
    #[error("Mask artifact error: {0}")]
    Selector(#[from] fcbf_selector::SelectorError),
    #[error("Table artifact error: {0}")]
    Table(#[from] spectral_table::TableError),
}
