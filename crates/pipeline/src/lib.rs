//! Spectra Selection Pipeline
//!
//! Orchestrates raw ingestion, correlation computation and FCBF selection,
//! persisting every intermediate artifact along the way.

mod config;
mod runner;

pub use config::{
    DataConfig, FcbfSettings, FeatureSelectionConfig, PipelineConfig, RawPaths, SplitWidths,
    StageDir,
};
pub use runner::PipelineRunner;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Errors during a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("Ingest error: {0}")]
    Ingest(#[from] spectra_ingest::IngestError),
    #[error("Correlation error: {0}")]
    Correlation(#[from] correlation_engine::CorrelationError),
    #[error("Selection error: {0}")]
    Selection(#[from] fcbf_selector::SelectorError),
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
