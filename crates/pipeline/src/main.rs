//! Spectra Selection Pipeline - Main Entry Point

use anyhow::Context;
use pipeline::{init_logging, PipelineConfig, PipelineRunner};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== Spectra Selection Pipeline v{} ===", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "configs/config.yaml".to_string());
    let config = PipelineConfig::load(&config_path)
        .with_context(|| format!("loading configuration from {}", config_path))?;

    PipelineRunner::new(config)
        .run()
        .context("running the selection pipeline")?;

    Ok(())
}
