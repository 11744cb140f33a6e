//! Pipeline Configuration

use crate::PipelineError;
use config::{Config, File, FileFormat};
use fcbf_selector::{SelectionThresholds, SelectorError};
use serde::Deserialize;
use spectra_ingest::ColumnSplit;
use std::path::{Path, PathBuf};
use tracing::info;

/// Top-level pipeline configuration, loaded from a YAML file
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    pub data: DataConfig,
    pub feature_selection: FeatureSelectionConfig,
}

/// Data layout: raw inputs, artifact directories, split widths
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub raw: RawPaths,
    pub processed: StageDir,
    pub interim: StageDir,
    pub splits: SplitWidths,
}

/// Raw acquisition exports
#[derive(Debug, Clone, Deserialize)]
pub struct RawPaths {
    pub train_path: PathBuf,
    pub validation_path: PathBuf,
}

/// Directory holding one stage's artifacts
#[derive(Debug, Clone, Deserialize)]
pub struct StageDir {
    pub dir: PathBuf,
}

/// Positional widths of the spectral blocks
#[derive(Debug, Clone, Deserialize)]
pub struct SplitWidths {
    pub raman_cols: usize,
    pub absorption_cols: usize,
}

/// Feature selection settings
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureSelectionConfig {
    pub fcbf: FcbfSettings,
}

/// Raw FCBF thresholds as configured; validated via `PipelineConfig::thresholds`
#[derive(Debug, Clone, Deserialize)]
pub struct FcbfSettings {
    pub level_xx: f64,
    pub level_xy: f64,
}

impl PipelineConfig {
    /// Load and validate configuration from a YAML file.
    ///
    /// Threshold ranges are checked here so a bad config fails at startup,
    /// not mid-run.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Yaml))
            .build()?;

        let config: PipelineConfig = settings.try_deserialize()?;
        config.thresholds()?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Validated selection thresholds
    pub fn thresholds(&self) -> Result<SelectionThresholds, SelectorError> {
        SelectionThresholds::new(
            self.feature_selection.fcbf.level_xx,
            self.feature_selection.fcbf.level_xy,
        )
    }

    /// Column split widths for the raw tables
    pub fn split(&self) -> ColumnSplit {
        ColumnSplit {
            raman_cols: self.data.splits.raman_cols,
            absorption_cols: self.data.splits.absorption_cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    const VALID_YAML: &str = "\
data:
  raw:
    train_path: data/raw/train.csv
    validation_path: data/raw/validation.csv
  processed:
    dir: data/processed
  interim:
    dir: data/interim
  splits:
    raman_cols: 512
    absorption_cols: 256
feature_selection:
  fcbf:
    level_xx: 0.85
    level_xy: 0.2
";

    fn write_config(contents: &str) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), contents).unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config(VALID_YAML);
        let config = PipelineConfig::load(file.path()).unwrap();

        assert_eq!(config.data.splits.raman_cols, 512);
        assert_eq!(config.data.raw.train_path, PathBuf::from("data/raw/train.csv"));
        assert_eq!(config.split().absorption_cols, 256);

        let thresholds = config.thresholds().unwrap();
        assert_eq!(thresholds.level_xx(), 0.85);
        assert_eq!(thresholds.level_xy(), 0.2);
    }

    #[test]
    fn test_load_rejects_out_of_range_threshold() {
        let bad = VALID_YAML.replace("level_xx: 0.85", "level_xx: 1.5");
        let file = write_config(&bad);
        let err = PipelineConfig::load(file.path()).unwrap_err();

        assert!(matches!(err, PipelineError::Selection(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = PipelineConfig::load("/no/such/config.yaml").unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn test_load_missing_section() {
        let file = write_config("data:\n  splits:\n    raman_cols: 1\n");
        let err = PipelineConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }
}
