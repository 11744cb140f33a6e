//! Pipeline Runner

use crate::config::PipelineConfig;
use crate::PipelineError;
use correlation_engine::CorrelationEngine;
use fcbf_selector::FcbfSelector;
use spectra_ingest::{split_blocks, RawReader, SplitBlocks};
use spectral_table::ColumnTable;
use std::path::Path;
use storage::ArtifactStore;
use tracing::info;

/// Runs the full selection pipeline from raw exports to persisted masks.
///
/// Train tables drive correlation and selection; validation tables are only
/// split and persisted for the downstream training stage. Correlation
/// matrices and masks land in the interim store as independent artifacts,
/// so selection can be re-run with new thresholds without recomputation.
pub struct PipelineRunner {
    config: PipelineConfig,
}

impl PipelineRunner {
    /// Create a runner over a loaded configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Ingest both raw files, then select features per spectral block
    pub fn run(&self) -> Result<(), PipelineError> {
        let thresholds = self.config.thresholds()?;
        let processed = ArtifactStore::new(&self.config.data.processed.dir);
        let interim = ArtifactStore::new(&self.config.data.interim.dir);

        let train = self.ingest(&self.config.data.raw.train_path, "trn", &processed)?;
        self.ingest(&self.config.data.raw.validation_path, "vld", &processed)?;

        let selector = FcbfSelector::new(thresholds);
        self.select_block("raman", &train.raman, &train.ions, &selector, &interim)?;
        self.select_block("absorption", &train.absorption, &train.ions, &selector, &interim)?;

        info!("pipeline run complete");
        Ok(())
    }

    fn ingest(
        &self,
        path: &Path,
        tag: &str,
        store: &ArtifactStore,
    ) -> Result<SplitBlocks, PipelineError> {
        let raw = RawReader::new().read(path)?;
        let blocks = split_blocks(&raw, &self.config.split())?;

        store.write_table(&format!("{}_raman", tag), &blocks.raman)?;
        store.write_table(&format!("{}_absorption", tag), &blocks.absorption)?;
        store.write_table(&format!("{}_ions", tag), &blocks.ions)?;
        Ok(blocks)
    }

    fn select_block(
        &self,
        block: &str,
        x: &ColumnTable,
        y: &ColumnTable,
        selector: &FcbfSelector,
        store: &ArtifactStore,
    ) -> Result<(), PipelineError> {
        info!("selecting features for the {} block", block);

        let engine = CorrelationEngine::new();
        let (xx, xy) = engine.compute(x, y)?;
        store.write_feature_matrix(&format!("{}_xx", block), &xx)?;
        store.write_target_matrix(&format!("{}_xy", block), &xy)?;

        let mask = selector.select(&xx, &xy)?;
        store.write_mask(&format!("{}_fcbf_mask", block), &mask)?;

        info!(
            "{} block: kept {} of {} features",
            block,
            mask.n_selected(),
            mask.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        DataConfig, FcbfSettings, FeatureSelectionConfig, RawPaths, SplitWidths, StageDir,
    };
    use std::fs;
    use tempfile::tempdir;

    // Raw layout: sample id, two raman channels, one absorption channel,
    // one ion target. r2 duplicates r1 up to scale, so FCBF keeps only r1.
    const RAW_TRAIN: &str = "\
sample,r1,r2,a1,na
s1,1.0,2.0,4.0,1.0
s2,2.0,4.0,3.0,2.0
s3,3.0,6.0,2.0,3.0
s4,4.0,8.0,1.0,4.0
";

    const RAW_VALIDATION: &str = "\
sample,r1,r2,a1,na
v1,1.5,3.0,3.5,1.2
v2,2.5,5.0,2.5,2.2
";

    fn test_config(root: &Path) -> PipelineConfig {
        PipelineConfig {
            data: DataConfig {
                raw: RawPaths {
                    train_path: root.join("train.csv"),
                    validation_path: root.join("validation.csv"),
                },
                processed: StageDir {
                    dir: root.join("processed"),
                },
                interim: StageDir {
                    dir: root.join("interim"),
                },
                splits: SplitWidths {
                    raman_cols: 2,
                    absorption_cols: 1,
                },
            },
            feature_selection: FeatureSelectionConfig {
                fcbf: FcbfSettings {
                    level_xx: 0.8,
                    level_xy: 0.5,
                },
            },
        }
    }

    #[test]
    fn test_run_end_to_end() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("train.csv"), RAW_TRAIN).unwrap();
        fs::write(root.join("validation.csv"), RAW_VALIDATION).unwrap();

        let config = test_config(root);
        PipelineRunner::new(config).run().unwrap();

        let processed = ArtifactStore::new(root.join("processed"));
        let trn_raman = processed.read_table("trn_raman").unwrap();
        assert_eq!(trn_raman.names(), &["r1", "r2"]);
        assert_eq!(trn_raman.n_rows(), 4);
        assert_eq!(processed.read_table("vld_ions").unwrap().n_rows(), 2);

        let interim = ArtifactStore::new(root.join("interim"));
        let xx = interim.read_feature_matrix("raman_xx").unwrap();
        assert_eq!(xx.len(), 2);
        assert!((xx.get(0, 1) - 1.0).abs() < 1e-9);

        // r1 tracks the ion exactly and clears its scaled duplicate r2
        let raman_mask = interim.read_mask("raman_fcbf_mask").unwrap();
        assert_eq!(raman_mask.flags(), &[true, false]);

        // The lone absorption channel is anti-correlated with the ion,
        // which counts fully after the absolute value
        let absorption_mask = interim.read_mask("absorption_fcbf_mask").unwrap();
        assert_eq!(absorption_mask.flags(), &[true]);
    }

    #[test]
    fn test_run_with_empty_ion_block() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("train.csv"), RAW_TRAIN).unwrap();
        fs::write(root.join("validation.csv"), RAW_VALIDATION).unwrap();

        // The spectral blocks consume every column, leaving no ion targets
        let mut config = test_config(root);
        config.data.splits.absorption_cols = 2;
        PipelineRunner::new(config).run().unwrap();

        let processed = ArtifactStore::new(root.join("processed"));
        assert_eq!(processed.read_table("trn_ions").unwrap().n_cols(), 0);
        assert_eq!(processed.read_table("vld_ions").unwrap().n_cols(), 0);

        // No targets: relevance is all zeros and nothing clears the bar
        let interim = ArtifactStore::new(root.join("interim"));
        let raman_mask = interim.read_mask("raman_fcbf_mask").unwrap();
        assert_eq!(raman_mask.flags(), &[false, false]);
        let absorption_mask = interim.read_mask("absorption_fcbf_mask").unwrap();
        assert_eq!(absorption_mask.n_selected(), 0);
    }

    #[test]
    fn test_run_fails_on_missing_raw_file() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("train.csv"), RAW_TRAIN).unwrap();
        // validation.csv deliberately absent

        let config = test_config(root);
        let err = PipelineRunner::new(config).run().unwrap_err();
        assert!(matches!(err, PipelineError::Ingest(_)));
    }

    #[test]
    fn test_run_fails_on_split_wider_than_table() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("train.csv"), RAW_TRAIN).unwrap();
        fs::write(root.join("validation.csv"), RAW_VALIDATION).unwrap();

        let mut config = test_config(root);
        config.data.splits.raman_cols = 10;
        let err = PipelineRunner::new(config).run().unwrap_err();
        assert!(matches!(err, PipelineError::Ingest(_)));
    }
}
