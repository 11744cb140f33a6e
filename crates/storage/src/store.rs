//! Artifact Store Implementation

use crate::StorageError;
use correlation_engine::{CorrelationMatrix, TargetCorrelations};
use fcbf_selector::SelectionMask;
use ndarray::Array2;
use spectral_table::ColumnTable;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File-based store for pipeline artifacts.
///
/// Every artifact is a CSV under one root directory, named `<name>.csv`.
/// Matrices carry their feature names in an explicit `feature` index column
/// so they can be reloaded independently of the tables they came from;
/// masks are a single boolean column keyed the same way. Matrices and masks
/// are separate artifacts so selection can be re-run with new thresholds
/// without recomputing correlations.
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at `root`; the directory is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of this store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist a symmetric feature-feature matrix as `<name>.csv`
    pub fn write_feature_matrix(
        &self,
        name: &str,
        matrix: &CorrelationMatrix,
    ) -> Result<(), StorageError> {
        let path = self.prepare(name)?;
        let mut writer = csv::Writer::from_path(&path)?;

        let mut header = vec!["feature".to_string()];
        header.extend(matrix.names().iter().cloned());
        writer.write_record(&header)?;

        for (i, feature) in matrix.names().iter().enumerate() {
            let mut record = vec![feature.clone()];
            for j in 0..matrix.len() {
                record.push(matrix.get(i, j).to_string());
            }
            writer.write_record(&record)?;
        }
        writer.flush()?;

        debug!("wrote {}x{} feature matrix to {}", matrix.len(), matrix.len(), path.display());
        Ok(())
    }

    /// Reload a feature-feature matrix written by `write_feature_matrix`.
    ///
    /// Row order must match the header's column order; anything else means
    /// the artifact was edited or truncated.
    pub fn read_feature_matrix(&self, name: &str) -> Result<CorrelationMatrix, StorageError> {
        let path = self.path_for(name);
        let mut reader = csv::Reader::from_path(&path)?;
        let headers = reader.headers()?.clone();
        let names: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
        let p = names.len();

        let mut values = Array2::zeros((p, p));
        let mut rows = 0;
        for (i, result) in reader.records().enumerate() {
            let record = result?;
            if i >= p {
                return Err(self.malformed(&path, format!("more than {} data rows", p)));
            }
            if &record[0] != names[i].as_str() {
                return Err(self.malformed(
                    &path,
                    format!("row {} is '{}' but the header says '{}'", i + 1, &record[0], names[i]),
                ));
            }
            for j in 0..p {
                values[[i, j]] = self.parse_cell(&path, &record[j + 1], i)?;
            }
            rows += 1;
        }
        if rows != p {
            return Err(self.malformed(&path, format!("expected {} data rows, found {}", p, rows)));
        }

        Ok(CorrelationMatrix::from_parts(names, values)?)
    }

    /// Persist a feature-target matrix as `<name>.csv`
    pub fn write_target_matrix(
        &self,
        name: &str,
        matrix: &TargetCorrelations,
    ) -> Result<(), StorageError> {
        let path = self.prepare(name)?;
        let mut writer = csv::Writer::from_path(&path)?;

        let mut header = vec!["feature".to_string()];
        header.extend(matrix.target_names().iter().cloned());
        writer.write_record(&header)?;

        for (i, feature) in matrix.feature_names().iter().enumerate() {
            let mut record = vec![feature.clone()];
            for t in 0..matrix.n_targets() {
                record.push(matrix.get(i, t).to_string());
            }
            writer.write_record(&record)?;
        }
        writer.flush()?;

        debug!(
            "wrote {}x{} target matrix to {}",
            matrix.n_features(),
            matrix.n_targets(),
            path.display()
        );
        Ok(())
    }

    /// Reload a feature-target matrix written by `write_target_matrix`
    pub fn read_target_matrix(&self, name: &str) -> Result<TargetCorrelations, StorageError> {
        let path = self.path_for(name);
        let mut reader = csv::Reader::from_path(&path)?;
        let headers = reader.headers()?.clone();
        let target_names: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
        let k = target_names.len();

        let mut feature_names = Vec::new();
        let mut cells = Vec::new();
        for (i, result) in reader.records().enumerate() {
            let record = result?;
            feature_names.push(record[0].to_string());
            for t in 0..k {
                cells.push(self.parse_cell(&path, &record[t + 1], i)?);
            }
        }

        let p = feature_names.len();
        let values = Array2::from_shape_vec((p, k), cells)
            .map_err(|e| self.malformed(&path, e.to_string()))?;
        Ok(TargetCorrelations::from_parts(feature_names, target_names, values)?)
    }

    /// Persist a selection mask as `<name>.csv` with `feature,selected` columns
    pub fn write_mask(&self, name: &str, mask: &SelectionMask) -> Result<(), StorageError> {
        let path = self.prepare(name)?;
        let mut writer = csv::Writer::from_path(&path)?;

        writer.write_record(["feature", "selected"])?;
        for (feature, selected) in mask.iter() {
            writer.write_record([feature, if selected { "true" } else { "false" }])?;
        }
        writer.flush()?;

        info!(
            "wrote selection mask ({} of {} features) to {}",
            mask.n_selected(),
            mask.len(),
            path.display()
        );
        Ok(())
    }

    /// Reload a selection mask written by `write_mask`
    pub fn read_mask(&self, name: &str) -> Result<SelectionMask, StorageError> {
        let path = self.path_for(name);
        let mut reader = csv::Reader::from_path(&path)?;
        let headers = reader.headers()?;
        if headers.len() != 2 {
            return Err(self.malformed(&path, format!("expected 2 columns, found {}", headers.len())));
        }

        let mut names = Vec::new();
        let mut flags = Vec::new();
        for (i, result) in reader.records().enumerate() {
            let record = result?;
            names.push(record[0].to_string());
            flags.push(match &record[1] {
                "true" => true,
                "false" => false,
                other => {
                    return Err(self.malformed(
                        &path,
                        format!("row {} has non-boolean flag '{}'", i + 1, other),
                    ))
                }
            });
        }

        Ok(SelectionMask::from_parts(names, flags)?)
    }

    /// Persist a column table as `<name>.csv` (headers are the column names).
    ///
    /// A zero-column table is written as an empty file: csv renders a
    /// zero-field record as a single quoted empty field, which would read
    /// back as one empty-named column.
    pub fn write_table(&self, name: &str, table: &ColumnTable) -> Result<(), StorageError> {
        let path = self.prepare(name)?;

        if table.is_empty() {
            fs::write(&path, "")?;
        } else {
            let mut writer = csv::Writer::from_path(&path)?;
            writer.write_record(table.names())?;
            for row in 0..table.n_rows() {
                let record: Vec<String> = (0..table.n_cols())
                    .map(|col| table.column(col)[row].to_string())
                    .collect();
                writer.write_record(&record)?;
            }
            writer.flush()?;
        }

        debug!(
            "wrote table ({} rows, {} columns) to {}",
            table.n_rows(),
            table.n_cols(),
            path.display()
        );
        Ok(())
    }

    /// Reload a column table written by `write_table`; an empty file is a
    /// zero-column table
    pub fn read_table(&self, name: &str) -> Result<ColumnTable, StorageError> {
        let path = self.path_for(name);
        let mut reader = csv::Reader::from_path(&path)?;
        let names: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];

        for (i, result) in reader.records().enumerate() {
            let record = result?;
            for (col, cell) in record.iter().enumerate() {
                columns[col].push(self.parse_cell(&path, cell, i)?);
            }
        }

        Ok(ColumnTable::new(names, columns)?)
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.csv", name))
    }

    fn prepare(&self, name: &str) -> Result<PathBuf, StorageError> {
        fs::create_dir_all(&self.root)?;
        Ok(self.path_for(name))
    }

    fn parse_cell(&self, path: &Path, cell: &str, row: usize) -> Result<f64, StorageError> {
        cell.trim().parse().map_err(|_| {
            self.malformed(path, format!("non-numeric cell '{}' in row {}", cell, row + 1))
        })
    }

    fn malformed(&self, path: &Path, reason: String) -> StorageError {
        StorageError::Malformed {
            path: path.to_path_buf(),
            reason,
        }
    }
}
