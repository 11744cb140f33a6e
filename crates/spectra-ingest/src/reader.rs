//! Raw File Reading

use crate::IngestError;
use spectral_table::ColumnTable;
use std::path::Path;
use tracing::info;

/// Reads raw wide-format CSVs into columnar tables.
///
/// The expected layout matches the acquisition export: a header row naming
/// every column, a leading sample-id column (dropped on load), then one
/// numeric column per channel or target.
pub struct RawReader;

impl RawReader {
    /// Create a new reader
    pub fn new() -> Self {
        Self
    }

    /// Load a raw CSV into a column table, dropping the sample-id column.
    ///
    /// Every data cell must parse as a float; data rows are numbered from 1
    /// in errors. A file with headers but no data rows loads as a zero-row
    /// table.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<ColumnTable, IngestError> {
        let path = path.as_ref();
        info!("loading raw data from {}", path.display());

        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();
        // First column is the sample id, not a feature
        let names: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];

        for (row, result) in reader.records().enumerate() {
            let record = result?;
            for (col, cell) in record.iter().skip(1).enumerate() {
                let value =
                    cell.trim()
                        .parse::<f64>()
                        .map_err(|_| IngestError::NonNumericCell {
                            row: row + 1,
                            column: names[col].clone(),
                            value: cell.to_string(),
                        })?;
                columns[col].push(value);
            }
        }

        let table = ColumnTable::new(names, columns)?;
        info!(
            "loaded raw data: {} rows, {} columns",
            table.n_rows(),
            table.n_cols()
        );
        Ok(table)
    }
}

impl Default for RawReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    fn write_raw(contents: &str) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), contents).unwrap();
        file
    }

    #[test]
    fn test_read_drops_sample_id_column() {
        let file = write_raw("sample,w1,w2,na\ns1,1.0,2.0,0.1\ns2,2.5,4.0,0.2\n");
        let table = RawReader::new().read(file.path()).unwrap();

        assert_eq!(table.names(), &["w1", "w2", "na"]);
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.column(0), &[1.0, 2.5]);
        assert_eq!(table.column(2), &[0.1, 0.2]);
    }

    #[test]
    fn test_read_rejects_non_numeric_cell() {
        let file = write_raw("sample,w1,w2\ns1,1.0,2.0\ns2,3.0,oops\n");
        let err = RawReader::new().read(file.path()).unwrap_err();

        assert!(matches!(
            err,
            IngestError::NonNumericCell { row: 2, ref column, .. } if column == "w2"
        ));
    }

    #[test]
    fn test_read_header_only_file_has_zero_rows() {
        let file = write_raw("sample,w1,w2\n");
        let table = RawReader::new().read(file.path()).unwrap();

        assert_eq!(table.names(), &["w1", "w2"]);
        assert_eq!(table.n_rows(), 0);
    }

    #[test]
    fn test_read_ragged_row_is_a_csv_error() {
        let file = write_raw("sample,w1,w2\ns1,1.0\n");
        let err = RawReader::new().read(file.path()).unwrap_err();

        assert!(matches!(err, IngestError::Csv(_)));
    }

    #[test]
    fn test_read_missing_file() {
        let err = RawReader::new().read("/no/such/raw.csv").unwrap_err();
        assert!(matches!(err, IngestError::Csv(_)));
    }
}
