//! Positional Column Splitting

use crate::IngestError;
use serde::{Deserialize, Serialize};
use spectral_table::ColumnTable;
use tracing::{info, warn};

/// Widths of the two leading spectral blocks in a raw table.
///
/// Columns are positional: the first `raman_cols` columns carry the Raman
/// channels, the next `absorption_cols` the absorption channels, and
/// whatever remains holds the ion-concentration targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSplit {
    pub raman_cols: usize,
    pub absorption_cols: usize,
}

/// The three blocks a raw table splits into
#[derive(Debug, Clone)]
pub struct SplitBlocks {
    pub raman: ColumnTable,
    pub absorption: ColumnTable,
    pub ions: ColumnTable,
}

/// Split a raw table into Raman, absorption and ion blocks by position.
///
/// An empty ion block is allowed; a split wider than the table is not.
pub fn split_blocks(table: &ColumnTable, split: &ColumnSplit) -> Result<SplitBlocks, IngestError> {
    let have = table.n_cols();
    // An overflowing width sum saturates and is caught by the width check
    let need = split.raman_cols.saturating_add(split.absorption_cols);
    if need > have {
        return Err(IngestError::SplitTooWide { have, need });
    }

    let raman = table.slice_cols(0..split.raman_cols)?;
    let absorption = table.slice_cols(split.raman_cols..need)?;
    let ions = table.slice_cols(need..have)?;

    if ions.n_cols() == 0 {
        warn!("raw table has no ion columns after the spectral blocks");
    }
    info!(
        "split raw table: {} raman, {} absorption, {} ion columns",
        raman.n_cols(),
        absorption.n_cols(),
        ions.n_cols()
    );

    Ok(SplitBlocks {
        raman,
        absorption,
        ions,
    })
}
