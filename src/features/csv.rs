//! In-memory CSV rendering of a grid
//!
//! Convenience for handing a grid to spreadsheet tooling. Renders to a
//! string; writing it anywhere is the caller's business.

use crate::core::Grid;
use crate::utils::error::{ExtractError, ExtractResult};

/// Render a grid as CSV text
pub fn grid_to_csv(grid: &Grid) -> ExtractResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in grid.rows() {
        writer
            .write_record(row)
            .map_err(|err| ExtractError::internal(err.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExtractError::internal(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| ExtractError::internal(err.to_string()))
}
