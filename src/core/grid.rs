//! Dense grid construction from a sparse table

use super::group::SparseTable;
use crate::utils::error::{ExtractError, ExtractResult};

/// A dense rectangular table of strings
///
/// Every row has the same length. Rows are ordered by ascending original
/// row index; row indices that were never observed are omitted, not
/// inserted as blank rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub(crate) fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Grid { rows }
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (identical for every row)
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// The rows, in order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Values of one 0-based column, top to bottom
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .filter_map(move |row| row.get(index).map(String::as_str))
    }

    /// Consume the grid, yielding its rows for external consumers
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

/// Build a dense grid from a sparse table
///
/// The grid width is the maximum column index seen across all rows;
/// positions absent from a row's mapping become empty strings, so ragged
/// input is silently right-padded. Rows are emitted in ascending numeric
/// row-index order, but gaps in row numbering are NOT filled with blank
/// rows - row padding and column padding are deliberately asymmetric.
///
/// An empty sparse table yields [`ExtractError::NoTableDetected`].
pub fn build_grid(table: &SparseTable) -> ExtractResult<Grid> {
    let max_column = table.max_column().ok_or(ExtractError::NoTableDetected)?;

    let mut row_indices: Vec<u32> = table.row_indices().collect();
    row_indices.sort_unstable();

    let mut rows = Vec::with_capacity(row_indices.len());
    for row_index in row_indices {
        let row = match table.row(row_index) {
            Some(columns) => (1..=max_column)
                .map(|column| columns.get(&column).cloned().unwrap_or_default())
                .collect(),
            None => vec![String::new(); max_column as usize],
        };
        rows.push(row);
    }

    Ok(Grid { rows })
}
