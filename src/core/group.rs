//! Grouping resolved cells into a sparse table

use indexmap::IndexMap;

use super::resolve::ResolvedCell;

/// Partial mapping of (row, column) to cell text
///
/// Row and column keys are the service's 1-based indices. An absent pair
/// means "no cell detected here", not "empty cell" - the distinction
/// collapses only when the dense grid is built. No ordering is guaranteed
/// internally; the grid builder sorts rows itself.
#[derive(Debug, Clone, Default)]
pub struct SparseTable {
    rows: IndexMap<u32, IndexMap<u32, String>>,
}

impl SparseTable {
    pub fn new() -> Self {
        SparseTable::default()
    }

    /// Insert a cell's text at (row, column)
    ///
    /// Duplicate coordinates should not occur in well-formed service
    /// output; if they do, the later insert wins.
    pub fn insert(&mut self, row: u32, column: u32, text: String) {
        self.rows.entry(row).or_default().insert(column, text);
    }

    /// True when no cell was ever inserted
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct row indices present
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Largest column index appearing in any row
    pub fn max_column(&self) -> Option<u32> {
        self.rows
            .values()
            .filter_map(|columns| columns.keys().max())
            .max()
            .copied()
    }

    /// Text at (row, column), if a cell was detected there
    pub fn get(&self, row: u32, column: u32) -> Option<&str> {
        self.rows.get(&row)?.get(&column).map(String::as_str)
    }

    /// The distinct row indices present, in insertion order
    pub fn row_indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.keys().copied()
    }

    pub(crate) fn row(&self, index: u32) -> Option<&IndexMap<u32, String>> {
        self.rows.get(&index)
    }
}

/// Group resolved cells into a sparse table
///
/// Iteration order only matters when two cells collide on the same
/// coordinates (last write wins); otherwise the eventual grid is
/// identical for any permutation of the input.
pub fn group_cells(cells: impl IntoIterator<Item = ResolvedCell>) -> SparseTable {
    let mut table = SparseTable::new();
    for cell in cells {
        table.insert(cell.row, cell.column, cell.text);
    }
    table
}
