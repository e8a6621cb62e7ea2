//! Merged-mark splitting
//!
//! The upstream detector occasionally draws one visual cell over what
//! should be several adjacent single-character marks, producing values
//! like `"PA"` where two cells `"P"`, `"A"` were meant. This pass expands
//! such values in place and re-pads the grid back to a rectangle.
//!
//! Expansion is applied independently per row, so a column index in the
//! output is no longer guaranteed to mean the same logical field across
//! rows once any row has split. The pass is a heuristic correction, not a
//! structural guarantee; callers that need strict column semantics can
//! disable it via `ExtractOptions`.

use super::grid::Grid;

/// The mark alphabet a splittable value must be drawn from, exactly
const MARK_ALPHABET: [char; 3] = ['P', '/', 'A'];

/// True when a value conflates multiple single-character marks
///
/// Requires more than one character, every one of them in the mark
/// alphabet (case-sensitive). `"PA"` and `"P/A"` qualify; `"AB"` and
/// `"P"` do not.
fn is_merged_marks(value: &str) -> bool {
    value.chars().count() > 1 && value.chars().all(|c| MARK_ALPHABET.contains(&c))
}

/// Expand one row, splitting merged marks into one cell per character
fn expand_row(row: &[String]) -> Vec<String> {
    let mut expanded = Vec::with_capacity(row.len());
    for value in row {
        if is_merged_marks(value) {
            expanded.extend(value.chars().map(String::from));
        } else {
            expanded.push(value.clone());
        }
    }
    expanded
}

/// Split merged marks and re-pad the grid to a rectangle
///
/// Rows that expanded less than the widest row are right-padded with
/// empty strings. A grid containing no splittable value comes back
/// unchanged.
pub fn split_merged_marks(grid: Grid) -> Grid {
    let expanded: Vec<Vec<String>> = grid.rows().iter().map(|row| expand_row(row)).collect();

    let max_len = expanded.iter().map(Vec::len).max().unwrap_or(0);
    let rows = expanded
        .into_iter()
        .map(|mut row| {
            row.resize(max_len, String::new());
            row
        })
        .collect();

    Grid::from_rows(rows)
}
