//! Presence/absence aggregation over one grid column
//!
//! Attendance sheets mark each student per date column with a short code:
//! `P` or `/` for present, `A` (or lowercase `a` from noisy recognition)
//! for absent. Aggregation counts how many rows of a chosen column carry
//! each kind of mark.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::Grid;

lazy_static! {
    /// Present marks: `P` or `/`, case-sensitive
    static ref PRESENT_MARK: Regex = Regex::new(r"[/P]").unwrap();
    /// Absent marks: `a` or `A`
    static ref ABSENT_MARK: Regex = Regex::new(r"[aA]").unwrap();
}

/// Counts of present and absent marks in one column
///
/// The two tests are independent and non-exclusive: a value like `"P/A"`
/// counts as both, and the counts need not sum to the row count. This
/// overlap matches the heuristic nature of the upstream marks and must
/// not be normalized into an exclusive classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttendanceCount {
    pub present: u32,
    pub absent: u32,
}

/// Count presence/absence marks in the given 0-based column
///
/// A row counts as present when its value contains `P` or `/`, and as
/// absent when it contains `a` or `A`; either, both, or neither may hold.
/// On a rectangular grid every row has the column; a row lacking it
/// contributes to neither count.
pub fn count_attendance(grid: &Grid, column: usize) -> AttendanceCount {
    let mut count = AttendanceCount::default();
    for value in grid.column(column) {
        if PRESENT_MARK.is_match(value) {
            count.present += 1;
        }
        if ABSENT_MARK.is_match(value) {
            count.absent += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{build_grid, group_cells, ResolvedCell};

    fn column_grid(values: &[&str]) -> Grid {
        let table = group_cells(values.iter().enumerate().map(|(i, text)| ResolvedCell {
            row: i as u32 + 1,
            column: 1,
            text: text.to_string(),
        }));
        build_grid(&table).unwrap()
    }

    #[test]
    fn test_counts_overlap_on_mixed_value() {
        let grid = column_grid(&["P", "A", "", "P/A", "x"]);
        let count = count_attendance(&grid, 0);
        assert_eq!(count, AttendanceCount { present: 2, absent: 2 });
    }

    #[test]
    fn test_slash_counts_as_present() {
        let grid = column_grid(&["/", "/"]);
        assert_eq!(count_attendance(&grid, 0).present, 2);
    }

    #[test]
    fn test_lowercase_a_counts_as_absent() {
        let grid = column_grid(&["a"]);
        let count = count_attendance(&grid, 0);
        assert_eq!((count.present, count.absent), (0, 1));
    }

    #[test]
    fn test_lowercase_p_does_not_count() {
        let grid = column_grid(&["p"]);
        assert_eq!(count_attendance(&grid, 0), AttendanceCount::default());
    }

    #[test]
    fn test_out_of_range_column_counts_nothing() {
        let grid = column_grid(&["P"]);
        assert_eq!(count_attendance(&grid, 9), AttendanceCount::default());
    }
}
