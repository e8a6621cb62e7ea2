//! # tablift
//!
//! Reconstructs dense, review-ready tables from the sparse cell output of a
//! document-analysis service.
//!
//! ## Features
//!
//! - **Cell resolution**: follows child-text references through a prebuilt
//!   identity index (linear time per document)
//! - **Grid reconstruction**: sorts detected rows and pads ragged columns
//!   into a rectangle
//! - **Merged-mark correction**: splits cells the detector merged over
//!   adjacent single-character marks (`"PA"` -> `"P"`, `"A"`)
//! - **Attendance aggregation**: counts presence/absence marks per column
//! - **JSON ingestion**: parses the service's block payload directly
//!
//! ## Usage Examples
//!
//! ### From typed blocks
//!
//! ```rust
//! use tablift::{count_attendance, extract_table, Block, BlockId};
//!
//! let blocks = vec![
//!     Block::cell(1, 1, vec![BlockId::new("w1")]),
//!     Block::cell(1, 2, vec![BlockId::new("w2")]),
//!     Block::cell(2, 1, vec![BlockId::new("w3")]),
//!     Block::cell(2, 2, vec![BlockId::new("w4")]),
//!     Block::fragment("w1", "Jane"),
//!     Block::fragment("w2", "P"),
//!     Block::fragment("w3", "Amir"),
//!     Block::fragment("w4", "A"),
//! ];
//!
//! let grid = extract_table(&blocks)?;
//! assert_eq!(grid.rows()[0], vec!["Jane", "P"]);
//!
//! let count = count_attendance(&grid, 1);
//! assert_eq!((count.present, count.absent), (1, 1));
//! # Ok::<(), tablift::ExtractError>(())
//! ```
//!
//! ### From a raw service payload
//!
//! ```rust
//! use tablift::extract_table_from_json;
//!
//! let payload = r#"{
//!     "Blocks": [
//!         {"BlockType": "CELL", "Id": "c1", "RowIndex": 1, "ColumnIndex": 1,
//!          "Relationships": [{"Type": "CHILD", "Ids": ["w1"]}]},
//!         {"BlockType": "WORD", "Id": "w1", "Text": "P"}
//!     ]
//! }"#;
//!
//! let grid = extract_table_from_json(payload)?;
//! assert_eq!(grid.rows()[0], vec!["P"]);
//! # Ok::<(), tablift::ExtractError>(())
//! ```

/// Extraction pipeline modules
pub mod core;

/// Input boundary - annotation block model and JSON ingestion
pub mod model;

/// Feature modules - grid consumers
pub mod features;

/// Utility modules
pub mod utils;

// Re-export core pipeline
pub use self::core::{
    build_grid, group_cells, resolve_cell, split_merged_marks, FragmentIndex, Grid, ResolvedCell,
    SparseTable,
};

// Re-export model
pub use model::{parse_blocks, Block, BlockId, CellBlock, TextFragment};

// Re-export feature modules
pub use features::{count_attendance, AttendanceCount};

#[cfg(feature = "csv-render")]
pub use features::grid_to_csv;

// Re-export utilities
pub use utils::error::{ExtractError, ExtractResult};

/// Extraction options
///
/// Mirrors the pipeline's one tunable pass: merged-mark splitting is a
/// heuristic that breaks column alignment across rows, so callers that
/// need strict column semantics can turn it off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Split multi-character mark cells like `"PA"` into one cell per
    /// character (default: true)
    pub split_merged_marks: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            split_merged_marks: true,
        }
    }
}

/// Extract a dense grid from annotation blocks with default options
///
/// # Arguments
/// * `blocks` - the flat block collection from one detection result
///
/// # Returns
/// The final rectangular grid, or [`ExtractError::NoTableDetected`] when
/// the input contains no cell blocks.
pub fn extract_table(blocks: &[Block]) -> ExtractResult<Grid> {
    extract_table_with_options(blocks, &ExtractOptions::default())
}

/// Extract a dense grid from annotation blocks with custom options
pub fn extract_table_with_options(
    blocks: &[Block],
    options: &ExtractOptions,
) -> ExtractResult<Grid> {
    let fragments = FragmentIndex::build(blocks);

    let resolved = blocks.iter().filter_map(|block| match block {
        Block::Cell(cell) => Some(resolve_cell(cell, &fragments)),
        Block::Fragment(_) => None,
    });

    let table = group_cells(resolved);
    let grid = build_grid(&table)?;

    if options.split_merged_marks {
        Ok(split_merged_marks(grid))
    } else {
        Ok(grid)
    }
}

/// Parse a JSON detection payload and extract a dense grid
pub fn extract_table_from_json(json: &str) -> ExtractResult<Grid> {
    let blocks = parse_blocks(json)?;
    extract_table(&blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark_blocks() -> Vec<Block> {
        vec![
            Block::cell(1, 1, vec![BlockId::new("w1")]),
            Block::cell(1, 2, vec![BlockId::new("w2")]),
            Block::fragment("w1", "Jane"),
            Block::fragment("w2", "PA"),
        ]
    }

    #[test]
    fn test_extract_table_splits_by_default() {
        let grid = extract_table(&mark_blocks()).unwrap();
        assert_eq!(grid.rows()[0], vec!["Jane", "P", "A"]);
    }

    #[test]
    fn test_extract_table_split_disabled() {
        let options = ExtractOptions {
            split_merged_marks: false,
        };
        let grid = extract_table_with_options(&mark_blocks(), &options).unwrap();
        assert_eq!(grid.rows()[0], vec!["Jane", "PA"]);
    }

    #[test]
    fn test_extract_table_no_cells() {
        let blocks = vec![Block::fragment("w1", "orphan")];
        let err = extract_table(&blocks).unwrap_err();
        assert!(matches!(err, ExtractError::NoTableDetected));
    }

    #[test]
    fn test_extract_table_empty_input() {
        let err = extract_table(&[]).unwrap_err();
        assert!(matches!(err, ExtractError::NoTableDetected));
    }
}
