//! Table Extraction Core
//!
//! The pipeline that turns a flat collection of annotation blocks into a
//! dense rectangular grid:
//!
//! ```text
//! Blocks -> Resolve text -> Sparse table -> Dense grid -> Split merged marks
//! ```
//!
//! Each stage is a pure function over its input; no state is shared
//! between documents, so separate documents can be processed concurrently
//! without coordination.

mod grid;
mod group;
mod resolve;
mod split;


// Re-export public API
pub use grid::{build_grid, Grid};
pub use group::{group_cells, SparseTable};
pub use resolve::{resolve_cell, FragmentIndex, ResolvedCell};
pub use split::split_merged_marks;
