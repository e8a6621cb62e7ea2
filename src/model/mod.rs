//! Input boundary - annotation blocks from the document-analysis service

pub mod block;

// Re-export public API
pub use block::{parse_blocks, Block, BlockId, CellBlock, TextFragment};
