//! Cell text resolution
//!
//! A cell block does not carry its own text; it references the child blocks
//! that do. Resolution follows those references through a prebuilt
//! identity index and joins the fragment texts with single spaces.
//!
//! Scanning the whole block collection per reference would be quadratic in
//! the number of blocks, so the index is built once per document and reused
//! for every cell.

use fxhash::FxHashMap;

use crate::model::{Block, BlockId, CellBlock, TextFragment};

/// Identity -> fragment lookup, built once per detection result
pub struct FragmentIndex<'a> {
    by_id: FxHashMap<&'a str, &'a TextFragment>,
}

impl<'a> FragmentIndex<'a> {
    /// Index every text fragment in the block collection
    pub fn build(blocks: &'a [Block]) -> Self {
        let mut by_id = FxHashMap::default();
        for block in blocks {
            if let Block::Fragment(fragment) = block {
                by_id.insert(fragment.id.as_str(), fragment);
            }
        }
        FragmentIndex { by_id }
    }

    /// Look up a fragment by identity
    pub fn get(&self, id: &BlockId) -> Option<&'a TextFragment> {
        self.by_id.get(id.as_str()).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// A cell whose text has been resolved from its child fragments
///
/// Transient: produced by [`resolve_cell`] and consumed immediately by
/// grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCell {
    pub row: u32,
    pub column: u32,
    pub text: String,
}

/// Resolve a cell's text through the fragment index
///
/// Child references are followed in listed order. A reference with no
/// matching fragment, or whose fragment carries no text, is skipped
/// silently: partial recognition loses content, never the whole cell.
/// A cell with no children resolves to the empty string.
pub fn resolve_cell(cell: &CellBlock, fragments: &FragmentIndex) -> ResolvedCell {
    let mut text = String::new();
    for child in &cell.children {
        if let Some(fragment) = fragments.get(child) {
            if let Some(word) = &fragment.text {
                text.push_str(word);
                text.push(' ');
            }
        }
    }

    ResolvedCell {
        row: cell.row,
        column: cell.column,
        text: text.trim().to_string(),
    }
}
