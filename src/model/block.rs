//! Annotation block model
//!
//! The document-analysis service returns a flat collection of annotation
//! elements ("blocks"). Only two shapes matter to extraction:
//!
//! - a **cell** block: a 1-based (row, column) position plus references to
//!   the child blocks holding its recognized text
//! - a **text** block: an identity and an optional literal string
//!
//! Everything else in the payload (pages, layout regions, table outlines)
//! carries no tabular content and is discarded on ingest.

use serde::Deserialize;

use crate::utils::error::ExtractResult;

/// Identity of an annotation block
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        BlockId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A detected table cell, before its text has been resolved
///
/// Row and column indices are 1-based, as reported by the service.
/// `children` lists the CHILD relationship targets in the order the
/// service reported them; resolution preserves that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBlock {
    pub row: u32,
    pub column: u32,
    pub children: Vec<BlockId>,
}

/// A recognized text fragment, looked up by identity during resolution
///
/// `text` is optional: some services emit identifiable blocks without any
/// recognized string. Those resolve to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    pub id: BlockId,
    pub text: Option<String>,
}

/// An annotation element relevant to table extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A table cell with a grid position and child-text references
    Cell(CellBlock),
    /// A text fragment referenced by one or more cells
    Fragment(TextFragment),
}

impl Block {
    /// Shorthand for building a cell block
    pub fn cell(row: u32, column: u32, children: Vec<BlockId>) -> Self {
        Block::Cell(CellBlock {
            row,
            column,
            children,
        })
    }

    /// Shorthand for building a text fragment
    pub fn fragment(id: impl Into<String>, text: impl Into<String>) -> Self {
        Block::Fragment(TextFragment {
            id: BlockId::new(id),
            text: Some(text.into()),
        })
    }
}

// ============================================================================
// JSON ingestion
// ============================================================================

/// Raw wire shape of a single block, as serialized by the service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawBlock {
    block_type: String,
    id: Option<String>,
    row_index: Option<u32>,
    column_index: Option<u32>,
    text: Option<String>,
    #[serde(default)]
    relationships: Vec<RawRelationship>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawRelationship {
    #[serde(rename = "Type")]
    kind: String,
    #[serde(default)]
    ids: Vec<String>,
}

/// Full analysis response: an object wrapping the block list
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawResponse {
    blocks: Vec<RawBlock>,
}

impl RawBlock {
    /// Classify a raw block into the two-case model, or discard it
    fn classify(self) -> Option<Block> {
        if self.block_type == "CELL" {
            let (row, column) = (self.row_index?, self.column_index?);
            let children = self
                .relationships
                .into_iter()
                .filter(|rel| rel.kind == "CHILD")
                .flat_map(|rel| rel.ids)
                .map(BlockId)
                .collect();
            return Some(Block::Cell(CellBlock {
                row,
                column,
                children,
            }));
        }

        // Any other identifiable block may be the target of a child
        // reference; keep it as a fragment even when it carries no text.
        let id = BlockId(self.id?);
        Some(Block::Fragment(TextFragment {
            id,
            text: self.text,
        }))
    }
}

/// Parse a detection payload into annotation blocks
///
/// Accepts either a bare JSON array of blocks or a full response object
/// carrying a `Blocks` array. Blocks that are neither cells nor
/// identifiable text fragments are dropped.
pub fn parse_blocks(json: &str) -> ExtractResult<Vec<Block>> {
    let raw = if json.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<RawBlock>>(json)?
    } else {
        serde_json::from_str::<RawResponse>(json)?.blocks
    };

    Ok(raw.into_iter().filter_map(RawBlock::classify).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_object() {
        let json = r#"{
            "Blocks": [
                {"BlockType": "PAGE"},
                {"BlockType": "CELL", "Id": "c1", "RowIndex": 1, "ColumnIndex": 2,
                 "Relationships": [{"Type": "CHILD", "Ids": ["w1", "w2"]}]},
                {"BlockType": "WORD", "Id": "w1", "Text": "Jane"},
                {"BlockType": "WORD", "Id": "w2", "Text": "Doe"}
            ]
        }"#;
        let blocks = parse_blocks(json).unwrap();
        // PAGE has no Id, so it is dropped entirely
        assert_eq!(blocks.len(), 3);
        assert_eq!(
            blocks[0],
            Block::cell(1, 2, vec![BlockId::new("w1"), BlockId::new("w2")])
        );
        assert_eq!(blocks[1], Block::fragment("w1", "Jane"));
    }

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[
            {"BlockType": "CELL", "Id": "c1", "RowIndex": 3, "ColumnIndex": 1}
        ]"#;
        let blocks = parse_blocks(json).unwrap();
        assert_eq!(blocks, vec![Block::cell(3, 1, vec![])]);
    }

    #[test]
    fn test_cell_without_position_is_dropped() {
        let json = r#"[{"BlockType": "CELL", "Id": "c1", "RowIndex": 3}]"#;
        let blocks = parse_blocks(json).unwrap();
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_non_child_relationships_ignored() {
        let json = r#"[
            {"BlockType": "CELL", "Id": "c1", "RowIndex": 1, "ColumnIndex": 1,
             "Relationships": [
                 {"Type": "MERGED_CELL", "Ids": ["m1"]},
                 {"Type": "CHILD", "Ids": ["w1"]}
             ]}
        ]"#;
        let blocks = parse_blocks(json).unwrap();
        assert_eq!(blocks, vec![Block::cell(1, 1, vec![BlockId::new("w1")])]);
    }

    #[test]
    fn test_textless_block_kept_as_fragment() {
        let json = r#"[{"BlockType": "SELECTION_ELEMENT", "Id": "s1"}]"#;
        let blocks = parse_blocks(json).unwrap();
        assert_eq!(
            blocks,
            vec![Block::Fragment(TextFragment {
                id: BlockId::new("s1"),
                text: None,
            })]
        );
    }

    #[test]
    fn test_malformed_json_is_invalid_input() {
        let err = parse_blocks("{not json").unwrap_err();
        assert!(err.to_string().contains("Invalid input"));
    }
}
