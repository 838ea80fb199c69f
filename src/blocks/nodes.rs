//! Block nodes.
//!
//! Blocks serialize to the tagged shape the editing UI reads:
//! `{"type": "paragraph", "segments": [...]}` and `{"type": "ul" | "ol", "items": [[...]]}`.

use crate::inlines::InlineContent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bulleted or numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Unordered => write!(f, "ul"),
            ListKind::Ordered => write!(f, "ol"),
        }
    }
}

/// A block-level unit derived from one or more contiguous source lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    /// Contiguous plain lines, joined with single spaces.
    #[serde(rename = "paragraph")]
    Paragraph { segments: InlineContent },
    /// Contiguous bullet lines (`-` or `*`).
    #[serde(rename = "ul")]
    UnorderedList { items: Vec<InlineContent> },
    /// Contiguous numbered lines (`1.` or `1)`). Source numbers are not kept.
    #[serde(rename = "ol")]
    OrderedList { items: Vec<InlineContent> },
}

impl Block {
    pub fn paragraph(segments: InlineContent) -> Self {
        Block::Paragraph { segments }
    }

    pub fn list(kind: ListKind, items: Vec<InlineContent>) -> Self {
        match kind {
            ListKind::Unordered => Block::UnorderedList { items },
            ListKind::Ordered => Block::OrderedList { items },
        }
    }

    /// Returns the list kind, or `None` for paragraphs.
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Block::Paragraph { .. } => None,
            Block::UnorderedList { .. } => Some(ListKind::Unordered),
            Block::OrderedList { .. } => Some(ListKind::Ordered),
        }
    }

    /// Returns list items, or `None` for paragraphs.
    pub fn items(&self) -> Option<&[InlineContent]> {
        match self {
            Block::Paragraph { .. } => None,
            Block::UnorderedList { items } | Block::OrderedList { items } => Some(items),
        }
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph { .. })
    }
}
