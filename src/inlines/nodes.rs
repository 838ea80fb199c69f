//! Inline segment nodes.
//!
//! Segments are flat runs of text. They serialize to the tagged shape the editing UI reads:
//! `{"type": "text" | "strong" | "em", "value": "..."}`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequence of inline segments produced from one line.
pub type InlineContent = Vec<InlineSegment>;

/// The kind of an inline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InlineKind {
    Text,
    /// Bold: `**text**` or `__text__`
    Strong,
    /// Italic: `*text*` or `_text_`
    Emphasis,
}

impl fmt::Display for InlineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InlineKind::Text => write!(f, "text"),
            InlineKind::Strong => write!(f, "strong"),
            InlineKind::Emphasis => write!(f, "em"),
        }
    }
}

/// One run of text carrying a single emphasis state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InlineSegment {
    /// Plain text, kept verbatim.
    #[serde(rename = "text")]
    Text { value: String },
    /// Text between strong delimiters, delimiters excluded.
    #[serde(rename = "strong")]
    Strong { value: String },
    /// Text between emphasis delimiters, delimiters excluded.
    #[serde(rename = "em")]
    Emphasis { value: String },
}

impl InlineSegment {
    pub fn text(value: impl Into<String>) -> Self {
        InlineSegment::Text {
            value: value.into(),
        }
    }

    pub fn strong(value: impl Into<String>) -> Self {
        InlineSegment::Strong {
            value: value.into(),
        }
    }

    pub fn emphasis(value: impl Into<String>) -> Self {
        InlineSegment::Emphasis {
            value: value.into(),
        }
    }

    /// Builds a formatted segment of the given kind.
    pub fn of_kind(kind: InlineKind, value: impl Into<String>) -> Self {
        match kind {
            InlineKind::Text => InlineSegment::text(value),
            InlineKind::Strong => InlineSegment::strong(value),
            InlineKind::Emphasis => InlineSegment::emphasis(value),
        }
    }

    pub fn kind(&self) -> InlineKind {
        match self {
            InlineSegment::Text { .. } => InlineKind::Text,
            InlineSegment::Strong { .. } => InlineKind::Strong,
            InlineSegment::Emphasis { .. } => InlineKind::Emphasis,
        }
    }

    /// The run's text without any delimiters.
    pub fn value(&self) -> &str {
        match self {
            InlineSegment::Text { value }
            | InlineSegment::Strong { value }
            | InlineSegment::Emphasis { value } => value,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, InlineSegment::Text { .. })
    }
}
