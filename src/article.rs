//! Article data model
//!
//! Articles and sections are owned by the draft storage and generation services. They arrive
//! as loosely shaped JSON: any structural field may be missing or null, and persistence
//! fields (`_id`, `userId`, `status`, timestamps, ...) are present but irrelevant here.
//!
//! The model keeps the structural fields optional and stores everything else in `extra`, so
//! an article read and written back through these types is unchanged.

use crate::blocks::{parse_content_blocks, Block};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Title used when an article has none.
pub const UNTITLED: &str = "Untitled";

/// Heading used when a section has none.
pub const DEFAULT_HEADING: &str = "Section";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Document order. Null entries are tolerated and skipped when rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Option<Section>>>,
    /// Persistence-layer fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Opaque, caller-assigned.
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    /// Raw markup-lite body. Blocks are always derived from this, never stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Article {
    /// Creates an article with a title and no tags or sections.
    pub fn new(title: impl Into<String>) -> Self {
        Article {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Appends a section, keeping document order.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.get_or_insert_with(Vec::new).push(Some(section));
        self
    }

    /// The title to render. Absent and empty titles fall back to [`UNTITLED`].
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => UNTITLED,
        }
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Sections in document order, skipping null entries.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().flatten().flatten()
    }
}

impl Section {
    pub fn new(heading: impl Into<String>, content: impl Into<String>) -> Self {
        Section {
            heading: Some(heading.into()),
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    /// The heading to render. Absent and empty headings fall back to [`DEFAULT_HEADING`].
    pub fn display_heading(&self) -> &str {
        match self.heading.as_deref() {
            Some(heading) if !heading.is_empty() => heading,
            _ => DEFAULT_HEADING,
        }
    }

    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    /// Parses the section body into blocks.
    pub fn blocks(&self) -> Vec<Block> {
        parse_content_blocks(self.content())
    }
}
