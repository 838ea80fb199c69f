//! Markdown export
//!
//! Output shape:
//!
//! ```text
//! ---
//! title: "<title, quotes escaped>"
//! tags: ["a", "b"]
//! ---
//!
//! # <title>
//!
//! ## <heading>
//!
//! paragraph text with **strong** and _emphasis_
//!
//! - bullet item
//!
//! 1. numbered item
//! ```
//!
//! Strong is always written `**v**` and emphasis `_v_`, whatever spelling the source used, and
//! ordered lists are renumbered from 1. A section body written this way parses back into the
//! same blocks as long as no strong or emphasis value contains `*` or `_`. Trailing
//! whitespace is trimmed from the document.

use super::escape::escape_front_matter;
use super::registry::{FormatError, Formatter};
use crate::article::Article;
use crate::blocks::Block;
use crate::inlines::{InlineContent, InlineSegment};

/// Render an article to Markdown. `None` renders as the empty string.
pub fn build_markdown_from_article(article: Option<&Article>) -> String {
    match article {
        Some(article) => render_article(article),
        None => String::new(),
    }
}

/// Re-wrap segments in Markdown delimiters.
pub fn segments_to_markdown(segments: &[InlineSegment]) -> String {
    let mut result = String::new();
    for segment in segments {
        match segment {
            InlineSegment::Text { value } => result.push_str(value),
            InlineSegment::Strong { value } => {
                result.push_str("**");
                result.push_str(value);
                result.push_str("**");
            }
            InlineSegment::Emphasis { value } => {
                result.push('_');
                result.push_str(value);
                result.push('_');
            }
        }
    }
    result
}

fn render_article(article: &Article) -> String {
    let title = article.display_title();
    let tags = article
        .tags()
        .iter()
        .map(|tag| format!("\"{}\"", escape_front_matter(tag)))
        .collect::<Vec<_>>()
        .join(", ");

    let mut output = String::from("---\n");
    output.push_str(&format!("title: \"{}\"\n", escape_front_matter(title)));
    output.push_str(&format!("tags: [{tags}]\n"));
    output.push_str("---\n\n");
    output.push_str(&format!("# {title}\n\n"));

    for section in article.sections() {
        output.push_str(&format!("## {}\n\n", section.display_heading()));
        for block in section.blocks() {
            render_block(&mut output, &block);
        }
    }

    output.truncate(output.trim_end().len());
    output
}

fn render_block(output: &mut String, block: &Block) {
    match block {
        Block::Paragraph { segments } => {
            output.push_str(&segments_to_markdown(segments));
            output.push_str("\n\n");
        }
        Block::UnorderedList { items } => {
            render_items(output, items, |_| "-".to_string());
        }
        Block::OrderedList { items } => {
            render_items(output, items, |index| format!("{}.", index + 1));
        }
    }
}

fn render_items(output: &mut String, items: &[InlineContent], marker: impl Fn(usize) -> String) {
    for (index, item) in items.iter().enumerate() {
        output.push_str(&marker(index));
        output.push(' ');
        output.push_str(&segments_to_markdown(item));
        output.push('\n');
    }
    output.push('\n');
}

/// Markdown with front-matter (`text/markdown`, `.md`).
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl Formatter for MarkdownFormatter {
    fn name(&self) -> &str {
        "markdown"
    }

    fn extension(&self) -> &str {
        "md"
    }

    fn mime_type(&self) -> &str {
        "text/markdown"
    }

    fn serialize(&self, article: &Article) -> Result<String, FormatError> {
        Ok(render_article(article))
    }

    fn description(&self) -> &str {
        "Markdown with a title/tags front-matter header"
    }
}
