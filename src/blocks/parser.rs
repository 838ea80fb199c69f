use super::line_classification::{classify_line, LineType};
use super::nodes::{Block, ListKind};
use crate::inlines::{parse_inline_segments, InlineContent};
use std::borrow::Cow;

/// Collapse `\r\n` and lone `\r` into `\n`.
pub fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if !content.contains('\r') {
        return Cow::Borrowed(content);
    }
    Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Parse a section body into blocks.
pub fn parse_content_blocks(content: &str) -> Vec<Block> {
    let normalized = normalize_newlines(content);
    let mut accumulator = BlockAccumulator::default();

    for raw_line in normalized.split('\n') {
        accumulator.push_line(classify_line(raw_line));
    }

    let blocks = accumulator.finish();
    tracing::trace!(blocks = blocks.len(), "parsed content blocks");
    blocks
}

struct OpenList {
    kind: ListKind,
    items: Vec<InlineContent>,
}

/// Open paragraph and list state for a single parse call.
#[derive(Default)]
struct BlockAccumulator<'a> {
    blocks: Vec<Block>,
    paragraph: Vec<&'a str>,
    list: Option<OpenList>,
}

impl<'a> BlockAccumulator<'a> {
    fn push_line(&mut self, line: LineType<'a>) {
        match line {
            LineType::Blank => self.flush_all(),
            LineType::Bullet(content) => self.push_item(ListKind::Unordered, content),
            LineType::Numbered(content) => self.push_item(ListKind::Ordered, content),
            LineType::Paragraph(text) => {
                self.flush_list();
                self.paragraph.push(text);
            }
        }
    }

    fn push_item(&mut self, kind: ListKind, content: &str) {
        self.flush_paragraph();
        if self.list.as_ref().map(|list| list.kind) != Some(kind) {
            self.flush_list();
            self.list = Some(OpenList {
                kind,
                items: Vec::new(),
            });
        }
        if let Some(list) = self.list.as_mut() {
            list.items.push(parse_inline_segments(content));
        }
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let joined = self.paragraph.join(" ");
        self.paragraph.clear();
        self.blocks.push(Block::paragraph(parse_inline_segments(&joined)));
    }

    fn flush_list(&mut self) {
        if let Some(list) = self.list.take() {
            self.blocks.push(Block::list(list.kind, list.items));
        }
    }

    /// Paragraph first, then list.
    fn flush_all(&mut self) {
        self.flush_paragraph();
        self.flush_list();
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_all();
        self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inlines::InlineSegment;

    fn text(value: &str) -> InlineSegment {
        InlineSegment::text(value)
    }

    fn items(values: &[&str]) -> Vec<InlineContent> {
        values.iter().map(|value| vec![text(value)]).collect()
    }

    #[test]
    fn test_empty_content() {
        assert!(parse_content_blocks("").is_empty());
        assert!(parse_content_blocks("\n\n   \n").is_empty());
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(
            parse_content_blocks("- a\n- b"),
            vec![Block::UnorderedList {
                items: items(&["a", "b"])
            }]
        );
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            parse_content_blocks("1. a\n2. b"),
            vec![Block::OrderedList {
                items: items(&["a", "b"])
            }]
        );
    }

    #[test]
    fn test_list_type_change_splits_lists() {
        assert_eq!(
            parse_content_blocks("- a\n1. b"),
            vec![
                Block::UnorderedList {
                    items: items(&["a"])
                },
                Block::OrderedList {
                    items: items(&["b"])
                },
            ]
        );
    }

    #[test]
    fn test_mixed_bullet_markers_share_a_list() {
        assert_eq!(
            parse_content_blocks("- a\n* b\n- c"),
            vec![Block::UnorderedList {
                items: items(&["a", "b", "c"])
            }]
        );
    }

    #[test]
    fn test_paragraph_join() {
        assert_eq!(
            parse_content_blocks("line one\nline two\n\nline three"),
            vec![
                Block::paragraph(vec![text("line one line two")]),
                Block::paragraph(vec![text("line three")]),
            ]
        );
    }

    #[test]
    fn test_blank_line_splits_same_kind_lists() {
        assert_eq!(
            parse_content_blocks("- a\n\n- b"),
            vec![
                Block::UnorderedList {
                    items: items(&["a"])
                },
                Block::UnorderedList {
                    items: items(&["b"])
                },
            ]
        );
    }

    #[test]
    fn test_paragraph_then_list_without_blank_line() {
        assert_eq!(
            parse_content_blocks("Intro:\n- a\n- b\nOutro"),
            vec![
                Block::paragraph(vec![text("Intro:")]),
                Block::UnorderedList {
                    items: items(&["a", "b"])
                },
                Block::paragraph(vec![text("Outro")]),
            ]
        );
    }

    #[test]
    fn test_line_endings_are_normalized() {
        let expected = vec![
            Block::paragraph(vec![text("a b")]),
            Block::paragraph(vec![text("c")]),
        ];
        assert_eq!(parse_content_blocks("a\r\nb\r\n\r\nc"), expected);
        assert_eq!(parse_content_blocks("a\rb\r\rc"), expected);
    }

    #[test]
    fn test_inline_markup_spans_joined_paragraph_lines() {
        assert_eq!(
            parse_content_blocks("start **bold\ncontinues** end"),
            vec![Block::paragraph(vec![
                text("start "),
                InlineSegment::strong("bold continues"),
                text(" end"),
            ])]
        );
    }

    #[test]
    fn test_list_items_are_segmented() {
        assert_eq!(
            parse_content_blocks("1) **Key** point"),
            vec![Block::OrderedList {
                items: vec![vec![InlineSegment::strong("Key"), text(" point")]]
            }]
        );
    }

    #[test]
    fn test_normalize_newlines_borrows_when_clean() {
        assert!(matches!(normalize_newlines("a\nb"), Cow::Borrowed(_)));
        assert_eq!(normalize_newlines("a\r\nb\rc"), "a\nb\nc");
    }
}
