//! Line Classification
//!
//! Determines the type of a single source line. Classification follows this order
//! (important for correctness):
//! 1. Blank lines (nothing left after trimming)
//! 2. Bullet lines: `-` or `*`, at least one whitespace, content
//! 3. Numbered lines: ASCII digits, `.` or `)`, at least one whitespace, content
//! 4. Default to paragraph
//!
//! `**bold** start` is a paragraph line: the `*` marker must be followed by whitespace.

use super::nodes::ListKind;

/// A classified line, borrowing the text that remains once markers are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType<'a> {
    Blank,
    Bullet(&'a str),
    Numbered(&'a str),
    Paragraph(&'a str),
}

impl<'a> LineType<'a> {
    /// The list kind this line opens or continues, if any.
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            LineType::Bullet(_) => Some(ListKind::Unordered),
            LineType::Numbered(_) => Some(ListKind::Ordered),
            LineType::Blank | LineType::Paragraph(_) => None,
        }
    }
}

/// Classify one raw line (without its line terminator).
pub fn classify_line(raw: &str) -> LineType<'_> {
    let line = trim_line(raw);
    if line.is_empty() {
        return LineType::Blank;
    }
    if let Some(content) = bullet_content(line) {
        return LineType::Bullet(content);
    }
    if let Some(content) = numbered_content(line) {
        return LineType::Numbered(content);
    }
    LineType::Paragraph(line)
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Trim surrounding whitespace, including a stray byte order mark.
fn trim_line(raw: &str) -> &str {
    raw.trim_matches(is_space)
}

fn bullet_content(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(&['-', '*'][..])?;
    after_marker_space(rest)
}

fn numbered_content(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix(&['.', ')'][..])?;
    after_marker_space(rest)
}

/// Requires at least one whitespace character after a marker and skips all of them.
///
/// An item never spans a line or paragraph separator (U+2028, U+2029); such lines stay
/// paragraphs.
fn after_marker_space(rest: &str) -> Option<&str> {
    if !rest.starts_with(is_space) {
        return None;
    }
    let content = rest.trim_start_matches(is_space);
    if content.contains(&['\u{2028}', '\u{2029}'][..]) {
        return None;
    }
    Some(content)
}
