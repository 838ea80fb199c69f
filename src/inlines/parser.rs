use super::nodes::{InlineContent, InlineKind, InlineSegment};

/// A delimiter pair and the kind of segment it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineSpec {
    pub kind: InlineKind,
    /// Used for both the opening and the closing side.
    pub delimiter: &'static str,
}

/// Delimiters in the order they are tried at each position.
///
/// Doubled delimiters come first so `**a**` is strong rather than an emphasis around `*a*`.
pub const SPECS: [InlineSpec; 4] = [
    InlineSpec {
        kind: InlineKind::Strong,
        delimiter: "**",
    },
    InlineSpec {
        kind: InlineKind::Strong,
        delimiter: "__",
    },
    InlineSpec {
        kind: InlineKind::Emphasis,
        delimiter: "*",
    },
    InlineSpec {
        kind: InlineKind::Emphasis,
        delimiter: "_",
    },
];

/// Parse inline segments from a single line.
pub fn parse_inline_segments(text: &str) -> InlineContent {
    let mut segments = Vec::new();
    if text.is_empty() {
        return segments;
    }

    let mut plain_start = 0;
    let mut cursor = 0;
    while cursor < text.len() {
        if let Some((segment, end)) = match_at(text, cursor) {
            if cursor > plain_start {
                segments.push(InlineSegment::text(&text[plain_start..cursor]));
            }
            segments.push(segment);
            cursor = end;
            plain_start = end;
            continue;
        }
        // Delimiters are ASCII, so stepping a whole char keeps `cursor` on a boundary.
        cursor += text[cursor..].chars().next().map_or(1, char::len_utf8);
    }

    if plain_start < text.len() {
        segments.push(InlineSegment::text(&text[plain_start..]));
    }
    segments
}

/// Try every spec at `start`; returns the segment and the byte offset just past it.
fn match_at(text: &str, start: usize) -> Option<(InlineSegment, usize)> {
    let rest = &text[start..];
    if !rest.starts_with(|c: char| c == '*' || c == '_') {
        return None;
    }
    SPECS.iter().find_map(|spec| {
        let content_len = match_spec(rest, spec)?;
        let delimiter_len = spec.delimiter.len();
        let content = &rest[delimiter_len..delimiter_len + content_len];
        let end = start + delimiter_len * 2 + content_len;
        Some((InlineSegment::of_kind(spec.kind, content), end))
    })
}

/// Length of the content enclosed by `spec` at the head of `rest`, if it matches.
///
/// Content runs up to the first occurrence of the delimiter character, which must then
/// begin a full closing delimiter.
fn match_spec(rest: &str, spec: &InlineSpec) -> Option<usize> {
    let after_open = rest.strip_prefix(spec.delimiter)?;
    let marker = spec.delimiter.chars().next()?;
    let content_len = after_open.find(marker)?;
    if content_len == 0 {
        return None;
    }
    after_open[content_len..]
        .starts_with(spec.delimiter)
        .then_some(content_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn text(value: &str) -> InlineSegment {
        InlineSegment::text(value)
    }

    fn strong(value: &str) -> InlineSegment {
        InlineSegment::strong(value)
    }

    fn em(value: &str) -> InlineSegment {
        InlineSegment::emphasis(value)
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_inline_segments("").is_empty());
    }

    #[test]
    fn test_plain_line_is_single_text() {
        assert_eq!(
            parse_inline_segments("just words here"),
            vec![text("just words here")]
        );
    }

    #[test]
    fn test_mixed_bold_and_italic() {
        assert_eq!(
            parse_inline_segments("Hello **world** and _friends_"),
            vec![text("Hello "), strong("world"), text(" and "), em("friends")]
        );
    }

    #[rstest]
    #[case("**bold**", vec![strong("bold")])]
    #[case("__bold__", vec![strong("bold")])]
    #[case("*italic*", vec![em("italic")])]
    #[case("_italic_", vec![em("italic")])]
    #[case("a **b** c", vec![text("a "), strong("b"), text(" c")])]
    #[case("**a** **b**", vec![strong("a"), text(" "), strong("b")])]
    #[case("*a*_b_", vec![em("a"), em("b")])]
    #[case("snake_case_name", vec![text("snake"), em("case"), text("name")])]
    #[case("a * b * c", vec![text("a "), em(" b "), text(" c")])]
    fn test_token_shapes(#[case] input: &str, #[case] expected: Vec<InlineSegment>) {
        assert_eq!(parse_inline_segments(input), expected);
    }

    #[rstest]
    #[case("**")]
    #[case("****")]
    #[case("__")]
    #[case("*")]
    #[case("_")]
    #[case("**open only")]
    #[case("close only**")]
    #[case("*unbalanced")]
    fn test_literal_fallthrough(#[case] input: &str) {
        assert_eq!(parse_inline_segments(input), vec![text(input)]);
    }

    #[test]
    fn test_strong_that_fails_falls_back_to_emphasis_later() {
        // `**a*` cannot close as strong; the scan retries at the next `*`.
        assert_eq!(
            parse_inline_segments("**a* b"),
            vec![text("*"), em("a"), text(" b")]
        );
    }

    #[test]
    fn test_no_nesting() {
        assert_eq!(
            parse_inline_segments("**bold _inner_ text**"),
            vec![strong("bold _inner_ text")]
        );
        assert_eq!(
            parse_inline_segments("_it **x** it_"),
            vec![em("it **x** it")]
        );
    }

    #[test]
    fn test_multibyte_text_is_preserved() {
        assert_eq!(
            parse_inline_segments("café **naïve** 日本"),
            vec![text("café "), strong("naïve"), text(" 日本")]
        );
    }

    #[test]
    fn test_specs_precedence_order() {
        let delimiters: Vec<_> = SPECS.iter().map(|spec| spec.delimiter).collect();
        assert_eq!(delimiters, vec!["**", "__", "*", "_"]);
    }
}
