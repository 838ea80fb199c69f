//! HTML serialization (article → HTML fragment)
//!
//! Emits one concatenated string, no indentation:
//! `<article class="medium-export"><h1>title</h1><section><h2>heading</h2>...</section></article>`
//!
//! Paragraphs become `<p>`, lists `<ul>`/`<ol>` with `<li>` items, strong and emphasis runs
//! `<strong>`/`<em>`. Every piece of text is escaped exactly once with [escape_html]. Markup in
//! the source is never passed through.

use super::escape::escape_html;
use super::registry::{FormatError, Formatter};
use crate::article::Article;
use crate::blocks::Block;
use crate::inlines::{InlineContent, InlineSegment};

/// Class put on the `<article>` wrapper unless configured otherwise.
pub const DEFAULT_ARTICLE_CLASS: &str = "medium-export";

/// Render an article to HTML. `None` renders as the empty string.
pub fn build_html_from_article(article: Option<&Article>) -> String {
    match article {
        Some(article) => render_article(article, DEFAULT_ARTICLE_CLASS),
        None => String::new(),
    }
}

fn render_article(article: &Article, article_class: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    if article_class.is_empty() {
        parts.push("<article>".to_string());
    } else {
        parts.push(format!("<article class=\"{}\">", escape_html(article_class)));
    }
    parts.push(format!("<h1>{}</h1>", escape_html(article.display_title())));

    for section in article.sections() {
        parts.push("<section>".to_string());
        parts.push(format!("<h2>{}</h2>", escape_html(section.display_heading())));
        for block in section.blocks() {
            render_block(&mut parts, &block);
        }
        parts.push("</section>".to_string());
    }

    parts.push("</article>".to_string());
    parts.concat()
}

fn render_block(parts: &mut Vec<String>, block: &Block) {
    match block {
        Block::Paragraph { segments } => {
            parts.push(format!("<p>{}</p>", segments_to_html(segments)));
        }
        Block::UnorderedList { items } => render_list(parts, "ul", items),
        Block::OrderedList { items } => render_list(parts, "ol", items),
    }
}

fn render_list(parts: &mut Vec<String>, tag: &str, items: &[InlineContent]) {
    parts.push(format!("<{tag}>"));
    for item in items {
        parts.push(format!("<li>{}</li>", segments_to_html(item)));
    }
    parts.push(format!("</{tag}>"));
}

/// Render segments as escaped HTML text with `<strong>`/`<em>` wrappers.
pub fn segments_to_html(segments: &[InlineSegment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            InlineSegment::Text { value } => escape_html(value),
            InlineSegment::Strong { value } => format!("<strong>{}</strong>", escape_html(value)),
            InlineSegment::Emphasis { value } => format!("<em>{}</em>", escape_html(value)),
        })
        .collect()
}

/// Semantic HTML fragment (`text/html`, `.html`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlFormatter {
    article_class: String,
}

impl HtmlFormatter {
    /// An empty class emits a bare `<article>`.
    pub fn new(article_class: impl Into<String>) -> Self {
        HtmlFormatter {
            article_class: article_class.into(),
        }
    }

    pub fn article_class(&self) -> &str {
        &self.article_class
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        HtmlFormatter::new(DEFAULT_ARTICLE_CLASS)
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn extension(&self) -> &str {
        "html"
    }

    fn mime_type(&self) -> &str {
        "text/html"
    }

    fn serialize(&self, article: &Article) -> Result<String, FormatError> {
        Ok(render_article(article, &self.article_class))
    }

    fn description(&self) -> &str {
        "Semantic HTML fragment wrapped in <article>"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::Section;

    #[test]
    fn test_none_renders_empty() {
        assert_eq!(build_html_from_article(None), "");
    }

    #[test]
    fn test_empty_article() {
        assert_eq!(
            build_html_from_article(Some(&Article::default())),
            "<article class=\"medium-export\"><h1>Untitled</h1></article>"
        );
    }

    #[test]
    fn test_script_content_is_escaped() {
        let article =
            Article::new("T").with_section(Section::new("S", "<script>alert(1)</script>"));
        let html = build_html_from_article(Some(&article));

        assert!(html.contains("<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_title_and_heading_are_escaped() {
        let article = Article::new("Tom & \"Jerry\"").with_section(Section::new("<b>", ""));
        let html = build_html_from_article(Some(&article));

        assert!(html.contains("<h1>Tom &amp; &quot;Jerry&quot;</h1>"));
        assert!(html.contains("<section><h2>&lt;b&gt;</h2></section>"));
    }

    #[test]
    fn test_inline_wrappers_escape_inner_text_once() {
        assert_eq!(
            segments_to_html(&[
                InlineSegment::text("a & "),
                InlineSegment::strong("<b>"),
                InlineSegment::emphasis("it's"),
            ]),
            "a &amp; <strong>&lt;b&gt;</strong><em>it&#39;s</em>"
        );
    }

    #[test]
    fn test_lists() {
        let article = Article::new("T").with_section(Section::new("S", "- a\n- b\n\n3. c"));
        let html = build_html_from_article(Some(&article));

        assert!(html.contains("<ul><li>a</li><li>b</li></ul><ol><li>c</li></ol>"));
    }

    #[test]
    fn test_configured_article_class() {
        let article = Article::new("T");
        let bare = HtmlFormatter::new("").serialize(&article).unwrap();
        let custom = HtmlFormatter::new("post").serialize(&article).unwrap();

        assert_eq!(bare, "<article><h1>T</h1></article>");
        assert_eq!(custom, "<article class=\"post\"><h1>T</h1></article>");
    }
}
