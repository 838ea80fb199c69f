//! Output format implementations for article export
//!
//! This module contains the renderers that turn an [Article](crate::Article) into text:
//! - Markdown with a front-matter header ([markdown])
//! - A semantic HTML fragment ([html])
//!
//! Both walk the same structure (sections in document order, each section body re-parsed into
//! blocks) and share the fallbacks for missing titles and headings. They never call each
//! other. The [registry] makes them selectable by name.

pub mod escape;
pub mod html;
pub mod markdown;
pub mod registry;

pub use escape::{escape_front_matter, escape_html};
pub use html::{build_html_from_article, segments_to_html, HtmlFormatter, DEFAULT_ARTICLE_CLASS};
pub use markdown::{build_markdown_from_article, segments_to_markdown, MarkdownFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
