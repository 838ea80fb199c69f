//! # draftmark
//!
//! A parser for the markup-lite text used in article drafts, plus the exporters that turn
//! a parsed article into Markdown (with front-matter) or semantic HTML.
//!
//! Pipeline
//!
//!     Each section body goes through two stages:
//!
//!     - [blocks]: line classification and grouping into paragraphs and lists.
//!     - [inlines]: segmentation of one line into plain / strong / emphasis runs.
//!
//!     The resulting `Vec<Block>` is the intermediate representation. It is consumed by the
//!     editing UI directly and by the renderers in [formats]. Renderers never store blocks;
//!     they re-derive them from `Section::content` on every call.
//!
//! Every parse and render function is total: malformed markup degrades to literal text.
//! Only the edges ([loader], [export] writing, format lookup) can fail, see [Error].

pub mod article;
pub mod blocks;
pub mod error;
pub mod export;
pub mod formats;
pub mod inlines;
pub mod loader;

pub use article::{Article, Section};
pub use blocks::{parse_content_blocks, Block, ListKind};
pub use error::{Error, Result};
pub use formats::{
    build_html_from_article, build_markdown_from_article, FormatError, FormatRegistry, Formatter,
    HtmlFormatter, MarkdownFormatter,
};
pub use inlines::{parse_inline_segments, InlineSegment};
