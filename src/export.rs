//! Export payloads
//!
//! Renderers produce strings; export consumers (file download, clipboard copy) also need a
//! file name and a MIME type. This module packages both:
//!
//! - [ExportFile]: one rendered document plus the slugged file name and its MIME type.
//! - [ClipboardPayload]: the HTML and Markdown renderings of the same article, keyed by the
//!   MIME types a rich clipboard write expects. Markdown doubles as the plain-text flavor.

use crate::article::Article;
use crate::error::Result;
use crate::formats::{build_html_from_article, build_markdown_from_article, Formatter};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File stem used when an article has no title.
pub const DEFAULT_FILE_STEM: &str = "article";

static NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").unwrap());

/// Slug a title into a file stem: every character outside `[a-z0-9]` (either case) becomes
/// `-`, then the result is lowercased. Runs of dashes are kept.
pub fn slugify_title(title: &str) -> String {
    NON_ALPHANUMERIC.replace_all(title, "-").to_lowercase()
}

/// File name for an exported article, e.g. `my-first-post.md`.
pub fn export_file_name(title: Option<&str>, extension: &str, fallback_stem: &str) -> String {
    let stem = match title {
        Some(title) if !title.is_empty() => slugify_title(title),
        _ => fallback_stem.to_string(),
    };
    format!("{stem}.{extension}")
}

/// A rendered document ready to be saved or handed to a download flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: String,
    pub contents: String,
}

impl ExportFile {
    /// Write the contents into `dir` under [`ExportFile::file_name`].
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        self.write_to(&path)?;
        Ok(path)
    }

    /// Write the contents to an explicit path.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, &self.contents)?;
        tracing::debug!(path = %path.display(), bytes = self.contents.len(), "wrote export");
        Ok(())
    }
}

/// Render `article` with `formatter`, naming the file after the title.
pub fn export_article(article: &Article, formatter: &dyn Formatter) -> Result<ExportFile> {
    export_article_with_stem(article, formatter, DEFAULT_FILE_STEM)
}

/// Like [export_article], with a custom stem for untitled articles.
pub fn export_article_with_stem(
    article: &Article,
    formatter: &dyn Formatter,
    fallback_stem: &str,
) -> Result<ExportFile> {
    let contents = formatter.serialize(article)?;
    let file_name = export_file_name(
        article.title.as_deref(),
        formatter.extension(),
        fallback_stem,
    );
    tracing::debug!(format = formatter.name(), %file_name, "exported article");
    Ok(ExportFile {
        file_name,
        mime_type: formatter.mime_type().to_string(),
        contents,
    })
}

/// Both renderings of an article, for a rich clipboard write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClipboardPayload {
    #[serde(rename = "text/html", skip_serializing_if = "String::is_empty")]
    pub html: String,
    #[serde(rename = "text/plain")]
    pub markdown: String,
}

impl ClipboardPayload {
    /// MIME type / content pairs. The HTML entry is left out when there is no HTML.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = Vec::with_capacity(2);
        if !self.html.is_empty() {
            entries.push(("text/html", self.html.as_str()));
        }
        entries.push(("text/plain", self.markdown.as_str()));
        entries
    }
}

/// Render an article for the clipboard. `None` yields an empty payload.
pub fn clipboard_payload(article: Option<&Article>) -> ClipboardPayload {
    ClipboardPayload {
        html: build_html_from_article(article),
        markdown: build_markdown_from_article(article),
    }
}
