//! Article loading
//!
//! Articles arrive as the JSON documents the draft storage returns. YAML is accepted as well
//! for hand-written fixtures. The format is picked from the file extension: `.yaml` and `.yml`
//! are YAML, anything else is JSON.

use crate::article::Article;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Serialization of an article source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Detect from a path's extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => SourceFormat::Yaml,
            _ => SourceFormat::Json,
        }
    }
}

/// Parse an article from a JSON string.
pub fn parse_article_json(source: &str) -> Result<Article> {
    Ok(serde_json::from_str(source)?)
}

/// Parse an article from a YAML string.
pub fn parse_article_yaml(source: &str) -> Result<Article> {
    Ok(serde_yaml::from_str(source)?)
}

/// Parse an article from a string in the given format.
pub fn parse_article(source: &str, format: SourceFormat) -> Result<Article> {
    match format {
        SourceFormat::Json => parse_article_json(source),
        SourceFormat::Yaml => parse_article_yaml(source),
    }
}

/// Read and parse an article file.
pub fn load_article(path: impl AsRef<Path>) -> Result<Article> {
    let path = path.as_ref();
    let format = SourceFormat::from_path(path);
    tracing::debug!(path = %path.display(), ?format, "loading article");
    let source = fs::read_to_string(path)?;
    parse_article(&source, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_source_format_from_path() {
        assert_eq!(SourceFormat::from_path(Path::new("a.json")), SourceFormat::Json);
        assert_eq!(SourceFormat::from_path(Path::new("a.YML")), SourceFormat::Yaml);
        assert_eq!(SourceFormat::from_path(Path::new("a.yaml")), SourceFormat::Yaml);
        assert_eq!(SourceFormat::from_path(Path::new("article")), SourceFormat::Json);
    }

    #[test]
    fn test_parse_json_article() {
        let article = parse_article_json(
            r#"{"title": "T", "tags": ["a"], "sections": [{"id": "1", "heading": "H", "content": "- x", "order": 1}]}"#,
        )
        .unwrap();

        assert_eq!(article.display_title(), "T");
        assert_eq!(article.sections().count(), 1);
    }

    #[test]
    fn test_parse_yaml_article() {
        let source = "title: T\ntags: [a, b]\nsections:\n  - id: s1\n    heading: H\n    content: |\n      line one\n      line two\n    order: 1\n";
        let article = parse_article_yaml(source).unwrap();

        assert_eq!(article.tags(), ["a".to_string(), "b".to_string()]);
        let section = article.sections().next().unwrap();
        assert_eq!(section.content(), "line one\nline two\n");
    }

    #[test]
    fn test_invalid_json_is_reported() {
        assert!(matches!(parse_article_json("[1, 2"), Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            load_article("/nonexistent/draftmark/article.json"),
            Err(Error::Io(_))
        ));
    }
}
