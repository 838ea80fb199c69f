//! Format registry for article export
//!
//! This module provides a pluggable registry of export formats. Each format implements the
//! `Formatter` trait and can be registered with `FormatRegistry`.

use crate::article::Article;
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
}

/// Trait for article formatters
///
/// Implementors serialize an article to a string and describe the payload they produce so
/// export consumers can name and type the file.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "markdown", "html")
    fn name(&self) -> &str;

    /// File extension without the leading dot
    fn extension(&self) -> &str;

    /// MIME type declared to export consumers
    fn mime_type(&self) -> &str;

    /// Serialize an article to this format
    fn serialize(&self, article: &Article) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of article formatters
///
/// Formats are registered and retrieved by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Result<&dyn Formatter, FormatError> {
        self.formatters
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize an article using the specified format
    pub fn serialize(&self, article: &Article, format: &str) -> Result<String, FormatError> {
        let formatter = self.get(format)?;
        tracing::debug!(format, "serializing article");
        formatter.serialize(article)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the markdown and html formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::MarkdownFormatter);
        registry.register(super::HtmlFormatter::default());
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
