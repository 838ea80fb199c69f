//! Shared configuration loader for the draftmark tools.
//!
//! `defaults/draftmark.default.toml` is embedded into every binary so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those defaults via
//! [`Loader`] before deserializing into [`DraftmarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/draftmark.default.toml");

/// Top-level configuration consumed by draftmark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftmarkConfig {
    pub export: ExportConfig,
    pub html: HtmlConfig,
    pub logging: LoggingConfig,
}

/// Export defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub default_format: String,
    pub fallback_file_stem: String,
}

/// HTML renderer knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub article_class: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DraftmarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DraftmarkConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.export.default_format, "markdown");
        assert_eq!(config.export.fallback_file_stem, "article");
        assert_eq!(config.html.article_class, "medium-export");
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("export.default_format", "html")
            .expect("override to apply")
            .set_override("html.article_class", "")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.export.default_format, "html");
        assert_eq!(config.html.article_class, "");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/draftmark.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.export.default_format, "markdown");
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new()
            .with_file("/nonexistent/draftmark.toml")
            .build();
        assert!(result.is_err());
    }
}
