//! Error types for the fallible edges of draftmark.
//!
//! Parsing and rendering never fail. Loading articles from disk, looking up formats and
//! writing exports can.

use crate::formats::FormatError;
use thiserror::Error;

/// Errors surfaced by loading, format dispatch and export.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid article JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid article YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Format(#[from] FormatError),
}

pub type Result<T> = std::result::Result<T, Error>;
