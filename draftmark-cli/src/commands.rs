//! Subcommand handlers
//!
//! Each handler loads the article, runs one library operation and prints the result. Errors
//! bubble up to `main`, which reports them and exits with status 1.

use draftmark::export::{export_article_with_stem, ClipboardPayload};
use draftmark::loader::{load_article, parse_article_json};
use draftmark::{Article, FormatRegistry, HtmlFormatter};
use draftmark_config::DraftmarkConfig;
use serde_json::json;
use std::error::Error;
use std::io::{self, Write};
use std::path::Path;

type CommandResult = Result<(), Box<dyn Error>>;

/// Registry with the html formatter configured from `config`.
pub fn build_registry(config: &DraftmarkConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(HtmlFormatter::new(config.html.article_class.clone()));
    registry
}

/// Read an article from a file, or JSON from stdin when `path` is `-`.
fn read_article(path: &str) -> Result<Article, Box<dyn Error>> {
    if path == "-" {
        let source = io::read_to_string(io::stdin())?;
        return Ok(parse_article_json(&source)?);
    }
    Ok(load_article(path)?)
}

/// Handle the export command
pub fn handle_export_command(
    config: &DraftmarkConfig,
    path: &str,
    format: &str,
    output: Option<&str>,
) -> CommandResult {
    let article = read_article(path)?;
    let registry = build_registry(config);
    let formatter = registry.get(format)?;
    let file = export_article_with_stem(&article, formatter, &config.export.fallback_file_stem)?;

    match output {
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(file.contents.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
        Some(target) if Path::new(target).is_dir() => {
            let written = file.write_to_dir(target)?;
            println!("{}", written.display());
        }
        Some(target) => {
            file.write_to(target)?;
            println!("{}", target);
        }
    }
    Ok(())
}

/// Handle the blocks command
pub fn handle_blocks_command(path: &str) -> CommandResult {
    let article = read_article(path)?;
    let sections: Vec<_> = article
        .sections()
        .map(|section| {
            json!({
                "id": section.id,
                "heading": section.display_heading(),
                "blocks": section.blocks(),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&sections)?);
    Ok(())
}

/// Handle the copy command
pub fn handle_copy_command(config: &DraftmarkConfig, path: &str) -> CommandResult {
    let article = read_article(path)?;
    let registry = build_registry(config);
    let payload = ClipboardPayload {
        html: registry.serialize(&article, "html")?,
        markdown: registry.serialize(&article, "markdown")?,
    };
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

/// Handle the list-formats command
pub fn handle_list_formats_command(config: &DraftmarkConfig) {
    let registry = build_registry(config);
    println!("Available export formats:\n");

    for name in registry.list_formats() {
        if let Ok(formatter) = registry.get(&name) {
            println!("  {} ({}, .{})", name, formatter.mime_type(), formatter.extension());
            println!("    {}", formatter.description());
            println!();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_uses_configured_article_class() {
        let config = draftmark_config::Loader::new()
            .set_override("html.article_class", "post")
            .unwrap()
            .build()
            .unwrap();
        let registry = build_registry(&config);
        let html = registry.serialize(&Article::new("T"), "html").unwrap();
        assert!(html.starts_with("<article class=\"post\">"));
    }
}
