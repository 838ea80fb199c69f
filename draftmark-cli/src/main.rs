//! Command-line interface for draftmark
//! This binary renders stored article drafts (JSON or YAML) into their export formats.
//!
//! Usage:
//!   draftmark export `<path>` [--format `<format>`] [--output `<file|dir>`]  - Render an article
//!   draftmark blocks `<path>`                                               - Dump parsed section blocks as JSON
//!   draftmark copy `<path>`                                                 - Print the clipboard payload as JSON
//!   draftmark list-formats                                                  - List available export formats
//!
//! `<path>` may be `-` to read JSON from stdin. Every subcommand accepts `--config <toml>`.

mod commands;

use clap::{Arg, Command};
use draftmark_config::{DraftmarkConfig, Loader};
use std::process;
use tracing_subscriber::EnvFilter;

/// Looked up in the working directory when `--config` is not given.
const LOCAL_CONFIG_FILE: &str = "draftmark.toml";

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the article file (JSON or YAML), or '-' for stdin")
        .required(true)
        .index(1)
}

fn build_cli() -> Command {
    Command::new("draftmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render article drafts to Markdown and HTML")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("export")
                .about("Render an article in one export format")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'markdown', 'html'); defaults to the configured format"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write to this file, or into this directory under the slugged title"),
                ),
        )
        .subcommand(
            Command::new("blocks")
                .about("Print the parsed blocks of every section as JSON")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("copy")
                .about("Print the HTML and plain-text clipboard payload as JSON")
                .arg(path_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available export formats"))
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_config(matches.get_one::<String>("config")).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    });
    init_logging(&config.logging.filter);

    let result = match matches.subcommand() {
        Some(("export", export_matches)) => {
            let path = export_matches.get_one::<String>("path").unwrap();
            let format = export_matches
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or(config.export.default_format.as_str());
            let output = export_matches.get_one::<String>("output");
            commands::handle_export_command(&config, path, format, output.map(String::as_str))
        }
        Some(("blocks", blocks_matches)) => {
            let path = blocks_matches.get_one::<String>("path").unwrap();
            commands::handle_blocks_command(path)
        }
        Some(("copy", copy_matches)) => {
            let path = copy_matches.get_one::<String>("path").unwrap();
            commands::handle_copy_command(&config, path)
        }
        Some(("list-formats", _)) => {
            commands::handle_list_formats_command(&config);
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&String>) -> Result<DraftmarkConfig, draftmark_config::ConfigError> {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(LOCAL_CONFIG_FILE),
    };
    loader.build()
}

/// Log to stderr so stdout stays clean for rendered documents.
fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
