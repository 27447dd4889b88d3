//! Subcommand implementations.
//!
//! Each command writes its results to the `out` writer it is given and
//! returns [`anyhow::Result`]; `main` supplies locked stdout.

pub mod collapse;
pub mod dump;
pub mod expand;
pub mod get;
pub mod glob;
pub mod version;

use std::io::Read as _;
use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::GlobalOpts;
use crate::document::Document;
use crate::parser::{NamePolicy, ParseOptions, parse_with};
use crate::settings::Settings;

/// Resolve parser options from the settings file and command-line overrides.
///
/// # Errors
///
/// Returns an error if the settings file exists but cannot be loaded.
pub fn resolve_options(global: &GlobalOpts) -> Result<ParseOptions> {
    let settings = match &global.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let mut options = settings.parse_options();
    if let Some(max) = global.max_name_len {
        options.max_name_len = max;
    }
    if global.reject_long_names {
        options.name_policy = NamePolicy::Reject;
    }
    tracing::debug!("parse options: {options:?}");
    Ok(options)
}

/// Read a whole input file into memory; `-` reads stdin.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("reading stdin")?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Read and parse a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to parse.
pub fn load_document(path: &Path, options: &ParseOptions) -> Result<Document> {
    let text = read_input(path)?;
    tracing::debug!("read {} bytes from {}", text.len(), path.display());
    parse_with(&text, options).with_context(|| format!("parsing {}", path.display()))
}
