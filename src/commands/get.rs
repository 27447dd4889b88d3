//! Command: look up the value of a key.
use std::io::Write;

use anyhow::{Result, bail};

use crate::cli::GetOpts;
use crate::document::Document;
use crate::parser::ParseOptions;

/// Print the value of `opts.key`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, the key is absent,
/// or output fails.
pub fn run(opts: &GetOpts, options: &ParseOptions, out: &mut impl Write) -> Result<()> {
    let doc = super::load_document(&opts.file, options)?;
    let values = lookup(&doc, opts.section.as_deref(), &opts.key, opts.all);

    if values.is_empty() {
        match &opts.section {
            Some(section) => bail!("key '{}' not found in section [{section}]", opts.key),
            None => bail!("key '{}' not found in the root section", opts.key),
        }
    }
    for value in values {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

/// Values for `key` in `section` (the root when `None`): the first match, or
/// every match across every section of that name when `all` is set.
#[must_use]
pub fn lookup<'a>(doc: &'a Document, section: Option<&str>, key: &str, all: bool) -> Vec<&'a str> {
    if !all {
        return doc.get(section, key).into_iter().collect();
    }
    match section {
        None => doc.root().get_all(key).collect(),
        Some(name) => doc
            .sections_named(name)
            .flat_map(|s| s.get_all(key))
            .collect(),
    }
}
