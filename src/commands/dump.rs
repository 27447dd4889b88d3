//! Command: parse a file and print the document.
use std::io::Write;

use anyhow::Result;

use crate::cli::{DumpOpts, Format};
use crate::document::Document;
use crate::parser::ParseOptions;

/// Parse `opts.file` and print it in the requested format.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or output fails.
pub fn run(opts: &DumpOpts, options: &ParseOptions, out: &mut impl Write) -> Result<()> {
    let doc = super::load_document(&opts.file, options)?;
    render(&doc, opts.format, out)
}

/// Write `doc` to `out` in `format`.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn render(doc: &Document, format: Format, out: &mut impl Write) -> Result<()> {
    match format {
        Format::Text => write!(out, "{doc}")?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, doc)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
