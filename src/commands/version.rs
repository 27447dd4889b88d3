//! Command: print version information.
use std::io::Write;

use anyhow::Result;

/// The build version: `CFGPARSE_VERSION` from the build, or the package version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("CFGPARSE_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the version.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run(out: &mut impl Write) -> Result<()> {
    writeln!(out, "cfgparse {}", version())?;
    Ok(())
}
