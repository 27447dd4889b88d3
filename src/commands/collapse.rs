//! Command: collapse `.` and `..` path segments.
use std::io::Write;

use anyhow::{Context as _, Result};

use crate::cli::CollapseOpts;
use crate::util::paths::{CollapseMode, collapse, normalize_slashes};

/// Print each path collapsed, one per line.
///
/// # Errors
///
/// Returns an error if a path escapes its start under `--strict`, or output
/// fails.
pub fn run(opts: &CollapseOpts, out: &mut impl Write) -> Result<()> {
    let mode = if opts.strict {
        CollapseMode::Strict
    } else {
        CollapseMode::Lenient
    };

    for path in &opts.paths {
        let input = if opts.normalize {
            normalize_slashes(path, false)
        } else {
            path.clone()
        };
        let mut collapsed =
            collapse(&input, mode).with_context(|| format!("collapsing {path}"))?;
        if opts.strip_trailing {
            collapsed = normalize_slashes(&collapsed, true);
        }
        writeln!(out, "{collapsed}")?;
    }
    Ok(())
}
