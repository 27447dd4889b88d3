//! Command: filter candidates by wildcard pattern.
use std::io::Write;

use anyhow::Result;

use crate::cli::GlobOpts;
use crate::util::glob::matches;

/// Print every candidate that matches the pattern, in argument order.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn run(opts: &GlobOpts, out: &mut impl Write) -> Result<()> {
    let mut hits = 0_usize;
    for candidate in &opts.candidates {
        if matches(&opts.pattern, candidate) {
            writeln!(out, "{candidate}")?;
            hits += 1;
        }
    }
    tracing::debug!("{hits} of {} candidate(s) matched {:?}", opts.candidates.len(), opts.pattern);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn prints_only_matches() {
        let opts = GlobOpts {
            pattern: "*.CFG".to_string(),
            candidates: vec!["a.cfg".into(), "b.txt".into(), "c.Cfg".into()],
        };
        let mut out = Vec::new();
        run(&opts, &mut out).expect("writing to a Vec cannot fail");
        assert_eq!(String::from_utf8(out).expect("output is UTF-8"), "a.cfg\nc.Cfg\n");
    }
}
