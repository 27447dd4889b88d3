//! Command: expand `${NAME}` references from the environment.
use std::io::Write;

use anyhow::Result;

use crate::cli::ExpandOpts;
use crate::util::macros::expand_env;

/// Print each argument with its references expanded, one per line.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn run(opts: &ExpandOpts, out: &mut impl Write) -> Result<()> {
    for text in &opts.text {
        writeln!(out, "{}", expand_env(text))?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_argument() {
        let opts = ExpandOpts {
            text: vec!["plain".into(), "\\${KEEP}".into()],
        };
        let mut out = Vec::new();
        run(&opts, &mut out).expect("writing to a Vec cannot fail");
        assert_eq!(String::from_utf8(out).expect("output is UTF-8"), "plain\n${KEEP}\n");
    }
}
