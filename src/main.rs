//! `cfgparse` command-line front end.
use anyhow::Result;
use clap::Parser;

use cfgparse::cli::{self, Command};
use cfgparse::commands;
use cfgparse::logging;

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);

    let mut out = std::io::stdout().lock();
    match &args.command {
        Command::Dump(opts) => {
            let options = commands::resolve_options(&args.global)?;
            commands::dump::run(opts, &options, &mut out)
        }
        Command::Get(opts) => {
            let options = commands::resolve_options(&args.global)?;
            commands::get::run(opts, &options, &mut out)
        }
        Command::Glob(opts) => commands::glob::run(opts, &mut out),
        Command::Expand(opts) => commands::expand::run(opts, &mut out),
        Command::Collapse(opts) => commands::collapse::run(opts, &mut out),
        Command::Version => commands::version::run(&mut out),
    }
}
