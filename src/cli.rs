//! Command-line argument definitions.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI entry point for the configuration parser.
#[derive(Parser, Debug)]
#[command(
    name = "cfgparse",
    about = "Parse and inspect INI-style configuration files",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// TOML settings file (missing file means defaults)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Maximum length in bytes of section and key names (overrides settings)
    #[arg(long, global = true)]
    pub max_name_len: Option<usize>,

    /// Fail on overlong names instead of truncating them (overrides settings)
    #[arg(long, global = true)]
    pub reject_long_names: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a file and print its sections and entries
    Dump(DumpOpts),
    /// Print the value of a key
    Get(GetOpts),
    /// Print the candidates that match a wildcard pattern
    Glob(GlobOpts),
    /// Expand ${NAME} references from the environment
    Expand(ExpandOpts),
    /// Collapse `.` and `..` segments in paths
    Collapse(CollapseOpts),
    /// Print version information
    Version,
}

/// Output format for `dump`.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// `[section]` and `key = "value"` lines.
    #[default]
    Text,
    /// The document as pretty-printed JSON.
    Json,
}

/// Options for the `dump` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct DumpOpts {
    /// Configuration file to read (`-` for stdin)
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// Options for the `get` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct GetOpts {
    /// Configuration file to read (`-` for stdin)
    pub file: PathBuf,

    /// Key to look up
    pub key: String,

    /// Section to search (the root section when omitted)
    #[arg(short, long)]
    pub section: Option<String>,

    /// Print every matching value, from every section with that name
    #[arg(long)]
    pub all: bool,
}

/// Options for the `glob` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct GlobOpts {
    /// Pattern using `*` and `?` wildcards (ASCII case-insensitive)
    pub pattern: String,

    /// Strings to test against the pattern
    #[arg(required = true)]
    pub candidates: Vec<String>,
}

/// Options for the `expand` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ExpandOpts {
    /// Text to expand, one output line per argument
    #[arg(required = true)]
    pub text: Vec<String>,
}

/// Options for the `collapse` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CollapseOpts {
    /// Paths to collapse, one output line per argument
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Fail when `..` climbs above the start of a path
    #[arg(long)]
    pub strict: bool,

    /// Squeeze repeated slashes first
    #[arg(long)]
    pub normalize: bool,

    /// Drop a trailing slash from the result
    #[arg(long)]
    pub strip_trailing: bool,
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_dump_defaults_to_text() {
        let cli = Cli::parse_from(["cfgparse", "dump", "app.cfg"]);
        assert!(
            matches!(&cli.command, Command::Dump(_)),
            "Expected Dump command"
        );
        if let Command::Dump(opts) = cli.command {
            assert_eq!(opts.file, PathBuf::from("app.cfg"));
            assert_eq!(opts.format, Format::Text);
        }
    }

    #[test]
    fn parse_dump_json() {
        let cli = Cli::parse_from(["cfgparse", "dump", "--format", "json", "-"]);
        if let Command::Dump(opts) = cli.command {
            assert_eq!(opts.format, Format::Json);
            assert_eq!(opts.file, PathBuf::from("-"));
        } else {
            panic!("Expected Dump command");
        }
    }

    #[test]
    fn parse_get_with_section() {
        let cli = Cli::parse_from(["cfgparse", "get", "app.cfg", "port", "-s", "server"]);
        if let Command::Get(opts) = cli.command {
            assert_eq!(opts.key, "port");
            assert_eq!(opts.section.as_deref(), Some("server"));
            assert!(!opts.all);
        } else {
            panic!("Expected Get command");
        }
    }

    #[test]
    fn parse_glob() {
        let cli = Cli::parse_from(["cfgparse", "glob", "*.cfg", "a.cfg", "b.txt"]);
        if let Command::Glob(opts) = cli.command {
            assert_eq!(opts.pattern, "*.cfg");
            assert_eq!(opts.candidates, ["a.cfg", "b.txt"]);
        } else {
            panic!("Expected Glob command");
        }
    }

    #[test]
    fn glob_requires_candidates() {
        assert!(Cli::try_parse_from(["cfgparse", "glob", "*.cfg"]).is_err());
    }

    #[test]
    fn parse_collapse_flags() {
        let cli = Cli::parse_from([
            "cfgparse",
            "collapse",
            "--strict",
            "--normalize",
            "--strip-trailing",
            "a/../b/",
        ]);
        if let Command::Collapse(opts) = cli.command {
            assert!(opts.strict && opts.normalize && opts.strip_trailing);
            assert_eq!(opts.paths, ["a/../b/"]);
        } else {
            panic!("Expected Collapse command");
        }
    }

    #[test]
    fn parse_global_name_options_after_subcommand() {
        let cli = Cli::parse_from([
            "cfgparse",
            "dump",
            "app.cfg",
            "--max-name-len",
            "32",
            "--reject-long-names",
        ]);
        assert_eq!(cli.global.max_name_len, Some(32));
        assert!(cli.global.reject_long_names);
    }

    #[test]
    fn parse_settings_path() {
        let cli = Cli::parse_from(["cfgparse", "--settings", "/etc/cfgparse.toml", "version"]);
        assert_eq!(
            cli.global.settings,
            Some(PathBuf::from("/etc/cfgparse.toml"))
        );
        assert!(matches!(cli.command, Command::Version));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::parse_from(["cfgparse", "-v", "expand", "${HOME}"]);
        assert!(cli.verbose);
    }
}
