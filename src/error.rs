//! Error types for the parser and its companion utilities.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Library functions return typed errors (e.g., [`ParseError`], [`PathError`])
//! while command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! CfgError
//! ├── Parse(ParseError)       # malformed assignments, rejected names
//! ├── Path(PathError)         # `..` escaping the start of a path
//! └── Settings(SettingsError) # settings file I/O and TOML syntax
//! ```

use std::fmt;

use thiserror::Error;

/// Top-level error type for the crate.
///
/// Aggregates the module-specific errors and is convertible to
/// [`anyhow::Error`] for use at CLI command boundaries.
#[derive(Error, Debug)]
pub enum CfgError {
    /// The configuration text could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// A path could not be collapsed.
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    /// The settings file could not be loaded.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

/// What the parser found where it expected something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    /// A concrete character.
    Char(char),
    /// The input ended.
    EndOfInput,
}

impl From<Option<char>> for Found {
    fn from(c: Option<char>) -> Self {
        c.map_or(Self::EndOfInput, Self::Char)
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "found {c:?}"),
            Self::EndOfInput => f.write_str("reached end of input"),
        }
    }
}

/// Errors raised while parsing configuration text.
///
/// A parse either produces a complete [`Document`](crate::Document) or one of
/// these; partially built documents are never handed to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A key was not followed by `=`.
    #[error("expected '=' but {found} at line {line}, column {column}")]
    MalformedAssignment {
        /// The character (or end of input) seen in place of `=`.
        found: Found,
        /// 1-based line of the offending character.
        line: usize,
        /// 1-based column (in characters) of the offending character.
        column: usize,
    },

    /// A section or entry name exceeded the configured bound under
    /// [`NamePolicy::Reject`](crate::NamePolicy::Reject).
    #[error("name {name:?} exceeds {max} bytes at line {line}, column {column}")]
    NameTooLong {
        /// The name, truncated to the bound.
        name: String,
        /// The configured bound in bytes.
        max: usize,
        /// 1-based line where the name starts.
        line: usize,
        /// 1-based column where the name starts.
        column: usize,
    },
}

/// Errors raised while collapsing path segments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A `..` segment had no preceding segment to remove.
    #[error("path {0:?} escapes above its starting point")]
    EscapesRoot(String),
}

/// Errors raised while loading the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("IO error reading settings file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for [`Settings`](crate::settings::Settings).
    #[error("Invalid settings in {path}: {source}")]
    Parse {
        /// Path to the offending file.
        path: String,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}
