//! Minimal INI-style configuration parser.
//!
//! Turns a flat text buffer of `[section]` headers and `key = value` lines
//! into an owned, ordered [`Document`]. Entries before the first header land
//! in an unnamed root section; repeated headers and repeated keys are kept,
//! never merged.
//!
//! The public API is organised into four layers:
//!
//! - **[`cursor`]**: read position and token extraction over the input
//! - **[`document`]**: the section/entry tree and its diagnostic dump
//! - **[`parser`]**: the driver that wires tokens into a document
//! - **[`util`]**: standalone string helpers for wildcard matching, `${NAME}`
//!   expansion and path collapsing
//!
//! plus the pieces behind the `cfgparse` binary ([`cli`], [`commands`],
//! [`logging`], [`settings`]).
//!
//! ```
//! let doc = cfgparse::parse("# defaults\nname = demo\n[server]\nport = 8080\n").unwrap();
//! assert_eq!(doc.get(None, "name"), Some("demo"));
//! assert_eq!(doc.get(Some("server"), "port"), Some("8080"));
//! ```
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod cursor;
pub mod document;
pub mod error;
pub mod logging;
pub mod parser;
pub mod settings;
pub mod util;

pub use document::{Document, Entry, Section};
pub use error::{CfgError, Found, ParseError, PathError, SettingsError};
pub use parser::{DEFAULT_MAX_NAME_LEN, NamePolicy, ParseOptions, parse, parse_with};
