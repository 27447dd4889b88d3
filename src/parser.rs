//! Parse driver: turns configuration text into a [`Document`].
//!
//! The grammar is deliberately small:
//!
//! ```text
//! # comment to end of line
//! top = value            # belongs to the unnamed root section
//! [section]
//! key = value
//! "quoted key" = "value with spaces, = and # kept"
//! ```
//!
//! Unquoted values end at whitespace; quoted values end at the next `"` and
//! cannot contain one. A key that is not followed by `=` aborts the whole
//! parse.
use crate::cursor::{Cursor, Delimiter, floor_char_boundary, is_space};
use crate::document::Document;
use crate::error::ParseError;

/// Historical name bound: a 256-byte buffer including its terminator.
pub const DEFAULT_MAX_NAME_LEN: usize = 255;

/// What to do with a section or key name longer than
/// [`ParseOptions::max_name_len`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamePolicy {
    /// Keep the longest prefix that fits, ending on a whole UTF-8 character.
    #[default]
    Truncate,
    /// Fail with [`ParseError::NameTooLong`].
    Reject,
}

/// Tunables for [`parse_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum length in bytes of section and key names. Values are unbounded.
    pub max_name_len: usize,
    /// Handling of names longer than `max_name_len`.
    pub name_policy: NamePolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
            name_policy: NamePolicy::Truncate,
        }
    }
}

/// Parse `input` with [`ParseOptions::default`].
///
/// # Examples
///
/// ```
/// let doc = cfgparse::parse("[a]\nx = 1\n[b]\ny = \"two words\"\n").unwrap();
/// assert_eq!(doc.get(Some("a"), "x"), Some("1"));
/// assert_eq!(doc.get(Some("b"), "y"), Some("two words"));
/// assert!(doc.root().is_empty());
/// ```
///
/// # Errors
///
/// Returns [`ParseError::MalformedAssignment`] if a key is not followed by `=`.
pub fn parse(input: &str) -> Result<Document, ParseError> {
    parse_with(input, &ParseOptions::default())
}

/// Parse `input` with explicit options.
///
/// # Errors
///
/// Returns [`ParseError::MalformedAssignment`] if a key is not followed by
/// `=`, or [`ParseError::NameTooLong`] if a name exceeds the bound under
/// [`NamePolicy::Reject`].
pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Document, ParseError> {
    let mut parser = Parser {
        cursor: Cursor::new(input),
        options,
        doc: Document::new(),
    };

    match parser.run() {
        Ok(()) => {
            tracing::debug!(
                "parsed {} section(s) from {} bytes",
                parser.doc.named_sections().len(),
                input.len()
            );
            Ok(parser.doc)
        }
        Err(e) => {
            tracing::debug!("parse failed: {e}");
            Err(e)
        }
    }
}

/// State of one parse. Dropped with its partial document on failure.
struct Parser<'a, 'o> {
    cursor: Cursor<'a>,
    options: &'o ParseOptions,
    doc: Document,
}

impl Parser<'_, '_> {
    fn run(&mut self) -> Result<(), ParseError> {
        loop {
            self.cursor.skip_insignificant();
            match self.cursor.peek() {
                None => return Ok(()),
                Some('[') => self.section_header()?,
                Some(_) => self.assignment()?,
            }
        }
    }

    /// `[name]`. Only whitespace is skipped inside the brackets, so a `#`
    /// there is part of the name. The bound applies after trailing
    /// whitespace is trimmed.
    fn section_header(&mut self) -> Result<(), ParseError> {
        self.cursor.bump();
        self.cursor.skip_whitespace();
        let (line, column) = self.cursor.line_col();
        let mut name = String::new();
        self.cursor.read_token(Delimiter::Char(']'), usize::MAX, &mut name);
        self.cursor.eat(']');

        let trimmed = name.trim_end_matches(is_space).len();
        name.truncate(trimmed);
        let keep = floor_char_boundary(&name, self.options.max_name_len);
        let truncated = keep < name.len();
        name.truncate(keep);
        let name = self.check_name(name, truncated, line, column)?;

        tracing::debug!("section [{name}]");
        self.doc.append_section(name);
        Ok(())
    }

    /// `key = value`, each side optionally quoted.
    fn assignment(&mut self) -> Result<(), ParseError> {
        let delimiter = self.cursor.open_quotable(Delimiter::WhitespaceOr('='));
        let key = self.read_name(delimiter)?;
        self.cursor.close_quotable(delimiter);

        self.cursor.skip_insignificant();
        if !self.cursor.eat('=') {
            let (line, column) = self.cursor.line_col();
            return Err(ParseError::MalformedAssignment {
                found: self.cursor.peek().into(),
                line,
                column,
            });
        }
        self.cursor.skip_insignificant();

        let delimiter = self.cursor.open_quotable(Delimiter::Whitespace);
        let len = self.cursor.measure_token(delimiter);
        let mut value = String::with_capacity(len);
        self.cursor.read_token(delimiter, len, &mut value);
        self.cursor.close_quotable(delimiter);

        tracing::trace!("{key} = {value:?}");
        self.doc.current_mut().append_entry(key, value);
        Ok(())
    }

    fn read_name(&mut self, delimiter: Delimiter) -> Result<String, ParseError> {
        let (line, column) = self.cursor.line_col();
        let mut name = String::new();
        let truncated = self
            .cursor
            .read_token(delimiter, self.options.max_name_len, &mut name);
        self.check_name(name, truncated, line, column)
    }

    /// Apply the name policy to a name that was cut down to the bound.
    fn check_name(
        &self,
        name: String,
        truncated: bool,
        line: usize,
        column: usize,
    ) -> Result<String, ParseError> {
        if !truncated {
            return Ok(name);
        }

        let max = self.options.max_name_len;
        match self.options.name_policy {
            NamePolicy::Truncate => {
                tracing::debug!("name at line {line}, column {column} truncated to {max} bytes");
                Ok(name)
            }
            NamePolicy::Reject => Err(ParseError::NameTooLong {
                name,
                max,
                line,
                column,
            }),
        }
    }
}
