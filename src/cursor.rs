//! Read position over a configuration buffer.
//!
//! [`Cursor`] owns nothing but a byte index into a borrowed `&str`; every
//! method that consumes input takes `&mut self`, so the position can only be
//! advanced by the one caller holding the cursor.

/// Where a token stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Stop at the next whitespace character.
    Whitespace,
    /// Stop at whitespace or at the given character.
    WhitespaceOr(char),
    /// Stop only at the given character (whitespace is part of the token).
    Char(char),
}

impl Delimiter {
    const fn stops_at(self, c: char) -> bool {
        match self {
            Self::Whitespace => is_space(c),
            Self::WhitespaceOr(d) => c == d || is_space(c),
            Self::Char(d) => c == d,
        }
    }
}

/// ASCII whitespace as the C locale defines it, vertical tab included.
#[must_use]
pub const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Largest char boundary in `s` that is `<= index`.
pub(crate) fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// A read position over a configuration buffer.
///
/// # Examples
///
/// ```
/// use cfgparse::cursor::{Cursor, Delimiter};
///
/// let mut cursor = Cursor::new("  # comment\nkey = value");
/// cursor.skip_insignificant();
///
/// let mut key = String::new();
/// cursor.read_token(Delimiter::Whitespace, usize::MAX, &mut key);
/// assert_eq!(key, "key");
/// assert_eq!(cursor.peek(), Some(' '));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset into the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Whether every character has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn rest(&self) -> &'a str {
        self.input.get(self.pos..).unwrap_or_default()
    }

    /// The next character, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume and return the next character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume the next character if it equals `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Advance past whitespace only. Comments are left in place.
    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start_matches(is_space).len();
    }

    /// Advance past any mix of whitespace and `#` line comments.
    ///
    /// A comment runs up to (not including) the next newline, or to the end
    /// of the input. Calling this twice in a row is the same as calling it
    /// once.
    pub fn skip_insignificant(&mut self) {
        loop {
            self.skip_whitespace();
            if self.peek() != Some('#') {
                break;
            }
            let rest = self.rest();
            self.pos += rest.find('\n').unwrap_or(rest.len());
        }
    }

    /// Number of bytes [`read_token`](Self::read_token) would consume with
    /// the same delimiter. Does not move the cursor.
    #[must_use]
    pub fn measure_token(&self, delimiter: Delimiter) -> usize {
        let rest = self.rest();
        rest.find(|c: char| delimiter.stops_at(c))
            .unwrap_or(rest.len())
    }

    /// Append the token at the cursor to `out`, keeping at most `limit` bytes.
    ///
    /// The token ends at the delimiter or at the end of input; the cursor is
    /// left on the stopping character, not past it. When the token is longer
    /// than `limit`, the kept prefix ends on the last whole character that
    /// fits, the remainder is discarded, and the cursor still moves to the
    /// true end of the token.
    ///
    /// Returns `true` if anything was discarded.
    pub fn read_token(&mut self, delimiter: Delimiter, limit: usize, out: &mut String) -> bool {
        let len = self.measure_token(delimiter);
        let token = self.rest().get(..len).unwrap_or_default();
        let keep = floor_char_boundary(token, limit);
        out.push_str(token.get(..keep).unwrap_or_default());
        self.pos += len;
        keep < len
    }

    /// Start a token that may be quoted.
    ///
    /// If the next character is `"`, it is consumed and the token ends at the
    /// next `"`. Otherwise the token ends according to `unquoted`.
    pub fn open_quotable(&mut self, unquoted: Delimiter) -> Delimiter {
        if self.eat('"') {
            Delimiter::Char('"')
        } else {
            unquoted
        }
    }

    /// Finish a token started by [`open_quotable`](Self::open_quotable),
    /// consuming the closing quote if the token was quoted and one is present.
    pub fn close_quotable(&mut self, delimiter: Delimiter) {
        if delimiter == Delimiter::Char('"') {
            self.eat('"');
        }
    }

    /// 1-based line and column (in characters) of the cursor.
    #[must_use]
    pub fn line_col(&self) -> (usize, usize) {
        let consumed = self.input.get(..self.pos).unwrap_or(self.input);
        let line = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map_or(0, |i| i + 1);
        let column = consumed.get(line_start..).unwrap_or_default().chars().count() + 1;
        (line, column)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn read(cursor: &mut Cursor<'_>, delimiter: Delimiter, limit: usize) -> (String, bool) {
        let mut out = String::new();
        let truncated = cursor.read_token(delimiter, limit, &mut out);
        (out, truncated)
    }

    #[test]
    fn skip_insignificant_skips_whitespace_and_comments() {
        let mut cursor = Cursor::new(" \t\n# one\n  # two\r\n  key");
        cursor.skip_insignificant();
        assert_eq!(cursor.peek(), Some('k'));
    }

    #[test]
    fn skip_insignificant_comment_at_end_of_input() {
        let mut cursor = Cursor::new("# only a comment");
        cursor.skip_insignificant();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn skip_insignificant_is_idempotent() {
        let mut cursor = Cursor::new("  # c\n  x");
        cursor.skip_insignificant();
        let once = cursor.position();
        cursor.skip_insignificant();
        assert_eq!(cursor.position(), once);
    }

    #[test]
    fn skip_whitespace_leaves_comments() {
        let mut cursor = Cursor::new("   # not skipped");
        cursor.skip_whitespace();
        assert_eq!(cursor.peek(), Some('#'));
    }

    #[test]
    fn whitespace_token_stops_at_whitespace() {
        let mut cursor = Cursor::new("value rest");
        assert_eq!(read(&mut cursor, Delimiter::Whitespace, usize::MAX), ("value".to_string(), false));
        assert_eq!(cursor.peek(), Some(' '));
    }

    #[test]
    fn whitespace_token_keeps_hash_and_equals() {
        let mut cursor = Cursor::new("a#b=c\n");
        assert_eq!(read(&mut cursor, Delimiter::Whitespace, usize::MAX).0, "a#b=c");
    }

    #[test]
    fn whitespace_or_stops_at_either() {
        let mut cursor = Cursor::new("key=value");
        assert_eq!(read(&mut cursor, Delimiter::WhitespaceOr('='), usize::MAX).0, "key");
        assert_eq!(cursor.peek(), Some('='));
    }

    #[test]
    fn char_delimiter_keeps_whitespace() {
        let mut cursor = Cursor::new("hello world # x\"tail");
        assert_eq!(read(&mut cursor, Delimiter::Char('"'), usize::MAX).0, "hello world # x");
        assert_eq!(cursor.peek(), Some('"'));
    }

    #[test]
    fn token_at_end_of_input_is_empty() {
        let mut cursor = Cursor::new("");
        assert_eq!(read(&mut cursor, Delimiter::Whitespace, 8), (String::new(), false));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn token_without_delimiter_runs_to_end() {
        let mut cursor = Cursor::new("unterminated");
        assert_eq!(read(&mut cursor, Delimiter::Char(']'), usize::MAX).0, "unterminated");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn overflow_truncates_and_skips_rest_of_token() {
        let mut cursor = Cursor::new("abcdefgh next");
        assert_eq!(read(&mut cursor, Delimiter::Whitespace, 3), ("abc".to_string(), true));
        assert_eq!(cursor.position(), 8);
        assert_eq!(cursor.peek(), Some(' '));
    }

    #[test]
    fn overflow_respects_char_boundaries() {
        // 'é' is two bytes; a limit of 2 cannot split it.
        let mut cursor = Cursor::new("aé");
        assert_eq!(read(&mut cursor, Delimiter::Whitespace, 2), ("a".to_string(), true));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn exact_limit_is_not_truncation() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(read(&mut cursor, Delimiter::Whitespace, 3), ("abc".to_string(), false));
    }

    #[test]
    fn measure_matches_read_and_does_not_move() {
        let mut cursor = Cursor::new("\"quoted value\" tail");
        let delimiter = cursor.open_quotable(Delimiter::Whitespace);
        let before = cursor.position();
        let len = cursor.measure_token(delimiter);
        assert_eq!(cursor.position(), before);
        assert_eq!(len, "quoted value".len());

        let mut out = String::with_capacity(len);
        cursor.read_token(delimiter, len, &mut out);
        assert_eq!(out, "quoted value");
        cursor.close_quotable(delimiter);
        assert_eq!(cursor.peek(), Some(' '));
    }

    #[test]
    fn open_quotable_without_quote_uses_fallback() {
        let mut cursor = Cursor::new("plain");
        assert_eq!(cursor.open_quotable(Delimiter::Whitespace), Delimiter::Whitespace);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn close_quotable_tolerates_missing_quote() {
        let mut cursor = Cursor::new("\"open");
        let delimiter = cursor.open_quotable(Delimiter::Whitespace);
        let mut out = String::new();
        cursor.read_token(delimiter, usize::MAX, &mut out);
        cursor.close_quotable(delimiter);
        assert_eq!(out, "open");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn bump_and_eat() {
        let mut cursor = Cursor::new("[é]");
        assert!(cursor.eat('['));
        assert!(!cursor.eat(']'));
        assert_eq!(cursor.bump(), Some('é'));
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.bump(), Some(']'));
        assert_eq!(cursor.bump(), None);
    }

    #[test]
    fn line_col_counts_lines_and_characters() {
        let mut cursor = Cursor::new("ab\ncdé f");
        assert_eq!(cursor.line_col(), (1, 1));
        cursor.skip_whitespace();
        let mut out = String::new();
        cursor.read_token(Delimiter::Whitespace, usize::MAX, &mut out);
        cursor.skip_whitespace();
        cursor.read_token(Delimiter::Whitespace, usize::MAX, &mut out);
        assert_eq!(cursor.line_col(), (2, 4));
    }

    #[test]
    fn is_space_matches_c_locale() {
        for c in [' ', '\t', '\n', '\r', '\x0b', '\x0c'] {
            assert!(is_space(c), "{c:?} should be whitespace");
        }
        assert!(!is_space('\u{a0}'));
        assert!(!is_space('x'));
    }
}
