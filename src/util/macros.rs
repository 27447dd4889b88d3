//! `${NAME}` expansion.
//!
//! Rules:
//!
//! - `${NAME}` is replaced by the resolved value, or removed when the
//!   resolver returns `None`.
//! - `\$` produces a literal `$`, so `\${NAME}` is left unexpanded.
//! - An unterminated `${` or a name of [`MAX_MACRO_NAME_LEN`] bytes or more
//!   is copied through literally.
//! - `$NAME` without braces is not a reference.

/// Names this long (in bytes) or longer are not expanded.
pub const MAX_MACRO_NAME_LEN: usize = 127;

/// Expand every `${NAME}` in `input` using `resolve`.
///
/// # Examples
///
/// ```
/// use cfgparse::util::macros::expand;
///
/// let out = expand("${GREETING}, ${WHO}! \\${RAW}", |name| match name {
///     "GREETING" => Some("hello".to_string()),
///     _ => None,
/// });
/// assert_eq!(out, "hello, ! ${RAW}");
/// ```
pub fn expand<F>(input: &str, mut resolve: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(i) = rest.find(['$', '\\']) {
        let (literal, tail) = rest.split_at(i);
        out.push_str(literal);

        if let Some(after) = tail.strip_prefix("\\$") {
            out.push('$');
            rest = after;
            continue;
        }

        if let Some(after) = tail.strip_prefix("${")
            && let Some(end) = after.find('}')
            && end < MAX_MACRO_NAME_LEN
        {
            let (name, closing) = after.split_at(end);
            if let Some(value) = resolve(name) {
                out.push_str(&value);
            }
            rest = closing.get(1..).unwrap_or_default();
            continue;
        }

        // A lone `$` or `\`.
        let mut chars = tail.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }

    out.push_str(rest);
    out
}

/// Expand `${NAME}` references from the process environment.
///
/// Unset or non-UTF-8 variables expand to nothing.
#[must_use]
pub fn expand_env(input: &str) -> String {
    expand(input, |name| std::env::var(name).ok())
}
