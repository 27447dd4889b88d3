//! Lexical path clean-up on `/`-separated strings.
//!
//! Nothing here touches the filesystem; symlinks are not resolved.
use crate::error::PathError;

/// How [`collapse`] treats a `..` with nothing left to remove.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollapseMode {
    /// Drop the `..`.
    #[default]
    Lenient,
    /// Fail with [`PathError::EscapesRoot`].
    Strict,
}

/// Remove `.` segments and resolve `..` against the segment before it.
///
/// Empty segments are dropped. A leading `/` is kept, and a trailing `/` is
/// kept when the input had one and the result is not empty.
///
/// # Examples
///
/// ```
/// use cfgparse::util::paths::{CollapseMode, collapse};
///
/// assert_eq!(collapse("/usr/./lib/../bin/", CollapseMode::Lenient).unwrap(), "/usr/bin/");
/// assert!(collapse("../etc", CollapseMode::Strict).is_err());
/// ```
///
/// # Errors
///
/// Returns [`PathError::EscapesRoot`] in [`CollapseMode::Strict`] when a `..`
/// would climb above the first segment.
pub fn collapse(path: &str, mode: CollapseMode) -> Result<String, PathError> {
    let absolute = path.starts_with('/');
    let trailing = path.len() > 1 && path.ends_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() && mode == CollapseMode::Strict {
                    return Err(PathError::EscapesRoot(path.to_string()));
                }
            }
            other => segments.push(other),
        }
    }

    let mut out = String::with_capacity(path.len());
    if absolute {
        out.push('/');
    }
    out.push_str(&segments.join("/"));
    if trailing && !segments.is_empty() {
        out.push('/');
    }
    Ok(out)
}

/// Squeeze runs of `/` into one, optionally dropping a trailing `/`.
///
/// A path consisting only of slashes becomes `/`, never the empty string.
///
/// # Examples
///
/// ```
/// use cfgparse::util::paths::normalize_slashes;
///
/// assert_eq!(normalize_slashes("a//b///c/", false), "a/b/c/");
/// assert_eq!(normalize_slashes("a//b///c/", true), "a/b/c");
/// ```
#[must_use]
pub fn normalize_slashes(path: &str, strip_trailing: bool) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    if strip_trailing && out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out
}
