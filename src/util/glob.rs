//! Wildcard matching for file-name style patterns.

/// Check whether `candidate` matches `pattern` in full.
///
/// `*` matches any run of characters (including none) and `?` matches
/// exactly one character. Everything else compares ASCII case-insensitively.
///
/// # Examples
///
/// ```
/// use cfgparse::util::glob::matches;
///
/// assert!(matches("*.txt", "notes.TXT"));
/// assert!(matches("?.cfg", "a.cfg"));
/// assert!(!matches("*.txt", "txt"));
/// ```
#[must_use]
pub fn matches(pattern: &str, candidate: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let candidate: Vec<char> = candidate.chars().collect();

    let (mut p, mut c) = (0, 0);
    // Position of the last `*` and the candidate index it currently absorbs up to.
    let mut star: Option<(usize, usize)> = None;

    while let Some(&ch) = candidate.get(c) {
        match pattern.get(p) {
            Some('*') => {
                star = Some((p, c));
                p += 1;
            }
            Some(&pc) if pc == '?' || pc.eq_ignore_ascii_case(&ch) => {
                p += 1;
                c += 1;
            }
            _ => match star {
                Some((star_p, star_c)) => {
                    star = Some((star_p, star_c + 1));
                    p = star_p + 1;
                    c = star_c + 1;
                }
                None => return false,
            },
        }
    }

    pattern
        .get(p..)
        .unwrap_or_default()
        .iter()
        .all(|&pc| pc == '*')
}
