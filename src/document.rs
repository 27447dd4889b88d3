//! In-memory tree of sections and key/value entries.
//!
//! A [`Document`] is an append-only, ordered list of [`Section`]s, each an
//! ordered list of [`Entry`]s. Everything is owned; nothing borrows from the
//! text it was parsed from.
use std::fmt;

use serde::Serialize;

use crate::cursor::is_space;

/// A single `key = value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    name: String,
    value: String,
}

impl Entry {
    /// The key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value, with any surrounding quotes removed.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A named group of entries, or the unnamed root group.
///
/// # Examples
///
/// ```
/// use cfgparse::Document;
///
/// let mut doc = Document::new();
/// let section = doc.append_section("server".to_string());
/// section.append_entry("port".to_string(), "8080".to_string());
/// section.append_entry("port".to_string(), "8081".to_string());
///
/// let server = doc.section("server").unwrap();
/// assert_eq!(server.get("port"), Some("8080"));
/// assert_eq!(server.get_all("port").collect::<Vec<_>>(), ["8080", "8081"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    name: Option<String>,
    entries: Vec<Entry>,
}

impl Section {
    /// The header name, or `None` for the root section.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Entries in the order they were declared.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the section has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the first entry named `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key).next()
    }

    /// Values of every entry named `key`, in declaration order.
    pub fn get_all<'a, 'k>(
        &'a self,
        key: &'k str,
    ) -> impl Iterator<Item = &'a str> + use<'a, 'k> {
        self.entries
            .iter()
            .filter(move |e| e.name == key)
            .map(Entry::value)
    }

    /// Append an entry after every existing one. Duplicate keys are kept.
    pub fn append_entry(&mut self, name: String, value: String) {
        self.entries.push(Entry { name, value });
    }
}

/// A parsed configuration.
///
/// Always holds the unnamed root section, which collects entries that
/// appear before the first `[header]`, followed by the named sections in
/// input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    root: Section,
    sections: Vec<Section>,
}

impl Document {
    /// A document holding only an empty root section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named section after the one currently being populated and
    /// return it. A repeated name creates a second, distinct section.
    pub fn append_section(&mut self, name: String) -> &mut Section {
        self.sections.push(Section {
            name: Some(name),
            entries: Vec::new(),
        });
        self.current_mut()
    }

    /// The section that new entries are appended to: the most recently
    /// appended one, or the root.
    pub fn current_mut(&mut self) -> &mut Section {
        match self.sections.last_mut() {
            Some(section) => section,
            None => &mut self.root,
        }
    }

    /// The unnamed root section.
    #[must_use]
    pub const fn root(&self) -> &Section {
        &self.root
    }

    /// Every section, root first, in input order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        std::iter::once(&self.root).chain(&self.sections)
    }

    /// Every section introduced by a `[header]`, in input order.
    #[must_use]
    pub fn named_sections(&self) -> &[Section] {
        &self.sections
    }

    /// Every section whose header is `name`, in input order.
    pub fn sections_named<'a, 'k>(
        &'a self,
        name: &'k str,
    ) -> impl Iterator<Item = &'a Section> + use<'a, 'k> {
        self.sections
            .iter()
            .filter(move |s| s.name.as_deref() == Some(name))
    }

    /// The first section whose header is `name`.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections_named(name).next()
    }

    /// Value of the first `key` in the first matching section, where `None`
    /// selects the root section.
    #[must_use]
    pub fn get(&self, section: Option<&str>, key: &str) -> Option<&str> {
        match section {
            None => self.root().get(key),
            Some(name) => self.section(name)?.get(key),
        }
    }

    /// Every `(section, key, value)` triple in document order.
    pub fn entries(&self) -> impl Iterator<Item = (Option<&str>, &str, &str)> {
        self.sections().flat_map(|s| {
            s.entries
                .iter()
                .map(move |e| (s.name(), e.name(), e.value()))
        })
    }

    /// Render one line per header and entry, for diagnostics.
    ///
    /// The root section has no header line. Values are always quoted. Keys
    /// are quoted when they would not read back bare (empty, or holding
    /// whitespace or `=`, or starting with `#`, `[` or `"`). The output
    /// re-parses to the same document unless a name or value contains `"`
    /// or a section name contains `]`.
    ///
    /// # Examples
    ///
    /// ```
    /// let doc = cfgparse::parse("top = 1\n[a]\nx = hello").unwrap();
    /// assert_eq!(doc.dump(), "top = \"1\"\n[a]\nx = \"hello\"\n");
    /// ```
    #[must_use]
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in self.sections() {
            if let Some(name) = &section.name {
                writeln!(f, "[{name}]")?;
            }
            for entry in &section.entries {
                if key_needs_quotes(&entry.name) {
                    writeln!(f, "\"{}\" = \"{}\"", entry.name, entry.value)?;
                } else {
                    writeln!(f, "{} = \"{}\"", entry.name, entry.value)?;
                }
            }
        }
        Ok(())
    }
}

/// Whether an unquoted `key` would read back as something else.
fn key_needs_quotes(key: &str) -> bool {
    key.is_empty()
        || key.starts_with(['#', '[', '"'])
        || key.contains(|c: char| c == '=' || is_space(c))
}
