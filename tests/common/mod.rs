// Shared helpers for integration tests.
//
// Provides fixture loading and a temporary-directory-backed workspace so each
// integration test can write its own config files without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use cfgparse::Document;

/// Absolute path of a file under `tests/fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Contents of a file under `tests/fixtures/`.
pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("read fixture")
}

/// Every `(section, key, value)` triple of `doc` as owned strings.
pub fn triples(doc: &Document) -> Vec<(Option<String>, String, String)> {
    doc.entries()
        .map(|(s, k, v)| (s.map(str::to_string), k.to_string(), v.to_string()))
        .collect()
}

/// An isolated directory backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct TestWorkspace {
    /// Temporary directory holding the test files.
    pub root: tempfile::TempDir,
}

impl TestWorkspace {
    /// Create an empty workspace.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Path to the workspace root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Write `content` to `name` inside the workspace and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        std::fs::write(&path, content).expect("write workspace file");
        path
    }
}
