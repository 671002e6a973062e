//! Temporary JSON document infrastructure
//!
//! Provides a `TestDataFile` helper that owns a scratch directory holding one
//! items document for a test.

use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test document wrapper that ensures proper cleanup
///
/// The directory and everything in it is removed when this struct is dropped.
pub struct TestDataFile {
    #[allow(dead_code)]
    dir: TempDir,
    path: PathBuf,
}

impl TestDataFile {
    /// Create a scratch location; the document itself does not exist yet
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDataFile;
    ///
    /// let file = TestDataFile::new();
    /// // Pass file.path() to the repository under test
    /// ```
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("items.json");
        tracing::debug!("Test data file at {}", path.display());
        Self { dir, path }
    }

    /// Create a scratch document pre-filled with `items`
    pub fn with_items(items: Value) -> Self {
        let file = Self::new();
        file.write_raw(&items.to_string());
        file
    }

    /// Create a scratch document with arbitrary (possibly invalid) content
    pub fn with_raw(content: &str) -> Self {
        let file = Self::new();
        file.write_raw(content);
        file
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_raw(&self, content: &str) {
        std::fs::write(&self.path, content).expect("Failed to write test data file");
    }

    /// Parse the current document contents
    pub fn read_json(&self) -> Value {
        let raw = std::fs::read_to_string(&self.path).expect("Failed to read test data file");
        serde_json::from_str(&raw).expect("Test data file is not valid JSON")
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl Default for TestDataFile {
    fn default() -> Self {
        Self::new()
    }
}
