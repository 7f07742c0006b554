//! [`TestDir`] scratch directory for config-writing tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory removed on drop.
///
/// # Example
///
/// ```rust,no_run
/// use pak_test_utils::TestDir;
///
/// let dir = TestDir::new();
/// let path = dir.path("text.toml");
/// std::fs::write(&path, "a = 1").unwrap();
/// assert_eq!(dir.read("text.toml"), "a = 1");
/// ```
pub struct TestDir {
    temp_dir: TempDir,
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path to `relative` inside the directory. Nothing is created.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    /// Read a file inside the directory as UTF-8.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("TestDir::read: failed to read {}: {e}", path.display()))
    }

    pub fn assert_file_exists(&self, relative: &str) {
        let path = self.path(relative);
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    pub fn assert_file_missing(&self, relative: &str) {
        let path = self.path(relative);
        assert!(!path.exists(), "Expected no file at: {}", path.display());
    }
}
