//! Fixtures for building synthetic content trees in tests.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary content root populated with version/locale/doc files.
///
/// ```rust,ignore
/// use doccheck_utils::test_support::ContentTree;
///
/// let tree = ContentTree::new()
///     .doc("3.4", "en-US", "intro.md")
///     .doc("3.5", "en-US", "intro.md");
/// assert!(tree.root().join("3.5/en-US/doc/intro.md").is_file());
/// ```
pub struct ContentTree {
    dir: TempDir,
}

impl Default for ContentTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentTree {
    /// Create an empty content root.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp content root"),
        }
    }

    /// The content root path
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Add `<version>/<locale>/doc/<relative>` with placeholder Markdown content.
    #[must_use]
    pub fn doc(self, version: &str, locale: &str, relative: &str) -> Self {
        let path = self.root().join(version).join(locale).join("doc").join(relative);
        write_file(&path, "# placeholder\n");
        self
    }

    /// Add an arbitrary file relative to the content root.
    #[must_use]
    pub fn file(self, relative: &str, content: &str) -> Self {
        let path = self.root().join(relative);
        write_file(&path, content);
        self
    }

    /// Add an empty directory relative to the content root.
    #[must_use]
    pub fn dir(self, relative: &str) -> Self {
        std::fs::create_dir_all(self.root().join(relative)).expect("create fixture dir");
        self
    }

    /// Remove a directory (and everything below it) relative to the content root.
    #[must_use]
    pub fn remove(self, relative: &str) -> Self {
        std::fs::remove_dir_all(self.root().join(relative)).expect("remove fixture dir");
        self
    }

    /// Path of an entry relative to the content root
    #[must_use]
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }
}

/// The tree used throughout the docs: two versions, English everywhere,
/// Spanish for 3.5.
#[must_use]
pub fn scenario_tree() -> ContentTree {
    ContentTree::new()
        .doc("3.4", "en-US", "intro.md")
        .doc("3.5", "en-US", "intro.md")
        .doc("3.5", "es-ES", "intro.md")
}

/// Version list matching [`scenario_tree`]
#[must_use]
pub fn scenario_versions() -> Vec<String> {
    vec!["3.4".to_string(), "3.5".to_string()]
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create fixture parent");
    }
    std::fs::write(path, content).expect("write fixture file");
}
