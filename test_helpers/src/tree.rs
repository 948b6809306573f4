//! Temporary fragment trees for tests.
//!
//! Each [`FragmentTree`] owns a fresh temporary directory that is removed
//! when the tree is dropped. Fragments are written relative to that root,
//! creating intermediate dimension directories as needed.
//!
//! # Examples
//!
//! ```
//! use test_helpers::FragmentTree;
//!
//! # fn main() -> anyhow::Result<()> {
//! let tree = FragmentTree::new()?
//!     .with("default.json", r#"{"A": "foo"}"#)?
//!     .with("env/prod.json", r#"{"A": "bar"}"#)?;
//! assert!(tree.root().join("env/prod.json").is_file());
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

/// Temporary configuration root populated with fragments.
#[derive(Debug)]
pub struct FragmentTree {
    dir: TempDir,
}

impl FragmentTree {
    /// Creates an empty tree in a new temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temporary fragment root")?;
        Ok(Self { dir })
    }

    /// Root directory of the tree.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `contents` to `relative`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be written.
    pub fn write(&self, relative: &str, contents: &str) -> Result<PathBuf> {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write fragment {}", path.display()))?;
        Ok(path)
    }

    /// Writes `value` as pretty-printed JSON to `relative`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or the write fails.
    pub fn write_json(&self, relative: &str, value: &Value) -> Result<PathBuf> {
        let contents = serde_json::to_string_pretty(value).context("serialise fragment")?;
        self.write(relative, &contents)
    }

    /// Creates the directory `relative` without any fragments inside.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn mkdir(&self, relative: &str) -> Result<PathBuf> {
        let path = self.root().join(relative);
        fs::create_dir_all(&path).with_context(|| format!("create directory {}", path.display()))?;
        Ok(path)
    }

    /// Builder-style variant of [`FragmentTree::write`].
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment cannot be written.
    pub fn with(self, relative: &str, contents: &str) -> Result<Self> {
        self.write(relative, contents)?;
        Ok(self)
    }
}
