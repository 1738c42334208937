//! Temporary directory trees populated with configuration fragments.
//!
//! # Examples
//!
//! ```
//! use test_helpers::FragmentDir;
//!
//! # fn main() -> anyhow::Result<()> {
//! let dir = FragmentDir::new()?;
//! dir.write("catalog/01-base.json", r#"{"magento-edition": "CE"}"#)?;
//! assert!(dir.path().join("catalog/01-base.json").is_file());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;
use tempfile::TempDir;

/// A temporary directory removed when dropped.
#[derive(Debug)]
pub struct FragmentDir {
    dir: TempDir,
}

impl FragmentDir {
    /// Creates an empty fragment directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("create fragment directory")?;
        Ok(Self { dir })
    }

    /// Root of the directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Root of the directory as a UTF-8 path.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary path is not valid UTF-8.
    pub fn utf8_path(&self) -> Result<Utf8PathBuf> {
        Utf8PathBuf::from_path_buf(self.dir.path().to_path_buf())
            .map_err(|path| anyhow!("temporary path is not UTF-8: {}", path.display()))
    }

    /// Resolves `relative` against the root.
    #[must_use]
    pub fn join(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Writes `contents` to `relative`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be written.
    pub fn write(&self, relative: &str, contents: &str) -> Result<PathBuf> {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        std::fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Serializes `value` as pretty JSON and writes it to `relative`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write_json(&self, relative: &str, value: &serde_json::Value) -> Result<PathBuf> {
        let text = serde_json::to_string_pretty(value).context("serialize fragment")?;
        self.write(relative, &text)
    }

    /// Creates an empty directory at `relative`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn mkdir(&self, relative: &str) -> Result<PathBuf> {
        let path = self.join(relative);
        std::fs::create_dir_all(&path).with_context(|| format!("create {}", path.display()))?;
        Ok(path)
    }
}
