//! Builder for [`DirectoryScanner`].

use regex_lite::Regex;

use super::{DEFAULT_EXCLUDE_PATTERN, DirectoryScanner};
use crate::{ConfigError, ConfigResult};

/// Builder for [`DirectoryScanner`].
///
/// # Examples
///
/// ```rust
/// use import_config::scan::DirectoryScanner;
///
/// # fn run() -> import_config::ConfigResult<()> {
/// let scanner = DirectoryScanner::builder()
///     .exclude(r"^(\.Trash|\.git)")
///     .follow_links(true)
///     .build()?;
/// # let _ = scanner;
/// # Ok(())
/// # }
/// # run().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryScannerBuilder {
    exclude: String,
    follow_links: bool,
}

impl Default for DirectoryScannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryScannerBuilder {
    /// Creates a builder that skips `.Trash` directories and does not follow
    /// symbolic links.
    #[must_use]
    pub fn new() -> Self {
        Self {
            exclude: String::from(DEFAULT_EXCLUDE_PATTERN),
            follow_links: false,
        }
    }

    /// Replaces the pattern matched against directory names to prune.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude = pattern.into();
        self
    }

    /// Controls whether symbolic links are followed while walking.
    #[must_use]
    pub const fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Compiles the exclusion pattern and returns the scanner.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Decode`] if the exclusion pattern is invalid.
    pub fn build(self) -> ConfigResult<DirectoryScanner> {
        let exclude = Regex::new(&self.exclude).map_err(|err| {
            ConfigError::decode(format!("exclusion pattern '{}'", self.exclude), err)
        })?;
        Ok(DirectoryScanner::from_parts(exclude, self.follow_links))
    }
}
