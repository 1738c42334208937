//! Discovery of configuration fragment files beneath a set of directories.
//!
//! Each directory is walked recursively. Directories whose name matches the
//! exclusion pattern (by default anything starting with `.Trash`) are pruned,
//! and only files whose name ends in one of the requested suffixes are
//! returned. Files are sorted by their full path within each directory and
//! the directories keep the order they were given in, so the same directory
//! set always yields the same sequence.

mod builder;

use std::path::{Path, PathBuf};

use regex_lite::Regex;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::{ConfigError, ConfigResult};

pub use builder::DirectoryScannerBuilder;

/// Directory names matching this pattern are skipped while scanning.
pub const DEFAULT_EXCLUDE_PATTERN: &str = r"^\.Trash";

/// Recursive, deterministic finder for configuration fragments.
///
/// # Examples
///
/// ```rust,no_run
/// use import_config::scan::DirectoryScanner;
///
/// # fn run() -> import_config::ConfigResult<()> {
/// let scanner = DirectoryScanner::builder().build()?;
/// let files = scanner.scan(&["conf.d", "local.d"], "json")?;
/// for file in files {
///     println!("{}", file.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    exclude: Regex,
    follow_links: bool,
}

impl DirectoryScanner {
    /// Returns a builder with the default exclusion pattern.
    #[must_use]
    pub fn builder() -> DirectoryScannerBuilder {
        DirectoryScannerBuilder::new()
    }

    pub(super) const fn from_parts(exclude: Regex, follow_links: bool) -> Self {
        Self {
            exclude,
            follow_links,
        }
    }

    /// Scan `directories` in order for files matching `suffix`.
    ///
    /// `suffix` is a regular-expression alternation of file extensions
    /// without the leading dot, for example `json` or `yaml|yml`. A directory
    /// that does not exist contributes no files. The same file name found in
    /// two directories is returned twice.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Decode`] if `suffix` is not a valid pattern and
    /// [`ConfigError::MissingSource`] if a directory cannot be walked.
    pub fn scan<P>(&self, directories: &[P], suffix: &str) -> ConfigResult<Vec<PathBuf>>
    where
        P: AsRef<Path>,
    {
        let matcher = suffix_matcher(suffix)?;
        let mut files = Vec::new();
        for directory in directories {
            files.extend(self.list_directory(directory.as_ref(), &matcher)?);
        }
        debug!(
            directories = directories.len(),
            files = files.len(),
            suffix,
            "scanned configuration directories"
        );
        Ok(files)
    }

    fn list_directory(&self, directory: &Path, matcher: &Regex) -> ConfigResult<Vec<PathBuf>> {
        if !directory.is_dir() {
            debug!(directory = %directory.display(), "configuration directory not found; skipping");
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(directory)
            .follow_links(self.follow_links)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| !self.is_excluded_dir(entry));
        for result in walker {
            let entry = result.map_err(|err| walk_error(directory, err))?;
            if entry.file_type().is_file() && file_matches(&entry, matcher) {
                files.push(entry.into_path());
            }
        }
        files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        Ok(files)
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.exclude.is_match(name))
    }
}

fn suffix_matcher(suffix: &str) -> ConfigResult<Regex> {
    let pattern = format!(r"\.(?:{suffix})$");
    Regex::new(&pattern).map_err(|err| ConfigError::decode(format!("suffix pattern '{suffix}'"), err))
}

fn file_matches(entry: &DirEntry, matcher: &Regex) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| matcher.is_match(name))
}

fn walk_error(directory: &Path, err: walkdir::Error) -> std::sync::Arc<ConfigError> {
    let path = err
        .path()
        .map_or_else(|| directory.to_path_buf(), Path::to_path_buf);
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
    ConfigError::missing_source(&path, source)
}

#[cfg(test)]
mod tests;
