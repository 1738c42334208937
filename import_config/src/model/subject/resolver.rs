//! Settings for locating a subject's import files.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Service id of the default resolver, which waits for OK files.
pub const DEFAULT_FILE_RESOLVER: &str = "import.subject.file.resolver.ok.file.aware";

/// Name of the prefix pattern element.
pub const ELEMENT_PREFIX: &str = "prefix";
/// Name of the filename pattern element.
pub const ELEMENT_FILENAME: &str = "filename";
/// Name of the counter pattern element.
pub const ELEMENT_COUNTER: &str = "counter";

/// Describes the names of the files a subject imports.
///
/// A file name is built from the configured pattern elements joined by the
/// element separator and followed by the suffix, for example
/// `product-import_20240101_01.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FileResolver {
    /// Service id.
    pub id: String,
    /// Pattern for the file name prefix.
    pub prefix: String,
    /// Pattern for the file name body.
    pub filename: String,
    /// Pattern for the file counter.
    pub counter: String,
    /// Extension of import files.
    pub suffix: String,
    /// Extension of OK files.
    pub ok_file_suffix: String,
    /// Separator between pattern elements.
    pub element_separator: String,
    /// Element names, in file-name order.
    pub pattern_elements: Vec<String>,
}

impl Default for FileResolver {
    fn default() -> Self {
        Self {
            id: DEFAULT_FILE_RESOLVER.to_owned(),
            prefix: ".*".to_owned(),
            filename: ".*".to_owned(),
            counter: r"\d+".to_owned(),
            suffix: "csv".to_owned(),
            ok_file_suffix: "ok".to_owned(),
            element_separator: "_".to_owned(),
            pattern_elements: [ELEMENT_PREFIX, ELEMENT_FILENAME, ELEMENT_COUNTER]
                .map(str::to_owned)
                .to_vec(),
        }
    }
}

impl FileResolver {
    /// The pattern configured for the element called `name`.
    #[must_use]
    pub fn element(&self, name: &str) -> Option<&str> {
        match name {
            ELEMENT_PREFIX => Some(&self.prefix),
            ELEMENT_FILENAME => Some(&self.filename),
            ELEMENT_COUNTER => Some(&self.counter),
            _ => None,
        }
    }

    /// Regular expression source matching file names that end in `suffix`.
    ///
    /// Each known element becomes a named capture group. Unknown element
    /// names are ignored.
    #[must_use]
    pub fn pattern_for(&self, suffix: &str) -> String {
        let groups: Vec<String> = self
            .pattern_elements
            .iter()
            .filter_map(|name| {
                self.element(name)
                    .map(|pattern| format!("(?<{name}>{pattern})"))
            })
            .collect();
        format!(
            r"^{}\.{}$",
            groups.join(&regex_lite::escape(&self.element_separator)),
            regex_lite::escape(suffix)
        )
    }

    /// Regular expression source matching import files.
    #[must_use]
    pub fn pattern(&self) -> String {
        self.pattern_for(&self.suffix)
    }

    /// Regular expression source matching OK files.
    #[must_use]
    pub fn ok_file_pattern(&self) -> String {
        self.pattern_for(&self.ok_file_suffix)
    }

    /// Whether `file_name` is an import file for this resolver.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Decode`] if the configured elements do not form
    /// a valid regular expression.
    pub fn matches(&self, file_name: &str) -> ConfigResult<bool> {
        let pattern = self.pattern();
        let regex = Regex::new(&pattern)
            .map_err(|err| ConfigError::decode(format!("file resolver pattern '{pattern}'"), err))?;
        Ok(regex.is_match(file_name))
    }
}
