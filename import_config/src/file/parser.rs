//! Merge configuration fragments found beneath a set of directories.

use std::path::Path;

use camino::Utf8PathBuf;
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::{Format, helpers::read_to_string};
use crate::error::utf8_path;
use crate::merge::fold_fragments;
use crate::scan::DirectoryScanner;
use crate::{ConfigError, ConfigResult};

/// The result of merging every fragment in a directory set.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedDocument {
    format: Format,
    value: Value,
    sources: Vec<Utf8PathBuf>,
}

impl MergedDocument {
    /// Format the fragments were read in.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// The merged tree.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Consume the document, returning the merged tree.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Fragment files in the order they were merged.
    #[must_use]
    pub fn sources(&self) -> &[Utf8PathBuf] {
        &self.sources
    }

    /// Serialize the merged tree in the document's format.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Encode`] if the tree cannot be written.
    pub fn to_text(&self) -> ConfigResult<String> {
        self.format.encode(&self.value)
    }
}

/// Reads and merges every fragment of one format.
///
/// # Examples
///
/// ```rust,no_run
/// use import_config::file::{Format, FragmentParser};
///
/// # fn run() -> import_config::ConfigResult<()> {
/// let parser = FragmentParser::new(Format::Json)?;
/// let merged = parser.parse(&["etc/conf.d", "etc/local.d"])?;
/// println!("{merged}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FragmentParser {
    format: Format,
    scanner: DirectoryScanner,
}

impl FragmentParser {
    /// Construct a parser using the default directory scanner.
    ///
    /// # Errors
    ///
    /// Returns an error if the default scanner cannot be built.
    pub fn new(format: Format) -> ConfigResult<Self> {
        Ok(Self::with_scanner(format, DirectoryScanner::builder().build()?))
    }

    /// Construct a parser around an existing scanner.
    #[must_use]
    pub const fn with_scanner(format: Format, scanner: DirectoryScanner) -> Self {
        Self { format, scanner }
    }

    /// Format this parser reads and writes.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Scan `directories`, decode every fragment and merge them in order.
    ///
    /// Later fragments win. When no fragment is found the merged tree is an
    /// empty mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSource`] if a fragment cannot be read and
    /// [`ConfigError::Decode`] if one fails to parse or has no content.
    pub fn merge_directories<P>(&self, directories: &[P]) -> ConfigResult<MergedDocument>
    where
        P: AsRef<Path>,
    {
        let files = self
            .scanner
            .scan(directories, self.format.suffix_pattern())?;
        let mut fragments = Vec::with_capacity(files.len());
        let mut sources = Vec::with_capacity(files.len());
        for file in files {
            fragments.push(self.read_fragment(&file)?);
            sources.push(utf8_path(&file));
        }
        let value = fold_fragments(fragments).unwrap_or_else(|| Value::Object(Map::new()));
        info!(
            format = %self.format,
            fragments = sources.len(),
            "merged configuration fragments"
        );
        Ok(MergedDocument {
            format: self.format,
            value,
            sources,
        })
    }

    /// Scan, merge and serialize `directories` in this parser's format.
    ///
    /// # Errors
    ///
    /// Propagates any failure from [`Self::merge_directories`] or from
    /// encoding the result.
    pub fn parse<P>(&self, directories: &[P]) -> ConfigResult<String>
    where
        P: AsRef<Path>,
    {
        self.merge_directories(directories)?.to_text()
    }

    /// Read and decode a single fragment file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSource`] if the file cannot be read and
    /// [`ConfigError::Decode`] if it fails to parse or decodes to nothing.
    pub fn read_fragment(&self, path: &Path) -> ConfigResult<Value> {
        let origin = path.display().to_string();
        let text = read_to_string(path)?;
        if text.trim().is_empty() {
            return Err(ConfigError::decode(origin, "file has no content"));
        }
        let value = self.format.decode(&origin, &text)?;
        if is_empty_fragment(&value) {
            return Err(ConfigError::decode(origin, "file has no content"));
        }
        debug!(path = %origin, "read configuration fragment");
        Ok(value)
    }
}

fn is_empty_fragment(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Null | Value::Bool(false) => true,
        _ => false,
    }
}

/// Maps format names to parsers sharing one scanner.
#[derive(Debug, Clone)]
pub struct ParserRegistry {
    scanner: DirectoryScanner,
    formats: Vec<Format>,
}

impl ParserRegistry {
    /// A registry offering every supported format.
    #[must_use]
    pub fn new(scanner: DirectoryScanner) -> Self {
        Self::with_formats(scanner, Format::ALL)
    }

    /// A registry offering only `formats`.
    #[must_use]
    pub fn with_formats<I>(scanner: DirectoryScanner, formats: I) -> Self
    where
        I: IntoIterator<Item = Format>,
    {
        Self {
            scanner,
            formats: formats.into_iter().collect(),
        }
    }

    /// Whether `format` has a registered parser.
    #[must_use]
    pub fn supports(&self, format: Format) -> bool {
        self.formats.contains(&format)
    }

    /// Return the parser registered for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] when the name is unknown or
    /// not registered.
    pub fn parser(&self, name: &str) -> ConfigResult<FragmentParser> {
        self.parser_for(Format::from_name(name)?)
    }

    /// Return the parser registered for `format`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] when `format` is not
    /// registered.
    pub fn parser_for(&self, format: Format) -> ConfigResult<FragmentParser> {
        if !self.supports(format) {
            return Err(ConfigError::unsupported_format(format.name()));
        }
        Ok(FragmentParser::with_scanner(format, self.scanner.clone()))
    }
}
