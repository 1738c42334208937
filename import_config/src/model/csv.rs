//! CSV dialect settings shared by the root configuration and the adapters.

use serde::{Deserialize, Serialize};

/// Field delimiter used when none is configured.
pub const DEFAULT_DELIMITER: &str = ",";
/// Field enclosure used when none is configured.
pub const DEFAULT_ENCLOSURE: &str = "\"";
/// Escape character used when none is configured.
pub const DEFAULT_ESCAPE: &str = "\\";

/// How CSV files are read and written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CsvOptions {
    /// Field delimiter.
    pub delimiter: String,
    /// Field enclosure.
    pub enclosure: String,
    /// Escape character.
    pub escape: String,
    /// Charset to convert from when reading.
    pub from_charset: Option<String>,
    /// Charset to convert to when reading.
    pub to_charset: Option<String>,
    /// Mode used to open files.
    pub file_mode: Option<String>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_owned(),
            enclosure: DEFAULT_ENCLOSURE.to_owned(),
            escape: DEFAULT_ESCAPE.to_owned(),
            from_charset: None,
            to_charset: None,
            file_mode: None,
        }
    }
}
