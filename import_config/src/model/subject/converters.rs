//! Number and date conversion settings.

use serde::{Deserialize, Serialize};

/// Service id of the default number converter.
pub const DEFAULT_NUMBER_CONVERTER: &str = "import.subject.number.converter.simple";
/// Service id of the default date converter.
pub const DEFAULT_DATE_CONVERTER: &str = "import.subject.date.converter.simple";
/// Locale assumed for numbers.
pub const DEFAULT_LOCALE: &str = "en_US";
/// Date format assumed for source values.
pub const DEFAULT_SOURCE_DATE_FORMAT: &str = "n/d/y, g:i A";

/// Converts localized numbers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NumberConverter {
    /// Service id.
    pub id: String,
    /// Locale of source numbers.
    pub locale: String,
}

impl Default for NumberConverter {
    fn default() -> Self {
        Self {
            id: DEFAULT_NUMBER_CONVERTER.to_owned(),
            locale: DEFAULT_LOCALE.to_owned(),
        }
    }
}

/// Converts source dates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DateConverter {
    /// Service id.
    pub id: String,
    /// Format of source dates.
    pub source_date_format: String,
}

impl Default for DateConverter {
    fn default() -> Self {
        Self {
            id: DEFAULT_DATE_CONVERTER.to_owned(),
            source_date_format: DEFAULT_SOURCE_DATE_FORMAT.to_owned(),
        }
    }
}
