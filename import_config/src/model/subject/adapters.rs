//! Import, export and filesystem adapter settings.

use serde::{Deserialize, Serialize};

use crate::model::coerce;
use crate::model::csv::CsvOptions;
use crate::model::params::{Params, ParamsAware};

/// Service id of the default import adapter.
pub const DEFAULT_IMPORT_ADAPTER: &str = "import.adapter.import.csv.factory";
/// Service id of the default export adapter.
pub const DEFAULT_EXPORT_ADAPTER: &str = "import.adapter.export.csv.factory";
/// Service id of the default export serializer.
pub const DEFAULT_SERIALIZER: &str = "import.serializer.factory.csv.additional.attribute";
/// Service id of the default filesystem adapter.
pub const DEFAULT_FILESYSTEM_ADAPTER: &str = "import.adapter.filesystem.factory.php";
/// Backend type of the default filesystem adapter.
pub const DEFAULT_FILESYSTEM_BACKEND: &str = "League\\Flysystem\\Adapter\\Local";

/// Reads import files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ImportAdapter {
    /// Service id.
    pub id: String,
    /// CSV dialect.
    #[serde(flatten)]
    pub csv: CsvOptions,
}

impl Default for ImportAdapter {
    fn default() -> Self {
        Self {
            id: DEFAULT_IMPORT_ADAPTER.to_owned(),
            csv: CsvOptions::default(),
        }
    }
}

/// Writes export files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExportAdapter {
    /// Service id.
    pub id: String,
    /// Serializer for additional attributes.
    #[serde(deserialize_with = "coerce::or_default")]
    pub serializer: Serializer,
    /// CSV dialect.
    #[serde(flatten)]
    pub csv: CsvOptions,
}

impl Default for ExportAdapter {
    fn default() -> Self {
        Self {
            id: DEFAULT_EXPORT_ADAPTER.to_owned(),
            serializer: Serializer::default(),
            csv: CsvOptions::default(),
        }
    }
}

/// Serializer used by an export adapter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Serializer {
    /// Service id.
    pub id: String,
}

impl Default for Serializer {
    fn default() -> Self {
        Self {
            id: DEFAULT_SERIALIZER.to_owned(),
        }
    }
}

/// Filesystem access for a subject.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilesystemAdapter {
    /// Service id.
    pub id: String,
    /// Storage backend.
    #[serde(deserialize_with = "coerce::or_default")]
    pub adapter: Adapter,
}

impl Default for FilesystemAdapter {
    fn default() -> Self {
        Self {
            id: DEFAULT_FILESYSTEM_ADAPTER.to_owned(),
            adapter: Adapter::default(),
        }
    }
}

/// Storage backend of a filesystem adapter.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Adapter {
    /// Backend type.
    #[serde(rename = "type")]
    pub adapter_type: String,
    /// Backend parameters.
    #[serde(deserialize_with = "coerce::or_default")]
    pub params: Params,
}

impl Default for Adapter {
    fn default() -> Self {
        Self {
            adapter_type: DEFAULT_FILESYSTEM_BACKEND.to_owned(),
            params: Params::new(),
        }
    }
}

impl ParamsAware for Adapter {
    fn params(&self) -> &Params {
        &self.params
    }
}
