//! Subjects: the units of work run by a plugin.

mod adapters;
mod converters;
mod resolver;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use adapters::{
    Adapter, DEFAULT_EXPORT_ADAPTER, DEFAULT_FILESYSTEM_ADAPTER, DEFAULT_FILESYSTEM_BACKEND,
    DEFAULT_IMPORT_ADAPTER, DEFAULT_SERIALIZER, ExportAdapter, FilesystemAdapter, ImportAdapter,
    Serializer,
};
pub use converters::{
    DEFAULT_DATE_CONVERTER, DEFAULT_LOCALE, DEFAULT_NUMBER_CONVERTER, DEFAULT_SOURCE_DATE_FORMAT,
    DateConverter, NumberConverter,
};
pub use resolver::{
    DEFAULT_FILE_RESOLVER, ELEMENT_COUNTER, ELEMENT_FILENAME, ELEMENT_PREFIX, FileResolver,
};

use super::coerce;
use super::link::PluginRef;
use super::params::{Params, ParamsAware};

/// A subject and the adapters, resolver and converters it runs with.
///
/// Every sub-object is always present: omitted ones decode to their
/// built-in defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Subject {
    /// Service id.
    pub id: String,
    /// Display name; see [`Subject::name`].
    #[serde(rename = "name")]
    pub display_name: Option<String>,
    /// Observer definitions.
    #[serde(deserialize_with = "coerce::seq_or_map")]
    pub observers: Vec<Value>,
    /// Callback definitions.
    #[serde(deserialize_with = "coerce::seq_or_map")]
    pub callbacks: Vec<Value>,
    /// Callbacks keyed by frontend input type.
    #[serde(deserialize_with = "coerce::seq_or_map")]
    pub frontend_input_callbacks: Vec<Value>,
    /// Whether the subject waits for an OK file.
    #[serde(deserialize_with = "coerce::boolean")]
    pub ok_file_needed: bool,
    /// Whether an `.imported` marker is written after a run.
    #[serde(deserialize_with = "coerce::boolean")]
    pub create_imported_file: bool,
    /// Reads import files.
    #[serde(deserialize_with = "coerce::or_default")]
    pub import_adapter: ImportAdapter,
    /// Writes export files.
    #[serde(deserialize_with = "coerce::or_default")]
    pub export_adapter: ExportAdapter,
    /// Filesystem access.
    #[serde(deserialize_with = "coerce::or_default")]
    pub filesystem_adapter: FilesystemAdapter,
    /// Locates import files.
    #[serde(deserialize_with = "coerce::or_default")]
    pub file_resolver: FileResolver,
    /// Converts numbers.
    #[serde(deserialize_with = "coerce::or_default")]
    pub number_converter: NumberConverter,
    /// Converts dates.
    #[serde(deserialize_with = "coerce::or_default")]
    pub date_converter: DateConverter,
    /// Source directory; falls back to the root configuration's.
    pub source_dir: Option<String>,
    /// Target directory; falls back to the root configuration's.
    pub target_dir: Option<String>,
    /// Subject parameters.
    #[serde(deserialize_with = "coerce::or_default")]
    pub params: Params,
    #[serde(skip)]
    pub(crate) plugin: Option<PluginRef>,
}

impl Default for Subject {
    fn default() -> Self {
        Self {
            id: String::new(),
            display_name: None,
            observers: Vec::new(),
            callbacks: Vec::new(),
            frontend_input_callbacks: Vec::new(),
            ok_file_needed: false,
            create_imported_file: true,
            import_adapter: ImportAdapter::default(),
            export_adapter: ExportAdapter::default(),
            filesystem_adapter: FilesystemAdapter::default(),
            file_resolver: FileResolver::default(),
            number_converter: NumberConverter::default(),
            date_converter: DateConverter::default(),
            source_dir: None,
            target_dir: None,
            params: Params::new(),
            plugin: None,
        }
    }
}

impl Subject {
    /// Construct a subject with default settings.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// The configured name, or the id when no name is set.
    #[must_use]
    pub fn name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.id)
    }

    /// File-name prefix of the subject's import files.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.file_resolver.prefix
    }

    /// Format of source dates.
    #[must_use]
    pub fn source_date_format(&self) -> &str {
        &self.date_converter.source_date_format
    }

    /// The owning plugin, once the configuration has been linked.
    #[must_use]
    pub const fn plugin_ref(&self) -> Option<&PluginRef> {
        self.plugin.as_ref()
    }
}

impl ParamsAware for Subject {
    fn params(&self) -> &Params {
        &self.params
    }
}
