//! The root configuration entity and its queries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::coerce;
use super::csv::CsvOptions;
use super::database::Database;
use super::entries::{Alias, Cache, VendorDir};
use super::logger::Logger;
use super::operation::{Operation, Operations};
use super::params::{Params, ParamsAware};
use crate::{ConfigError, ConfigResult};

/// Edition assumed when none is configured.
pub const DEFAULT_MAGENTO_EDITION: &str = "CE";
/// Version assumed when none is configured.
pub const DEFAULT_MAGENTO_VERSION: &str = "2.2.0";
/// Log level assumed when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// File name of the PID file inside the temporary directory.
pub const PID_FILENAME: &str = "importer.pid";
/// Default multiple-field delimiter.
pub const DEFAULT_MULTIPLE_FIELD_DELIMITER: &str = ",";
/// Default multiple-value delimiter.
pub const DEFAULT_MULTIPLE_VALUE_DELIMITER: &str = "|";

fn default_pid_filename() -> String {
    std::env::temp_dir()
        .join(PID_FILENAME)
        .to_string_lossy()
        .into_owned()
}

/// The root of the configuration entity graph.
///
/// Field names follow the kebab-case keys of the configuration files. Every
/// collection decodes to an empty one when absent. Fields marked as runtime
/// state are never read from or written to files; they are set by the
/// command line or the caller.
///
/// # Examples
///
/// ```
/// use import_config::model::Configuration;
///
/// let config: Configuration = serde_json::from_str(
///     r#"{"databases": [{"id": "a"}, {"id": "b", "default": true}]}"#,
/// )
/// .expect("valid configuration");
/// assert_eq!(config.database().map(|db| db.id.as_str()).ok(), Some("b"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Configuration {
    /// Application service id.
    pub id: Option<String>,
    /// Name of the system importing data.
    pub system_name: Option<String>,
    /// Entity type the run imports.
    pub entity_type_code: Option<String>,
    /// Installation directory of the target application.
    pub installation_dir: Option<String>,
    /// Directory import files are read from.
    pub source_dir: Option<String>,
    /// Directory processed files are moved to.
    pub target_dir: Option<String>,
    /// Target application edition.
    pub magento_edition: String,
    /// Target application version.
    pub magento_version: String,
    /// Database connections.
    #[serde(deserialize_with = "coerce::or_default")]
    pub databases: Vec<Database>,
    /// Logging channels keyed by name.
    #[serde(deserialize_with = "coerce::or_default")]
    pub loggers: BTreeMap<String, Logger>,
    /// Delimiter between multiple fields in one column.
    pub multiple_field_delimiter: String,
    /// Delimiter between multiple values in one field.
    pub multiple_value_delimiter: String,
    /// Whether recoverable row errors abort the run.
    #[serde(deserialize_with = "coerce::boolean")]
    pub strict_mode: bool,
    /// Whether processed files are archived.
    #[serde(deserialize_with = "coerce::boolean")]
    pub archive_artefacts: bool,
    /// Directory archives are written to.
    pub archive_dir: Option<String>,
    /// Whether debug mode is on.
    #[serde(deserialize_with = "coerce::boolean")]
    pub debug_mode: bool,
    /// Minimum log level.
    pub log_level: String,
    /// Id of the database to use instead of the default one.
    pub use_db_id: Option<String>,
    /// Path of the PID file.
    pub pid_filename: String,
    /// Extra vendor directories.
    #[serde(deserialize_with = "coerce::or_default")]
    pub additional_vendor_dirs: Vec<VendorDir>,
    /// Operations by edition, entity type and name.
    #[serde(deserialize_with = "coerce::or_default")]
    pub operations: Operations,
    /// Extension libraries to load.
    #[serde(deserialize_with = "coerce::or_default")]
    pub extension_libraries: Vec<String>,
    /// Column header mappings by entity type.
    #[serde(deserialize_with = "coerce::or_default")]
    pub header_mappings: BTreeMap<String, BTreeMap<String, String>>,
    /// Image types.
    #[serde(deserialize_with = "coerce::or_default")]
    pub image_types: Map<String, Value>,
    /// Whether the whole run uses one transaction.
    #[serde(deserialize_with = "coerce::boolean")]
    pub single_transaction: bool,
    /// Whether caching is enabled globally.
    #[serde(deserialize_with = "coerce::boolean")]
    pub cache_enabled: bool,
    /// Service aliases.
    #[serde(deserialize_with = "coerce::or_default")]
    pub aliases: Vec<Alias>,
    /// Cache backends.
    #[serde(deserialize_with = "coerce::or_default")]
    pub caches: Vec<Cache>,
    /// Operation name lists by edition and shortcut.
    #[serde(deserialize_with = "coerce::or_default")]
    pub shortcuts: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    /// Finder mappings by key.
    #[serde(deserialize_with = "coerce::or_default")]
    pub finder_mappings: BTreeMap<String, String>,
    /// Default column values by entity type.
    #[serde(deserialize_with = "coerce::or_default")]
    pub default_values: BTreeMap<String, BTreeMap<String, String>>,
    /// Free-form parameters.
    #[serde(deserialize_with = "coerce::or_default")]
    pub params: Params,
    /// CSV dialect.
    #[serde(flatten)]
    pub csv: CsvOptions,

    /// Serial of the current run. Runtime state.
    #[serde(skip)]
    pub serial: Option<String>,
    /// Shortcut that selected the operations. Runtime state.
    #[serde(skip)]
    pub shortcut: Option<String>,
    /// Prefix for the move-files subject. Runtime state.
    #[serde(skip)]
    pub move_files_prefix: Option<String>,
    /// Name of the invoked command. Runtime state.
    #[serde(skip)]
    pub command_name: Option<String>,
    /// User recorded in the import history. Runtime state.
    #[serde(skip)]
    pub username: Option<String>,
    #[serde(skip)]
    operation_names: Vec<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            id: None,
            system_name: None,
            entity_type_code: None,
            installation_dir: None,
            source_dir: None,
            target_dir: None,
            magento_edition: DEFAULT_MAGENTO_EDITION.to_owned(),
            magento_version: DEFAULT_MAGENTO_VERSION.to_owned(),
            databases: Vec::new(),
            loggers: BTreeMap::new(),
            multiple_field_delimiter: DEFAULT_MULTIPLE_FIELD_DELIMITER.to_owned(),
            multiple_value_delimiter: DEFAULT_MULTIPLE_VALUE_DELIMITER.to_owned(),
            strict_mode: false,
            archive_artefacts: false,
            archive_dir: None,
            debug_mode: false,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            use_db_id: None,
            pid_filename: default_pid_filename(),
            additional_vendor_dirs: Vec::new(),
            operations: Operations::new(),
            extension_libraries: Vec::new(),
            header_mappings: BTreeMap::new(),
            image_types: Map::new(),
            single_transaction: false,
            cache_enabled: true,
            aliases: Vec::new(),
            caches: Vec::new(),
            shortcuts: BTreeMap::new(),
            finder_mappings: BTreeMap::new(),
            default_values: BTreeMap::new(),
            params: Params::new(),
            csv: CsvOptions::default(),
            serial: None,
            shortcut: None,
            move_files_prefix: None,
            command_name: None,
            username: None,
            operation_names: Vec::new(),
        }
    }
}

impl Configuration {
    /// Copy the runtime-only state of `other` into `self`.
    pub(crate) fn copy_runtime_state(&mut self, other: &Self) {
        self.serial.clone_from(&other.serial);
        self.shortcut.clone_from(&other.shortcut);
        self.move_files_prefix.clone_from(&other.move_files_prefix);
        self.command_name.clone_from(&other.command_name);
        self.username.clone_from(&other.username);
        self.operation_names.clone_from(&other.operation_names);
    }

    /// Record `name` as an operation to execute.
    ///
    /// Names already recorded are ignored. With `prepend` the name is placed
    /// first, otherwise last.
    pub fn add_operation_name(&mut self, name: impl Into<String>, prepend: bool) {
        let name = name.into();
        if self.operation_names.contains(&name) {
            return;
        }
        if prepend {
            self.operation_names.insert(0, name);
        } else {
            self.operation_names.push(name);
        }
    }

    /// Replace the recorded operation names.
    pub fn set_operation_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operation_names.clear();
        for name in names {
            self.add_operation_name(name, false);
        }
    }

    /// Operation names to execute, in order.
    #[must_use]
    pub fn operation_names(&self) -> &[String] {
        &self.operation_names
    }

    /// Whether `operation` is among the names to execute.
    #[must_use]
    pub fn in_operation_names(&self, operation: &Operation) -> bool {
        self.operation_names.contains(&operation.name)
    }

    /// Remove every database entry.
    pub fn clear_databases(&mut self) {
        self.databases.clear();
    }

    /// Append a database entry.
    pub fn add_database(&mut self, database: Database) {
        self.databases.push(database);
    }

    /// Number of database entries, including those of unsupported types.
    #[must_use]
    pub const fn count_databases(&self) -> usize {
        self.databases.len()
    }

    /// The database with `id` and a supported type.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DatabaseNotFound`] when no such entry exists.
    pub fn database_by_id(&self, id: &str) -> ConfigResult<&Database> {
        self.databases
            .iter()
            .find(|db| db.id == id && db.has_valid_type())
            .ok_or_else(|| {
                std::sync::Arc::new(ConfigError::DatabaseNotFound { id: id.to_owned() })
            })
    }

    /// Databases of exactly `db_type` whose type is supported.
    pub fn databases_by_type<'a>(
        &'a self,
        db_type: &'a str,
    ) -> impl Iterator<Item = &'a Database> + 'a {
        self.databases
            .iter()
            .filter(move |db| db.db_type == db_type && db.has_valid_type())
    }

    /// The database to connect to.
    ///
    /// Resolution order: the entry named by `use-db-id`, then the first
    /// entry flagged default with a supported type, then the first entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DatabaseNotFound`] when `use-db-id` names a
    /// missing entry and [`ConfigError::NoDatabase`] when there are no
    /// entries at all.
    pub fn database(&self) -> ConfigResult<&Database> {
        if let Some(id) = self.use_db_id.as_deref().filter(|id| !id.is_empty()) {
            return self.database_by_id(id);
        }
        self.databases
            .iter()
            .find(|db| db.default && db.has_valid_type())
            .or_else(|| self.databases.first())
            .ok_or_else(|| std::sync::Arc::new(ConfigError::NoDatabase))
    }

    /// The first cache entry of `cache_type`.
    #[must_use]
    pub fn cache_by_type(&self, cache_type: &str) -> Option<&Cache> {
        self.caches
            .iter()
            .find(|cache| cache.cache_type == cache_type)
    }

    /// Whether `cache` is effectively enabled.
    ///
    /// The static cache is always enabled; any other cache needs both its own
    /// flag and the global `cache-enabled` flag.
    #[must_use]
    pub fn is_cache_enabled_for(&self, cache: &Cache) -> bool {
        cache.is_static() || (cache.enabled && self.cache_enabled)
    }

    /// The finder mapping for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FinderMappingNotFound`] when no mapping exists.
    pub fn finder_mapping_by_key(&self, key: &str) -> ConfigResult<&str> {
        self.finder_mappings
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| {
                std::sync::Arc::new(ConfigError::FinderMappingNotFound {
                    key: key.to_owned(),
                })
            })
    }

    /// Unique file-resolver prefixes of every subject, in traversal order,
    /// skipping any listed in `ignore`.
    #[must_use]
    pub fn prefixes(&self, ignore: &[&str]) -> Vec<String> {
        let mut prefixes: Vec<String> = Vec::new();
        for subject in self.iter_operations().flat_map(|op| &op.plugins).flat_map(|p| &p.subjects) {
            let prefix = subject.prefix();
            if ignore.contains(&prefix) || prefixes.iter().any(|known| known == prefix) {
                continue;
            }
            prefixes.push(prefix.to_owned());
        }
        prefixes
    }

    /// Prefixes as [`Self::prefixes`] with the catch-all `.*` ignored.
    #[must_use]
    pub fn default_prefixes(&self) -> Vec<String> {
        self.prefixes(&[".*"])
    }

    /// Every operation in edition, entity type and name order.
    pub fn iter_operations(&self) -> impl Iterator<Item = &Operation> {
        self.operations
            .values()
            .flat_map(BTreeMap::values)
            .flat_map(BTreeMap::values)
    }
}

impl ParamsAware for Configuration {
    fn params(&self) -> &Params {
        &self.params
    }
}
