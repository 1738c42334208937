//! The typed configuration entity graph.
//!
//! [`Configuration`] is the root. It owns databases, loggers, caches and the
//! operation tree (`edition → entity type → name → Operation`), whose
//! operations own [`Plugin`]s, which own [`Subject`]s. Defaults for every
//! omitted field and sub-object come from each type's `Default`
//! implementation, so a decoded graph never has missing collections or
//! adapters.

mod coerce;
mod configuration;
mod csv;
mod database;
mod entries;
mod link;
mod logger;
mod operation;
mod params;
mod subject;

pub use coerce::map_boolean;
pub(crate) use coerce::from_tree;
pub use configuration::{
    Configuration, DEFAULT_LOG_LEVEL, DEFAULT_MAGENTO_EDITION, DEFAULT_MAGENTO_VERSION,
    DEFAULT_MULTIPLE_FIELD_DELIMITER, DEFAULT_MULTIPLE_VALUE_DELIMITER, PID_FILENAME,
};
pub use csv::{CsvOptions, DEFAULT_DELIMITER, DEFAULT_ENCLOSURE, DEFAULT_ESCAPE};
pub use database::{AVAILABLE_TYPES, Database, TYPE_MYSQL, TYPE_REDIS};
pub use entries::{Alias, Cache, STATIC_CACHE_TYPE, VendorDir};
pub use link::{OperationKey, PluginRef, SubjectContext};
pub use logger::{
    DEFAULT_LOGGER_FACTORY, Formatter, Handler, Logger, Processor, SwiftMailer, Transport,
};
pub use operation::{Operation, Operations, Plugin};
pub use params::{Params, ParamsAware, ParamsDocument};
pub use subject::{
    Adapter, DEFAULT_DATE_CONVERTER, DEFAULT_EXPORT_ADAPTER, DEFAULT_FILE_RESOLVER,
    DEFAULT_FILESYSTEM_ADAPTER, DEFAULT_FILESYSTEM_BACKEND, DEFAULT_IMPORT_ADAPTER,
    DEFAULT_LOCALE, DEFAULT_NUMBER_CONVERTER, DEFAULT_SERIALIZER, DEFAULT_SOURCE_DATE_FORMAT,
    DateConverter, ELEMENT_COUNTER, ELEMENT_FILENAME, ELEMENT_PREFIX, ExportAdapter,
    FileResolver, FilesystemAdapter, ImportAdapter, NumberConverter, Serializer, Subject,
};

#[cfg(test)]
mod tests;
