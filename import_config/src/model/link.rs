//! Parent references and inherited lookups across the entity graph.
//!
//! Parents are addressed by position rather than by reference: an operation
//! is identified by its [`OperationKey`] in the operations tree and a plugin
//! by its index within that operation. [`Configuration::link`] assigns these
//! once after decoding; [`SubjectContext`] uses them to answer the questions
//! a subject delegates to its plugin, operation or root configuration.

use std::collections::BTreeMap;

use serde_json::Value;

use super::configuration::Configuration;
use super::csv::CsvOptions;
use super::operation::{Operation, Plugin};
use super::subject::Subject;

/// Position of an operation in the operations tree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OperationKey {
    /// Edition the operation is registered for.
    pub edition: String,
    /// Entity type the operation is registered for.
    pub entity_type: String,
    /// Operation name.
    pub name: String,
}

impl OperationKey {
    /// Construct a key.
    #[must_use]
    pub fn new(
        edition: impl Into<String>,
        entity_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            edition: edition.into(),
            entity_type: entity_type.into(),
            name: name.into(),
        }
    }

    /// `edition`, `entity_type` and `name` joined by `separator`.
    #[must_use]
    pub fn full_name(&self, separator: &str) -> String {
        [
            self.edition.as_str(),
            self.entity_type.as_str(),
            self.name.as_str(),
        ]
        .join(separator)
    }
}

/// Position of a plugin: its operation and its index within it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginRef {
    /// Owning operation.
    pub operation: OperationKey,
    /// Index in the operation's plugin list.
    pub index: usize,
}

impl Configuration {
    /// Assign parent references and fill names from their map keys.
    ///
    /// Run once after decoding; the loader does this automatically. Running
    /// it again is harmless.
    pub fn link(&mut self) {
        for (name, logger) in &mut self.loggers {
            if logger.name.is_empty() {
                logger.name.clone_from(name);
            }
        }

        for (edition, entity_types) in &mut self.operations {
            for (entity_type, operations) in entity_types {
                for (name, operation) in operations {
                    if operation.name.is_empty() {
                        operation.name.clone_from(name);
                    }
                    let key = OperationKey::new(edition.as_str(), entity_type.as_str(), name.as_str());
                    link_operation(operation, &key);
                }
            }
        }
    }

    /// The operation at `key`.
    #[must_use]
    pub fn operation(&self, key: &OperationKey) -> Option<&Operation> {
        self.operations
            .get(&key.edition)
            .and_then(|entity_types| entity_types.get(&key.entity_type))
            .and_then(|operations| operations.get(&key.name))
    }

    /// The plugin at `plugin`.
    #[must_use]
    pub fn plugin(&self, plugin: &PluginRef) -> Option<&Plugin> {
        self.operation(&plugin.operation)
            .and_then(|operation| operation.plugins.get(plugin.index))
    }

    /// Every subject with its inherited context, in traversal order.
    pub fn subjects(&self) -> impl Iterator<Item = SubjectContext<'_>> {
        self.iter_operations()
            .flat_map(|operation| &operation.plugins)
            .flat_map(move |plugin| {
                plugin.subjects.iter().map(move |subject| SubjectContext {
                    configuration: self,
                    plugin: Some(plugin),
                    subject,
                })
            })
    }

    /// Context for `subject`, resolving its plugin through the link pass.
    #[must_use]
    pub fn subject_context<'a>(&'a self, subject: &'a Subject) -> SubjectContext<'a> {
        SubjectContext {
            configuration: self,
            plugin: subject.plugin_ref().and_then(|plugin| self.plugin(plugin)),
            subject,
        }
    }
}

fn link_operation(operation: &mut Operation, key: &OperationKey) {
    operation.key = Some(key.clone());
    for (index, plugin) in operation.plugins.iter_mut().enumerate() {
        plugin.operation = Some(key.clone());
        let plugin_ref = PluginRef {
            operation: key.clone(),
            index,
        };
        for subject in &mut plugin.subjects {
            subject.plugin = Some(plugin_ref.clone());
        }
    }
}

/// A subject together with the entities it inherits settings from.
#[derive(Debug, Clone, Copy)]
pub struct SubjectContext<'a> {
    configuration: &'a Configuration,
    plugin: Option<&'a Plugin>,
    subject: &'a Subject,
}

impl<'a> SubjectContext<'a> {
    /// The subject itself.
    #[must_use]
    pub const fn subject(&self) -> &'a Subject {
        self.subject
    }

    /// The owning plugin, if the configuration is linked.
    #[must_use]
    pub const fn plugin(&self) -> Option<&'a Plugin> {
        self.plugin
    }

    /// The root configuration.
    #[must_use]
    pub const fn configuration(&self) -> &'a Configuration {
        self.configuration
    }

    /// The subject's source directory, else the root one.
    #[must_use]
    pub fn source_dir(&self) -> Option<&'a str> {
        non_empty(self.subject.source_dir.as_deref())
            .or_else(|| non_empty(self.configuration.source_dir.as_deref()))
    }

    /// The subject's target directory, else the root one.
    #[must_use]
    pub fn target_dir(&self) -> Option<&'a str> {
        non_empty(self.subject.target_dir.as_deref())
            .or_else(|| non_empty(self.configuration.target_dir.as_deref()))
    }

    /// CSV dialect of the root configuration.
    #[must_use]
    pub const fn csv(&self) -> &'a CsvOptions {
        &self.configuration.csv
    }

    /// Delimiter between multiple fields in one column.
    #[must_use]
    pub fn multiple_field_delimiter(&self) -> &'a str {
        &self.configuration.multiple_field_delimiter
    }

    /// Delimiter between multiple values in one field.
    #[must_use]
    pub fn multiple_value_delimiter(&self) -> &'a str {
        &self.configuration.multiple_value_delimiter
    }

    /// Whether strict mode is on.
    #[must_use]
    pub const fn is_strict_mode(&self) -> bool {
        self.configuration.strict_mode
    }

    /// Whether debug mode is on.
    #[must_use]
    pub const fn is_debug_mode(&self) -> bool {
        self.configuration.debug_mode
    }

    /// Column header mappings.
    #[must_use]
    pub const fn header_mappings(&self) -> &'a BTreeMap<String, BTreeMap<String, String>> {
        &self.configuration.header_mappings
    }

    /// Image types.
    #[must_use]
    pub const fn image_types(&self) -> &'a serde_json::Map<String, Value> {
        &self.configuration.image_types
    }

    /// Default column values.
    #[must_use]
    pub const fn default_values(&self) -> &'a BTreeMap<String, BTreeMap<String, String>> {
        &self.configuration.default_values
    }

    /// Full name of the owning operation.
    #[must_use]
    pub fn full_operation_name(&self, separator: &str) -> Option<String> {
        self.plugin
            .and_then(|plugin| plugin.full_operation_name(separator))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
