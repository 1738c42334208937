//! Operations and the plugins they run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::coerce;
use super::link::OperationKey;
use super::logger::SwiftMailer;
use super::params::{Params, ParamsAware};
use super::subject::{ExportAdapter, ImportAdapter, Subject};

/// Operations nested by edition, then entity type, then operation name.
pub type Operations = BTreeMap<String, BTreeMap<String, BTreeMap<String, Operation>>>;

/// A named operation and the plugins it runs, in order.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Operation {
    /// Operation name; filled from its key when omitted.
    pub name: String,
    /// Plugins, written as a list or as a mapping.
    #[serde(deserialize_with = "coerce::seq_or_map")]
    pub plugins: Vec<Plugin>,
    #[serde(skip)]
    pub(crate) key: Option<OperationKey>,
}

impl Operation {
    /// Construct an operation without plugins.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether `other` has the same name, ignoring ASCII case.
    #[must_use]
    pub fn same_name(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }

    /// Position in the operations tree, once linked.
    #[must_use]
    pub const fn key(&self) -> Option<&OperationKey> {
        self.key.as_ref()
    }

    /// `edition/entity-type/name` joined by `separator`, or the bare name
    /// before the configuration is linked.
    #[must_use]
    pub fn full_name(&self, separator: &str) -> String {
        self.key
            .as_ref()
            .map_or_else(|| self.name.clone(), |key| key.full_name(separator))
    }
}

/// A plugin and the subjects it runs, in order.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Plugin {
    /// Service id.
    pub id: String,
    /// Display name; see [`Plugin::name`].
    #[serde(rename = "name")]
    pub display_name: Option<String>,
    /// Subjects, written as a list or as a mapping.
    #[serde(deserialize_with = "coerce::seq_or_map")]
    pub subjects: Vec<Subject>,
    /// Mailer for notifications.
    pub swift_mailer: Option<SwiftMailer>,
    /// Reads import files.
    #[serde(deserialize_with = "coerce::or_default")]
    pub import_adapter: ImportAdapter,
    /// Writes export files.
    #[serde(deserialize_with = "coerce::or_default")]
    pub export_adapter: ExportAdapter,
    /// Plugin parameters.
    #[serde(deserialize_with = "coerce::or_default")]
    pub params: Params,
    #[serde(skip)]
    pub(crate) operation: Option<OperationKey>,
}

impl Plugin {
    /// Construct a plugin without subjects.
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

    /// The owning operation, once the configuration has been linked.
    #[must_use]
    pub const fn operation_key(&self) -> Option<&OperationKey> {
        self.operation.as_ref()
    }

    /// Full name of the owning operation, once linked.
    #[must_use]
    pub fn full_operation_name(&self, separator: &str) -> Option<String> {
        self.operation.as_ref().map(|key| key.full_name(separator))
    }
}

impl ParamsAware for Plugin {
    fn params(&self) -> &Params {
        &self.params
    }
}
