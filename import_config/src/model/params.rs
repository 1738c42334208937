//! Free-form parameters carried by several entities.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Named parameter values. Values keep whatever shape the source gave them.
pub type Params = serde_json::Map<String, Value>;

/// Read access to an entity's parameters.
pub trait ParamsAware {
    /// All parameters of the entity.
    fn params(&self) -> &Params;

    /// The parameter called `name`, if present.
    #[must_use]
    fn param(&self, name: &str) -> Option<&Value> {
        self.params().get(name)
    }

    /// Whether a parameter called `name` is present.
    #[must_use]
    fn has_param(&self, name: &str) -> bool {
        self.params().contains_key(name)
    }
}

/// Schema of a params overlay document: only its `params` key is used.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ParamsDocument {
    /// Parameters to merge into the base configuration.
    pub params: Params,
}

impl ParamsAware for ParamsDocument {
    fn params(&self) -> &Params {
        &self.params
    }
}
