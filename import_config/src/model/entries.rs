//! Small entries held in the root configuration's lists.

use serde::{Deserialize, Serialize};

use super::coerce;

/// Cache type that is enabled even when caching is switched off globally.
pub const STATIC_CACHE_TYPE: &str = "static";

/// Maps a service id to the id it stands in for.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Alias {
    /// Alias id.
    pub id: String,
    /// Target id.
    pub target: String,
}

/// A cache backend entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Cache {
    /// Cache type, used as the lookup key.
    #[serde(rename = "type")]
    pub cache_type: String,
    /// Time to live in seconds.
    pub time: Option<u64>,
    /// Whether this cache is wanted. Only effective while caching is
    /// enabled globally, except for [`STATIC_CACHE_TYPE`].
    #[serde(deserialize_with = "coerce::boolean")]
    pub enabled: bool,
}

impl Default for Cache {
    fn default() -> Self {
        Self {
            cache_type: String::new(),
            time: None,
            enabled: true,
        }
    }
}

impl Cache {
    /// Construct an enabled cache entry of `cache_type`.
    #[must_use]
    pub fn new(cache_type: impl Into<String>) -> Self {
        Self {
            cache_type: cache_type.into(),
            ..Self::default()
        }
    }

    /// Whether this entry is the always-on static cache.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.cache_type == STATIC_CACHE_TYPE
    }
}

/// An extra vendor directory and the libraries loaded from it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct VendorDir {
    /// Directory path.
    pub vendor_dir: String,
    /// Libraries loaded from the directory.
    pub libraries: Vec<String>,
}
