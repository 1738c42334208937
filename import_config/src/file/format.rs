//! Serialization formats understood by the loader.
//!
//! Decoding always goes through a `figment` provider so every format reports
//! errors the same way, then lands in a [`serde_json::Value`] tree that the
//! merge engine and the typed model share.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use figment::{
    Figment,
    providers::{Format as _, Json, Toml},
};
use serde_json::Value;

use super::yaml::SaphyrYaml;
use crate::{ConfigError, ConfigResult, ConfigResultExt};

/// A configuration serialization format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Format {
    /// JSON, the default format.
    #[default]
    Json,
    /// YAML 1.2.
    Yaml,
    /// TOML.
    Toml,
}

impl Format {
    /// Every supported format, in registry order.
    pub const ALL: [Self; 3] = [Self::Json, Self::Yaml, Self::Toml];

    /// Resolve a format from its name, ignoring ASCII case.
    ///
    /// `yml` is accepted as an alias for `yaml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for any other name.
    pub fn from_name(name: &str) -> ConfigResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            _ => Err(ConfigError::unsupported_format(name)),
        }
    }

    /// Resolve a format from the extension of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] when the extension is
    /// missing or unknown.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ConfigError::unsupported_format(path.display().to_string()))?;
        Self::from_name(ext)
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }

    /// File-name suffix alternation used when scanning for fragments.
    #[must_use]
    pub const fn suffix_pattern(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml|yml",
            Self::Toml => "toml",
        }
    }

    /// Decode `text` into a value tree, naming `origin` in any error.
    ///
    /// The top level of the document must be a mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Decode`] when the text is not valid in this
    /// format.
    pub fn decode(self, origin: &str, text: &str) -> ConfigResult<Value> {
        let figment = match self {
            Self::Json => Figment::from(Json::string(text)),
            Self::Yaml => Figment::from(SaphyrYaml::string(origin, text)),
            Self::Toml => Figment::from(Toml::string(text)),
        };
        figment.extract::<Value>().decode_failure(origin)
    }

    /// Encode `value` as text in this format.
    ///
    /// YAML output is written as JSON, which every YAML 1.2 parser accepts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Encode`] when the value cannot be represented,
    /// for example a `null` written as TOML.
    pub fn encode(self, value: &Value) -> ConfigResult<String> {
        match self {
            Self::Json | Self::Yaml => serde_json::to_string_pretty(value).encode_failure(self.name()),
            Self::Toml => toml::to_string_pretty(value).encode_failure(self.name()),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = Arc<ConfigError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
