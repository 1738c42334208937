//! Figment provider for YAML fragments backed by `serde-saphyr`.
//!
//! YAML 1.2 booleans are enforced, so `yes`, `on` and friends stay strings.

use std::collections::BTreeMap;

use figment::{
    Metadata, Profile, Provider,
    error::Kind,
    value::{Dict, Value as FigmentValue},
};
use serde_saphyr::Options;

/// Figment provider over in-memory YAML text.
#[derive(Debug, Clone)]
pub struct SaphyrYaml {
    origin: String,
    contents: String,
}

impl SaphyrYaml {
    /// Construct a provider for `contents`, reporting errors against `origin`.
    #[must_use]
    pub fn string<O, S>(origin: O, contents: S) -> Self
    where
        O: Into<String>,
        S: Into<String>,
    {
        Self {
            origin: origin.into(),
            contents: contents.into(),
        }
    }

    fn parse_value(&self) -> Result<FigmentValue, serde_saphyr::Error> {
        serde_saphyr::from_str_with_options(
            &self.contents,
            Options {
                strict_booleans: true,
                ..Options::default()
            },
        )
    }
}

impl Provider for SaphyrYaml {
    fn metadata(&self) -> Metadata {
        Metadata::named(format!("YAML fragment {}", self.origin))
    }

    fn data(&self) -> Result<BTreeMap<Profile, Dict>, figment::Error> {
        let value = self.parse_value().map_err(|err| {
            figment::Error::from(Kind::Message(format!(
                "failed to parse {}: {err}",
                self.origin
            )))
        })?;
        let actual = value.to_actual();
        let dict = value
            .into_dict()
            .ok_or_else(|| figment::Error::from(Kind::InvalidType(actual, "map".into())))?;
        Ok(Profile::Default.collect(dict))
    }
}
