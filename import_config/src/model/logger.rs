//! Logger channels and their processors, handlers and mailers.

use serde::{Deserialize, Serialize};

use super::coerce;
use super::params::{Params, ParamsAware};

/// Factory id used for loggers that do not name one.
pub const DEFAULT_LOGGER_FACTORY: &str = "import.logger.factory";

/// A logging channel.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Logger {
    /// Logger name; filled from its key when omitted.
    pub name: String,
    /// Channel name.
    pub channel_name: Option<String>,
    /// Logger type.
    #[serde(rename = "type")]
    pub logger_type: Option<String>,
    /// Factory service id.
    pub id: String,
    /// Record processors.
    #[serde(deserialize_with = "coerce::or_default")]
    pub processors: Vec<Processor>,
    /// Record handlers.
    #[serde(deserialize_with = "coerce::or_default")]
    pub handlers: Vec<Handler>,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            name: String::new(),
            channel_name: None,
            logger_type: None,
            id: DEFAULT_LOGGER_FACTORY.to_owned(),
            processors: Vec::new(),
            handlers: Vec::new(),
        }
    }
}

/// A log record processor.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Processor {
    /// Service id.
    pub id: String,
    /// Processor parameters.
    #[serde(deserialize_with = "coerce::or_default")]
    pub params: Params,
}

impl ParamsAware for Processor {
    fn params(&self) -> &Params {
        &self.params
    }
}

/// A log record handler.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Handler {
    /// Service id.
    pub id: String,
    /// Formatter applied to records.
    pub formatter: Option<Formatter>,
    /// Mailer used by mail handlers.
    pub swift_mailer: Option<SwiftMailer>,
    /// Handler parameters.
    #[serde(deserialize_with = "coerce::or_default")]
    pub params: Params,
}

impl ParamsAware for Handler {
    fn params(&self) -> &Params {
        &self.params
    }
}

/// A log record formatter.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Formatter {
    /// Service id.
    pub id: String,
    /// Formatter parameters.
    #[serde(deserialize_with = "coerce::or_default")]
    pub params: Params,
}

impl ParamsAware for Formatter {
    fn params(&self) -> &Params {
        &self.params
    }
}

/// Mailer settings for handlers and plugins.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SwiftMailer {
    /// Service id.
    pub id: String,
    /// Mail transport.
    pub transport: Option<Transport>,
    /// Mailer parameters.
    #[serde(deserialize_with = "coerce::or_default")]
    pub params: Params,
}

impl ParamsAware for SwiftMailer {
    fn params(&self) -> &Params {
        &self.params
    }
}

/// Mail transport settings.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Transport {
    /// Service id.
    pub id: String,
    /// Transport parameters.
    #[serde(deserialize_with = "coerce::or_default")]
    pub params: Params,
}

impl ParamsAware for Transport {
    fn params(&self) -> &Params {
        &self.params
    }
}
