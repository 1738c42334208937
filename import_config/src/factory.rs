//! Entry points that turn files, directories or text into a [`Configuration`].

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use crate::file::{Format, MergedDocument, ParserRegistry, read_to_string};
use crate::model::{Configuration, from_tree};
use crate::overlay::{INLINE_PARAMS_ORIGIN, apply_params, decode_params, read_params_file};
use crate::scan::DirectoryScanner;
use crate::{ConfigError, ConfigResult};

/// Format and optional params overlays for one load.
///
/// # Examples
///
/// ```
/// use import_config::{LoadRequest, file::Format};
///
/// let request = LoadRequest::new(Format::Json)
///     .with_params(r#"{"params": {"copy-images": true}}"#)
///     .with_params_file("etc/params.yml");
/// assert_eq!(request.format, Format::Json);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadRequest {
    /// Format of the configuration and of inline params.
    pub format: Format,
    /// Inline params document, in `format`.
    pub params: Option<String>,
    /// Params file; its format comes from its extension.
    pub params_file: Option<PathBuf>,
}

impl LoadRequest {
    /// A request for `format` without overlays.
    #[must_use]
    pub fn new(format: Format) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Add an inline params document.
    #[must_use]
    pub fn with_params(mut self, params: impl Into<String>) -> Self {
        self.params = Some(params.into());
        self
    }

    /// Add a params file.
    #[must_use]
    pub fn with_params_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.params_file = Some(path.into());
        self
    }

    const fn has_overlays(&self) -> bool {
        self.params.is_some() || self.params_file.is_some()
    }
}

/// Loads linked configurations.
///
/// # Examples
///
/// ```rust,no_run
/// use import_config::{ConfigurationFactory, LoadRequest, file::Format};
///
/// # fn run() -> import_config::ConfigResult<()> {
/// let factory = ConfigurationFactory::new()?;
/// let config = factory.from_directories(
///     &["etc/conf.d", "app/etc/conf.d"],
///     &LoadRequest::new(Format::Json),
/// )?;
/// println!("{}", config.database()?.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigurationFactory {
    registry: ParserRegistry,
}

impl ConfigurationFactory {
    /// A factory with the default scanner and every supported format.
    ///
    /// # Errors
    ///
    /// Returns an error if the default scanner cannot be built.
    pub fn new() -> ConfigResult<Self> {
        Ok(Self::with_registry(ParserRegistry::new(
            DirectoryScanner::builder().build()?,
        )))
    }

    /// A factory using `registry` to find fragment parsers.
    #[must_use]
    pub const fn with_registry(registry: ParserRegistry) -> Self {
        Self { registry }
    }

    /// Load one configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSource`] if the file cannot be read or
    /// is empty, and any error from [`Self::from_str`].
    pub fn from_file(&self, path: &Path, request: &LoadRequest) -> ConfigResult<Configuration> {
        let text = read_to_string(path)?;
        if text.trim().is_empty() {
            return Err(ConfigError::missing_source(
                path,
                std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "can't load configuration file",
                ),
            ));
        }
        info!(path = %path.display(), "loading configuration file");
        load(&path.display().to_string(), &text, request)
    }

    /// Merge every fragment in `directories` and load the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] if the request's format is
    /// not registered, and any error from scanning, merging or decoding.
    pub fn from_directories<P>(
        &self,
        directories: &[P],
        request: &LoadRequest,
    ) -> ConfigResult<Configuration>
    where
        P: AsRef<Path>,
    {
        let text = self
            .registry
            .parser_for(request.format)?
            .parse(directories)?;
        load("merged configuration", &text, request)
    }

    /// Merge every fragment in `directories` without decoding it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] if `format` is not
    /// registered, and any error from scanning or merging.
    pub fn merge_directories<P>(
        &self,
        directories: &[P],
        format: Format,
    ) -> ConfigResult<MergedDocument>
    where
        P: AsRef<Path>,
    {
        self.registry
            .parser_for(format)?
            .merge_directories(directories)
    }

    /// Load a configuration document held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Decode`] if the text or an overlay fails to
    /// decode, and [`ConfigError::MissingSource`] if a params file exists but
    /// cannot be read.
    pub fn from_str(&self, text: &str, request: &LoadRequest) -> ConfigResult<Configuration> {
        load("configuration text", text, request)
    }
}

fn load(origin: &str, text: &str, request: &LoadRequest) -> ConfigResult<Configuration> {
    let tree = request.format.decode(origin, text)?;
    let mut config: Configuration = from_tree(origin, tree)?;
    config.link();
    if !request.has_overlays() {
        return Ok(config);
    }

    let overlays = collect_overlays(request)?;
    debug!(origin, overlays = overlays.len(), "overlaying params");
    apply_params(&config, &overlays)
}

fn collect_overlays(request: &LoadRequest) -> ConfigResult<Vec<Value>> {
    let mut overlays = Vec::with_capacity(2);
    if let Some(params) = request.params.as_deref() {
        overlays.push(decode_params(request.format, INLINE_PARAMS_ORIGIN, params)?);
    }
    if let Some(path) = request.params_file.as_deref()
        && let Some(params) = read_params_file(path)?
    {
        overlays.push(params);
    }
    Ok(overlays)
}
