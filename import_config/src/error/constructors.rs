//! Constructors for `ConfigError` values shared across the crate.

use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;

use camino::Utf8PathBuf;

use super::ConfigError;

/// Convert a filesystem path to UTF-8, falling back to a lossy conversion.
pub(crate) fn utf8_path(path: &Path) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(path.to_path_buf())
        .unwrap_or_else(|p| Utf8PathBuf::from(p.to_string_lossy().into_owned()))
}

impl ConfigError {
    /// Construct a [`ConfigError::MissingSource`] for `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use import_config::{ConfigError, ErrorKind};
    /// use std::path::Path;
    ///
    /// let err = ConfigError::missing_source(
    ///     Path::new("conf.d/base.json"),
    ///     std::io::Error::from(std::io::ErrorKind::NotFound),
    /// );
    /// assert_eq!(err.kind(), ErrorKind::MissingSource);
    /// ```
    #[must_use]
    pub fn missing_source(path: &Path, source: std::io::Error) -> Arc<Self> {
        Arc::new(Self::MissingSource {
            path: utf8_path(path),
            source,
        })
    }

    /// Construct a [`ConfigError::Decode`] naming `origin`.
    #[must_use]
    pub fn decode(origin: impl Display, message: impl Display) -> Arc<Self> {
        Arc::new(Self::Decode {
            origin: origin.to_string(),
            message: message.to_string(),
        })
    }

    /// Construct a [`ConfigError::Encode`] for the named format.
    #[must_use]
    pub fn encode(format: &'static str, message: impl Display) -> Arc<Self> {
        Arc::new(Self::Encode {
            format,
            message: message.to_string(),
        })
    }

    /// Construct a [`ConfigError::UnsupportedFormat`].
    #[must_use]
    pub fn unsupported_format(format: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::UnsupportedFormat {
            format: format.into(),
        })
    }

    /// Construct a [`ConfigError::BooleanCoercion`].
    #[must_use]
    pub fn boolean_coercion(value: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::BooleanCoercion {
            value: value.into(),
        })
    }
}
