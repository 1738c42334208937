//! Primary error enum for configuration loading flows.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Coarse classification of a [`ConfigError`].
///
/// Every failure raised while loading or querying a configuration falls into
/// one of these kinds. None of them are retryable: a configuration that fails
/// to load is a fatal startup error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A required file or directory entry could not be read.
    MissingSource,
    /// Fragment or overlay content failed to parse in its declared format.
    DecodeFailure,
    /// A query for an entity by id, type or key found nothing.
    LookupFailure,
    /// A boolean-like value could not be mapped to `true` or `false`.
    TypeCoercionFailure,
}

/// Errors that can occur while loading or querying configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A configuration file or directory could not be read.
    #[error("Can't load configuration source '{path}': {source}")]
    MissingSource {
        /// Path that could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Content could not be decoded in its declared format.
    #[error("Can't decode configuration from {origin}: {message}")]
    Decode {
        /// File path or description of the in-memory source.
        origin: String,
        /// Parser diagnostic.
        message: String,
    },

    /// A merged tree could not be written in the target format.
    #[error("Can't encode configuration as {format}: {message}")]
    Encode {
        /// Name of the target format.
        format: &'static str,
        /// Serializer diagnostic.
        message: String,
    },

    /// No parser is registered for the requested format.
    #[error("Can't find a configuration parser mapping for format \"{format}\"")]
    UnsupportedFormat {
        /// The format name or file extension that was requested.
        format: String,
    },

    /// The database with the requested id is missing or has an invalid type.
    #[error("Database with ID {id} can not be found or has an invalid type")]
    DatabaseNotFound {
        /// Requested database id.
        id: String,
    },

    /// No database configuration exists at all.
    #[error("There is no database configuration available")]
    NoDatabase,

    /// No finder mapping exists for the requested key.
    #[error("Can't load mapping for finder with key \"{key}\"")]
    FinderMappingNotFound {
        /// Requested finder key.
        key: String,
    },

    /// A value could not be converted to a boolean.
    #[error("Can't convert {value} to boolean")]
    BooleanCoercion {
        /// The rejected value.
        value: String,
    },
}

impl ConfigError {
    /// Returns the taxonomy bucket this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingSource { .. } => ErrorKind::MissingSource,
            Self::Decode { .. } | Self::Encode { .. } => ErrorKind::DecodeFailure,
            Self::UnsupportedFormat { .. }
            | Self::DatabaseNotFound { .. }
            | Self::NoDatabase
            | Self::FinderMappingNotFound { .. } => ErrorKind::LookupFailure,
            Self::BooleanCoercion { .. } => ErrorKind::TypeCoercionFailure,
        }
    }
}
