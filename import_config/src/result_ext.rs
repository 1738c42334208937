//! Extensions for mapping errors to `ConfigResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| ConfigError::…(…, e))`
//! patterns when converting parser and serializer failures into the crate's
//! `ConfigResult<T>` alias (`Result<T, Arc<ConfigError>>`).
//!
//! # Examples
//!
//! ```
//! use import_config::{ConfigResult, ConfigResultExt};
//!
//! fn decode(text: &str) -> ConfigResult<serde_json::Value> {
//!     serde_json::from_str(text).decode_failure("inline params")
//! }
//!
//! assert!(decode("{\"params\": {}}").is_ok());
//! assert!(decode("{").is_err());
//! ```

use std::fmt::Display;

use crate::{ConfigError, ConfigResult};

/// Maps any `Result<T, E>` whose error is displayable into a [`ConfigResult`].
pub trait ConfigResultExt<T> {
    /// Convert the error into a [`ConfigError::Decode`] naming `origin`.
    ///
    /// # Errors
    ///
    /// Returns the converted error when the input is `Err`.
    fn decode_failure(self, origin: impl Display) -> ConfigResult<T>;

    /// Convert the error into a [`ConfigError::Encode`] for `format`.
    ///
    /// # Errors
    ///
    /// Returns the converted error when the input is `Err`.
    fn encode_failure(self, format: &'static str) -> ConfigResult<T>;
}

impl<T, E> ConfigResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn decode_failure(self, origin: impl Display) -> ConfigResult<T> {
        self.map_err(|e| ConfigError::decode(origin, e))
    }

    fn encode_failure(self, format: &'static str) -> ConfigResult<T> {
        self.map_err(|e| ConfigError::encode(format, e))
    }
}
