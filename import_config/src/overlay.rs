//! Parameter overlays merged into a decoded configuration.
//!
//! Overlays work on generic trees rather than typed values: the base
//! configuration is encoded back into a tree, so only keys the schema knows
//! survive, the overlay's `params` document is merged in with
//! [`deep_merge`], and the result is decoded again. Nested keys can therefore
//! be added or replaced without any per-field merge logic.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::file::{Format, read_optional};
use crate::merge::deep_merge;
use crate::model::{Configuration, ParamsDocument, from_tree};
use crate::{ConfigResult, ConfigResultExt};

/// Origin reported for errors in inline parameter text.
pub const INLINE_PARAMS_ORIGIN: &str = "inline params";

/// Merge `params` into `base`, returning a new tree.
///
/// Neither argument is modified.
#[must_use]
pub fn overlay(base: &Value, params: &Value) -> Value {
    deep_merge(base, [params])
}

/// Decode a params document, keeping only its `params` key.
///
/// # Errors
///
/// Returns [`crate::ConfigError::Decode`] naming `origin` if the text is not
/// valid in `format` or its `params` key has the wrong shape.
pub fn decode_params(format: Format, origin: &str, text: &str) -> ConfigResult<Value> {
    let tree = format.decode(origin, text)?;
    let document: ParamsDocument = serde_json::from_value(tree).decode_failure(origin)?;
    serde_json::to_value(document).encode_failure(format.name())
}

/// Read and decode the params file at `path`, inferring its format from the
/// extension.
///
/// Returns `None` when the file does not exist.
///
/// # Errors
///
/// Returns [`crate::ConfigError::UnsupportedFormat`] for an unknown
/// extension, [`crate::ConfigError::MissingSource`] if the file exists but
/// cannot be read, and [`crate::ConfigError::Decode`] if it fails to parse.
pub fn read_params_file(path: &Path) -> ConfigResult<Option<Value>> {
    let Some(text) = read_optional(path)? else {
        warn!(path = %path.display(), "params file not found; skipping");
        return Ok(None);
    };
    let format = Format::from_path(path)?;
    decode_params(format, &path.display().to_string(), &text).map(Some)
}

/// Encode `config` into a normalised tree.
///
/// # Errors
///
/// Returns [`crate::ConfigError::Encode`] if the configuration cannot be
/// represented as a tree.
pub fn normalise(config: &Configuration) -> ConfigResult<Value> {
    serde_json::to_value(config).encode_failure("configuration tree")
}

/// Merge each params tree into `config` in order and decode the result.
///
/// The returned configuration is linked and keeps the runtime-only state
/// of `config`.
///
/// # Errors
///
/// Returns [`crate::ConfigError::Decode`] if the merged tree no longer
/// matches the schema.
pub fn apply_params<'a, I>(config: &Configuration, overlays: I) -> ConfigResult<Configuration>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut tree = normalise(config)?;
    let mut applied = 0_usize;
    for params in overlays {
        tree = overlay(&tree, params);
        applied += 1;
    }
    let mut merged: Configuration = from_tree("overlaid configuration", tree)?;
    merged.copy_runtime_state(config);
    merged.link();
    debug!(overlays = applied, "applied params overlays");
    Ok(merged)
}
