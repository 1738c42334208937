//! Shared helpers for file module tests along with focused submodules.

use anyhow::{Result, anyhow};

use crate::ConfigResult;

pub(super) mod yaml_tests;

/// Convert a crate result into an `anyhow` result for test assertions.
pub(super) fn to_anyhow<T>(result: ConfigResult<T>) -> Result<T> {
    result.map_err(|err| anyhow!(err.to_string()))
}
