//! Helpers shared by the integration tests.

use std::path::PathBuf;

use import_config::ConfigResult;

/// Root of the layered fixture tree.
pub fn layered() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/layered")
}

/// Fragment directories of the layered fixture, lowest precedence first.
pub fn layered_dirs() -> Vec<PathBuf> {
    let root = layered();
    vec![root.join("vendor/conf.d"), root.join("app/conf.d")]
}

/// Converts a crate result into an `anyhow` result for `?` in tests.
pub fn to_anyhow<T>(result: ConfigResult<T>) -> anyhow::Result<T> {
    result.map_err(|err| anyhow::anyhow!(err.to_string()))
}
