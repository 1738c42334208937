//! Unit tests for the entity graph, grouped by concern.

use anyhow::{Result, anyhow};
use serde_json::Value;

use super::Configuration;

mod coerce_tests;

/// Decode `value` into a linked configuration.
fn linked(value: Value) -> Result<Configuration> {
    let mut config: Configuration =
        serde_json::from_value(value).map_err(|err| anyhow!("decode configuration: {err}"))?;
    config.link();
    Ok(config)
}
