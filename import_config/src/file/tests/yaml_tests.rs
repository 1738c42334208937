//! YAML provider coverage.
//! Ensures `serde-saphyr` integration preserves YAML 1.2 semantics and reports
//! malformed input clearly.

use anyhow::{Result, anyhow, ensure};
use figment::Figment;
use rstest::rstest;
use serde_json::Value;

use crate::file::SaphyrYaml;

#[rstest]
fn yaml_yes_remains_a_string() -> Result<()> {
    let figment = Figment::from(SaphyrYaml::string("system.yml", "system-name: yes"));
    let name = figment
        .extract_inner::<String>("system-name")
        .map_err(|err| anyhow!(err.to_string()))?;
    ensure!(name == "yes", "expected string literal \"yes\"");
    Ok(())
}

#[rstest]
fn yaml_nested_sequences_survive() -> Result<()> {
    let yaml = "databases:\n  - id: db1\n    type: mysql\n  - id: db2\n";
    let figment = Figment::from(SaphyrYaml::string("db.yaml", yaml));
    let value = figment
        .extract::<Value>()
        .map_err(|err| anyhow!(err.to_string()))?;
    ensure!(
        value["databases"][1]["id"] == "db2",
        "expected second database id, got {value}"
    );
    Ok(())
}

#[rstest]
#[case("system-name: first\nsystem-name: second", "duplicate mapping key")]
#[case("databases: [", "failed to parse broken.yaml")]
#[case("- just\n- a list\n", "map")]
fn yaml_provider_surfaces_errors(#[case] contents: &str, #[case] expected: &str) -> Result<()> {
    let figment = Figment::from(SaphyrYaml::string("broken.yaml", contents));
    let Err(err) = figment.extract::<Value>() else {
        return Err(anyhow!("expected YAML parsing failure for {contents:?}"));
    };
    ensure!(
        err.to_string().contains(expected),
        "expected error to mention '{expected}', got: {err}"
    );
    Ok(())
}
