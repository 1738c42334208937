//! Boolean coercion and list-or-mapping decoding.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use serde_json::json;

use crate::ErrorKind;
use crate::model::{
    Configuration, ImportAdapter, Operation, Plugin, Subject, from_tree, map_boolean,
};

#[rstest]
#[case("true", true)]
#[case("TRUE", true)]
#[case("1", true)]
#[case("on", true)]
#[case("false", false)]
#[case("0", false)]
#[case("Off", false)]
fn maps_boolean_strings(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(map_boolean(input).ok(), Some(expected));
}

#[rstest]
#[case("yes")]
#[case("")]
#[case("2")]
fn rejects_other_strings(#[case] input: &str) {
    let kind = map_boolean(input).err().map(|err| err.kind());
    assert_eq!(kind, Some(ErrorKind::TypeCoercionFailure));
}

#[rstest]
#[case(json!(true), true)]
#[case(json!("on"), true)]
#[case(json!(1), true)]
#[case(json!("0"), false)]
fn boolean_fields_accept_strings_and_numbers(
    #[case] raw: serde_json::Value,
    #[case] expected: bool,
) -> Result<()> {
    let config: Configuration = serde_json::from_value(json!({"debug-mode": raw}))?;
    ensure!(config.debug_mode == expected, "debug-mode decoded to {}", config.debug_mode);
    Ok(())
}

#[rstest]
#[case::text(json!({"strict-mode": "maybe"}), "maybe")]
#[case::number(json!({"debug-mode": 2}), "2")]
#[case::nested(json!({"caches": [{"type": "static", "enabled": "sometimes"}]}), "sometimes")]
fn invalid_boolean_field_is_a_coercion_failure(
    #[case] tree: serde_json::Value,
    #[case] value: &str,
) -> Result<()> {
    let Err(err) = from_tree::<Configuration>("fixture", tree) else {
        return Err(anyhow!("`{value}` must not decode as a boolean"));
    };
    ensure!(err.kind() == ErrorKind::TypeCoercionFailure, "got: {err}");
    ensure!(
        err.to_string() == format!("Can't convert {value} to boolean"),
        "got: {err}"
    );
    Ok(())
}

#[rstest]
fn other_decode_errors_name_their_origin() -> Result<()> {
    let Err(err) = from_tree::<Configuration>("fixture", json!({"databases": "none"})) else {
        return Err(anyhow!("a string is not a database list"));
    };
    ensure!(err.kind() == ErrorKind::DecodeFailure);
    ensure!(err.to_string().contains("fixture"), "got: {err}");
    Ok(())
}

#[rstest]
#[case::databases(json!({"databases": null}))]
#[case::params(json!({"params": null}))]
#[case::caches(json!({"caches": null, "loggers": null, "operations": null}))]
#[case::finder_mappings(json!({"finder-mappings": null, "image-types": null}))]
fn null_root_collections_decode_empty(#[case] tree: serde_json::Value) -> Result<()> {
    let config: Configuration = serde_json::from_value(tree)?;
    ensure!(config == Configuration::default(), "decoded to {config:?}");
    Ok(())
}

#[rstest]
fn null_sub_objects_take_their_defaults() -> Result<()> {
    let subject: Subject = serde_json::from_value(json!({
        "id": "s",
        "file-resolver": null,
        "import-adapter": null,
        "export-adapter": {"serializer": null},
        "filesystem-adapter": {"adapter": null},
        "date-converter": null,
        "params": null
    }))?;
    let expected = Subject {
        id: "s".to_owned(),
        ..Subject::default()
    };
    ensure!(subject == expected, "decoded to {subject:?}");

    let plugin: Plugin = serde_json::from_value(json!({
        "id": "p",
        "import-adapter": null,
        "params": null
    }))?;
    ensure!(plugin.import_adapter == ImportAdapter::default());
    ensure!(plugin.params.is_empty());
    Ok(())
}

#[rstest]
fn plugins_accept_a_mapping_in_key_order() -> Result<()> {
    let operation: Operation = serde_json::from_value(json!({
        "plugins": {
            "b-second": {"id": "import.plugin.subject"},
            "a-first": {"id": "import.plugin.cache.warmer"}
        }
    }))?;
    let ids: Vec<&str> = operation.plugins.iter().map(|p| p.id.as_str()).collect();
    ensure!(
        ids == ["import.plugin.cache.warmer", "import.plugin.subject"],
        "got {ids:?}"
    );
    Ok(())
}

#[rstest]
fn null_collection_decodes_empty() -> Result<()> {
    let operation: Operation = serde_json::from_value(json!({"plugins": null}))?;
    ensure!(operation.plugins.is_empty());
    Ok(())
}
