//! End-to-end loading through `ConfigurationFactory`.

mod common;

use anyhow::{Result, anyhow, ensure};
use common::{layered, layered_dirs, to_anyhow};
use import_config::file::Format;
use import_config::model::{Configuration, ParamsAware};
use import_config::{ConfigurationFactory, ErrorKind, LoadRequest};
use rstest::{fixture, rstest};
use serde_json::json;
use test_helpers::FragmentDir;

#[fixture]
fn factory() -> ConfigurationFactory {
    ConfigurationFactory::new().unwrap_or_else(|err| panic!("factory must build: {err}"))
}

#[fixture]
fn catalog(factory: ConfigurationFactory) -> Configuration {
    factory
        .from_directories(&layered_dirs(), &LoadRequest::new(Format::Json))
        .unwrap_or_else(|err| panic!("layered fixture must load: {err}"))
}

#[rstest]
fn later_directories_override_earlier_ones(catalog: Configuration) -> Result<()> {
    ensure!(catalog.system_name.as_deref() == Some("shop"), "trash fragments must be skipped");
    ensure!(catalog.magento_version == "2.3.0");
    ensure!(catalog.debug_mode, "string booleans decode");
    ensure!(catalog.log_level == "info", "omitted fields keep defaults");
    Ok(())
}

#[rstest]
fn database_entries_merge_by_position(catalog: Configuration) -> Result<()> {
    ensure!(catalog.count_databases() == 2);
    let ce = to_anyhow(catalog.database_by_id("ce"))?;
    ensure!(ce.host.as_deref() == Some("db.internal"));
    ensure!(ce.name.as_deref() == Some("magento") && ce.port == Some(3306));
    let chosen = to_anyhow(catalog.database())?;
    ensure!(chosen.id == "staging", "the default database wins: {}", chosen.id);
    Ok(())
}

#[rstest]
fn caches_and_finder_mappings_resolve(catalog: Configuration) -> Result<()> {
    let cache = catalog
        .cache_by_type("cache.configurable")
        .ok_or_else(|| anyhow!("configurable cache missing"))?;
    ensure!(cache.time == Some(1440) && catalog.is_cache_enabled_for(cache));
    let sql = to_anyhow(
        catalog.finder_mapping_by_key("import_product.repository.sql.statement.product"),
    )?;
    ensure!(sql.starts_with("SELECT"));
    let Err(err) = catalog.finder_mapping_by_key("missing") else {
        return Err(anyhow!("unknown finder mapping must fail"));
    };
    ensure!(err.kind() == ErrorKind::LookupFailure);
    Ok(())
}

#[rstest]
fn operation_tree_is_linked(catalog: Configuration) -> Result<()> {
    let names: Vec<_> = catalog
        .subjects()
        .filter_map(|context| context.full_operation_name("/"))
        .collect();
    ensure!(
        names == ["general/catalog_product/add-update", "general/catalog_product/delete"],
        "got {names:?}"
    );
    let bunch = catalog
        .subjects()
        .next()
        .ok_or_else(|| anyhow!("no subjects"))?;
    ensure!(bunch.subject().name() == "bunch");
    ensure!(bunch.subject().prefix() == "product-import");
    ensure!(bunch.source_dir() == Some("var/importexport"));
    ensure!(bunch.subject().observers.len() == 1);
    ensure!(catalog.default_prefixes() == ["product-import"]);
    Ok(())
}

#[rstest]
fn loggers_take_their_map_key_as_name(catalog: Configuration) -> Result<()> {
    let logger = catalog
        .loggers
        .get("system")
        .ok_or_else(|| anyhow!("system logger missing"))?;
    ensure!(logger.name == "system");
    ensure!(logger.channel_name.as_deref() == Some("logger/system"));
    let handler = logger
        .handlers
        .first()
        .ok_or_else(|| anyhow!("stream handler missing"))?;
    ensure!(handler.param("stream") == Some(&json!("php://stderr")));
    Ok(())
}

#[rstest]
fn raw_merge_reports_sources_in_order(factory: ConfigurationFactory) -> Result<()> {
    let merged = to_anyhow(factory.merge_directories(&layered_dirs(), Format::Json))?;
    let names: Vec<_> = merged
        .sources()
        .iter()
        .filter_map(|path| path.file_name())
        .collect();
    ensure!(
        names == ["01-system.json", "catalog_product.json", "databases.json"],
        "got {names:?}"
    );
    Ok(())
}

#[rstest]
fn single_file_loads_without_scanning(factory: ConfigurationFactory) -> Result<()> {
    let path = layered().join("vendor/conf.d/01-system.json");
    let config = to_anyhow(factory.from_file(&path, &LoadRequest::new(Format::Json)))?;
    ensure!(config.system_name.as_deref() == Some("shop"));
    ensure!(to_anyhow(config.database())?.id == "ce");
    Ok(())
}

#[rstest]
#[case::empty("")]
#[case::blank("  \n")]
fn empty_file_is_a_missing_source(
    factory: ConfigurationFactory,
    #[case] contents: &str,
) -> Result<()> {
    let dir = FragmentDir::new()?;
    let path = dir.write("import.json", contents)?;
    let Err(err) = factory.from_file(&path, &LoadRequest::new(Format::Json)) else {
        return Err(anyhow!("empty file must not load"));
    };
    ensure!(err.kind() == ErrorKind::MissingSource);
    Ok(())
}

#[rstest]
fn missing_file_is_a_missing_source(factory: ConfigurationFactory) -> Result<()> {
    let dir = FragmentDir::new()?;
    let Err(err) = factory.from_file(&dir.join("absent.json"), &LoadRequest::new(Format::Json))
    else {
        return Err(anyhow!("absent file must not load"));
    };
    ensure!(err.kind() == ErrorKind::MissingSource);
    ensure!(err.to_string().contains("absent.json"), "got: {err}");
    Ok(())
}

#[rstest]
fn text_loads_in_any_format(factory: ConfigurationFactory) -> Result<()> {
    let yaml = "system-name: shop\ndatabases:\n  - id: only\n";
    let config = to_anyhow(factory.from_str(yaml, &LoadRequest::new(Format::Yaml)))?;
    ensure!(to_anyhow(config.database())?.id == "only");

    let toml = "system-name = \"shop\"\n[[databases]]\nid = \"only\"\n";
    let from_toml = to_anyhow(factory.from_str(toml, &LoadRequest::new(Format::Toml)))?;
    ensure!(from_toml.system_name == config.system_name);
    Ok(())
}

#[rstest]
#[case::root(r#"{"debug-mode": "maybe"}"#)]
#[case::database(r#"{"databases": [{"id": "a", "default": "perhaps"}]}"#)]
fn invalid_boolean_is_a_coercion_failure(
    factory: ConfigurationFactory,
    #[case] text: &str,
) -> Result<()> {
    let Err(err) = factory.from_str(text, &LoadRequest::new(Format::Json)) else {
        return Err(anyhow!("{text} must not load"));
    };
    ensure!(err.kind() == ErrorKind::TypeCoercionFailure, "got: {err}");
    Ok(())
}

#[rstest]
fn null_from_a_later_fragment_restores_defaults(factory: ConfigurationFactory) -> Result<()> {
    let dir = FragmentDir::new()?;
    dir.write(
        "conf.d/01-base.json",
        r#"{"databases": [{"id": "a"}], "params": {"k": 1},
            "operations": {"general": {"catalog_product": {"add-update": {"plugins": [
                {"id": "p", "subjects": [{"id": "s", "file-resolver": {"prefix": "stock"}}]}
            ]}}}}}"#,
    )?;
    dir.write(
        "conf.d/02-reset.json",
        r#"{"databases": null, "params": null,
            "operations": {"general": {"catalog_product": {"add-update": {"plugins": [
                {"subjects": [{"file-resolver": null}]}
            ]}}}}}"#,
    )?;
    let config = to_anyhow(
        factory.from_directories(&[dir.join("conf.d")], &LoadRequest::new(Format::Json)),
    )?;
    ensure!(config.count_databases() == 0);
    ensure!(config.params().is_empty());
    let subject = config
        .subjects()
        .next()
        .ok_or_else(|| anyhow!("subject missing"))?
        .subject();
    ensure!(subject.id == "s");
    ensure!(subject.prefix() == ".*", "resolver reset to defaults");
    Ok(())
}

#[rstest]
fn unknown_database_type_fails_lookup(factory: ConfigurationFactory) -> Result<()> {
    let text = r#"{"databases": [{"id": "mongo", "type": "mongodb"}]}"#;
    let config = to_anyhow(factory.from_str(text, &LoadRequest::new(Format::Json)))?;
    let Err(err) = config.database_by_id("mongo") else {
        return Err(anyhow!("unsupported type must fail"));
    };
    ensure!(err.kind() == ErrorKind::LookupFailure);
    Ok(())
}

#[rstest]
fn yaml_directories_ignore_json_fragments(factory: ConfigurationFactory) -> Result<()> {
    let merged = to_anyhow(factory.merge_directories(&layered_dirs(), Format::Yaml))?;
    ensure!(merged.sources().is_empty());
    ensure!(merged.value() == &json!({}));
    let config = to_anyhow(factory.from_directories(&layered_dirs(), &LoadRequest::new(Format::Yaml)))?;
    ensure!(config == Configuration::default());
    Ok(())
}
