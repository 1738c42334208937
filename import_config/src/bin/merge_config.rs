//! `merge-config`: load a layered configuration and print the result.
//!
//! Fragments from `--configuration-dir` directories (or the single file
//! given by `--configuration`) are merged, params overlays are applied and
//! any bound command-line option overrides its field. The resolved
//! configuration is printed in the chosen format; `--raw` prints the merged
//! fragments before decoding instead.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Arg, CommandFactory, FromArgMatches, Parser};
use import_config::cli::{ArgMatchesSource, CliOverlay, OPTION_BINDINGS, OptionBinding};
use import_config::file::Format;
use import_config::model::{DEFAULT_LOG_LEVEL, DEFAULT_MAGENTO_EDITION, DEFAULT_MAGENTO_VERSION};
use import_config::{
    ConfigError, ConfigResultExt, ConfigurationFactory, LoadRequest, is_display_request,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum MergeConfigError {
    #[error(transparent)]
    Config(#[from] Arc<ConfigError>),
    #[error(transparent)]
    Cli(#[from] clap::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Load a layered import configuration and print the resolved result.
#[derive(Debug, Parser)]
#[command(name = "merge-config", version)]
struct Args {
    /// Directory holding configuration fragments; repeat to layer several.
    #[arg(
        long = "configuration-dir",
        value_name = "DIR",
        required_unless_present = "configuration"
    )]
    configuration_dirs: Vec<PathBuf>,

    /// Single configuration file to load instead of fragment directories.
    #[arg(long, value_name = "FILE", conflicts_with = "configuration_dirs")]
    configuration: Option<PathBuf>,

    /// Fragment and output format: json, yaml or toml.
    #[arg(long, default_value = "json")]
    format: String,

    /// Inline params document merged over the configuration.
    #[arg(long, value_name = "DOCUMENT")]
    params: Option<String>,

    /// Params file merged over the configuration; its format follows the
    /// file extension.
    #[arg(long, value_name = "FILE")]
    params_file: Option<PathBuf>,

    /// Print the merged fragments without decoding them.
    #[arg(long, requires = "configuration_dirs")]
    raw: bool,
}

fn default_value(name: &str) -> Option<&'static str> {
    match name {
        "magento-edition" => Some(DEFAULT_MAGENTO_EDITION),
        "magento-version" => Some(DEFAULT_MAGENTO_VERSION),
        "log-level" => Some(DEFAULT_LOG_LEVEL),
        _ => None,
    }
}

fn option_arg(binding: &OptionBinding) -> Arg {
    let arg = Arg::new(binding.name)
        .long(binding.name)
        .value_name("VALUE")
        .help(format!("Override `{}` from the configuration", binding.name));
    match default_value(binding.name) {
        Some(default) => arg.default_value(default),
        None => arg,
    }
}

fn command() -> clap::Command {
    Args::command().args(OPTION_BINDINGS.iter().map(option_arg))
}

fn main() -> Result<(), MergeConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    run()
}

fn run() -> Result<(), MergeConfigError> {
    let command = command();
    let matches = match command.clone().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            if is_display_request(&err) {
                err.exit();
            }
            return Err(err.into());
        }
    };
    let args = Args::from_arg_matches(&matches)?;
    let format = Format::from_name(&args.format)?;
    let factory = ConfigurationFactory::new()?;

    if args.raw {
        let merged = factory.merge_directories(&args.configuration_dirs, format)?;
        info!(sources = merged.sources().len(), "merged fragments");
        return write_output(&merged.to_text()?);
    }

    let mut request = LoadRequest::new(format);
    request.params = args.params;
    request.params_file = args.params_file;
    let mut config = match args.configuration.as_deref() {
        Some(path) => factory.from_file(path, &request)?,
        None => factory.from_directories(&args.configuration_dirs, &request)?,
    };

    let source = ArgMatchesSource::new(&command, &matches);
    let applied = CliOverlay::new(&source).apply(&mut config)?;
    info!(?applied, "applied command-line options");

    let tree = serde_json::to_value(&config).encode_failure(format.name())?;
    write_output(&format.encode(&tree)?)
}

fn write_output(text: &str) -> Result<(), MergeConfigError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", text.trim_end())?;
    Ok(())
}
