//! The compile-time table binding option names to configuration fields.

use crate::ConfigResult;
use crate::model::{Configuration, map_boolean};

/// How a command-line value competes with the value loaded from files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverridePolicy {
    /// A present command-line value always wins.
    Always,
    /// The file value wins unless it is empty or the option was given
    /// explicitly.
    IfEmpty,
}

/// One option name with accessors for the field it sets.
#[derive(Debug, Clone, Copy)]
pub struct OptionBinding {
    /// Option name, equal to the field's configuration key.
    pub name: &'static str,
    /// Current field value as text; `None` when the field is empty.
    pub get: fn(&Configuration) -> Option<String>,
    /// Store a command-line value into the field.
    pub set: fn(&mut Configuration, &str) -> ConfigResult<()>,
    /// Default override behaviour for the option.
    pub policy: OverridePolicy,
}

macro_rules! optional_text {
    ($name:literal, $field:ident) => {
        OptionBinding {
            name: $name,
            get: |config| config.$field.clone().filter(|text| !text.is_empty()),
            set: |config, value| {
                config.$field = Some(value.to_owned());
                Ok(())
            },
            policy: OverridePolicy::Always,
        }
    };
}

macro_rules! text {
    ($name:literal, $field:ident) => {
        OptionBinding {
            name: $name,
            get: |config| Some(config.$field.clone()).filter(|text| !text.is_empty()),
            set: |config, value| {
                config.$field = value.to_owned();
                Ok(())
            },
            policy: OverridePolicy::IfEmpty,
        }
    };
}

macro_rules! flag {
    ($name:literal, $field:ident) => {
        OptionBinding {
            name: $name,
            get: |config| Some(config.$field.to_string()),
            set: |config, value| {
                config.$field = map_boolean(value)?;
                Ok(())
            },
            policy: OverridePolicy::Always,
        }
    };
}

/// Every configuration field settable from the command line.
///
/// Options whose command-line definition carries a default value use
/// [`OverridePolicy::IfEmpty`] so the default never masks a file value.
pub const OPTION_BINDINGS: &[OptionBinding] = &[
    optional_text!("serial", serial),
    optional_text!("system-name", system_name),
    optional_text!("installation-dir", installation_dir),
    optional_text!("source-dir", source_dir),
    optional_text!("target-dir", target_dir),
    text!("magento-edition", magento_edition),
    text!("magento-version", magento_version),
    flag!("archive-artefacts", archive_artefacts),
    optional_text!("archive-dir", archive_dir),
    flag!("debug-mode", debug_mode),
    text!("log-level", log_level),
    optional_text!("use-db-id", use_db_id),
    text!("pid-filename", pid_filename),
    flag!("single-transaction", single_transaction),
    flag!("cache-enabled", cache_enabled),
    optional_text!("move-files-prefix", move_files_prefix),
];

/// The binding for option `name`.
#[must_use]
pub fn binding(name: &str) -> Option<&'static OptionBinding> {
    OPTION_BINDINGS.iter().find(|entry| entry.name == name)
}
