//! Shared helpers for working with `figment::Jail` in tests.
//!
//! A jail changes into a fresh temporary directory for the duration of the
//! closure, which lets scanner and factory tests use relative directory names
//! exactly as an operator would on the command line.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// The jail is torn down once the closure completes, even when it fails.
/// Failures are converted into `anyhow::Error` values.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or the closure fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        let value = f(jail).map_err(|err| figment::Error::from(err.to_string()))?;
        output = Some(value);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Writes each `(relative path, contents)` pair into the jail, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns an error if a directory or file cannot be created.
pub fn write_fragments(jail: &mut figment::Jail, files: &[(&str, &str)]) -> Result<()> {
    for (path, contents) in files {
        if let Some(parent) = std::path::Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            jail.create_dir(parent)
                .map_err(|err| anyhow!("create {}: {err}", parent.display()))?;
        }
        jail.create_file(path, contents)
            .map_err(|err| anyhow!("write {path}: {err}"))?;
    }
    Ok(())
}
