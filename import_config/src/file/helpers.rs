//! Filesystem reads for configuration fragments.

use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};

use crate::{ConfigError, ConfigResult};

/// Return the parent directory of `path`, falling back to `"."` when the path
/// has no parent or the parent is empty.
fn parent_or_dot(path: &Path) -> &Path {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Read `path` to a string through a `cap-std` handle on its parent
/// directory.
///
/// # Errors
///
/// Returns [`ConfigError::MissingSource`] if the parent directory cannot be
/// opened or the file cannot be read, and [`ConfigError::Decode`] if its
/// contents are not UTF-8.
pub(crate) fn read_to_string(path: &Path) -> ConfigResult<String> {
    let file_name = path.file_name().ok_or_else(|| {
        ConfigError::missing_source(
            path,
            std::io::Error::other("cannot determine file name for configuration path"),
        )
    })?;
    let dir = Dir::open_ambient_dir(parent_or_dot(path), ambient_authority())
        .map_err(|err| ConfigError::missing_source(path, err))?;
    dir.read_to_string(file_name).map_err(|err| {
        if err.kind() == std::io::ErrorKind::InvalidData {
            ConfigError::decode(path.display(), err)
        } else {
            ConfigError::missing_source(path, err)
        }
    })
}

/// Read `path` if it exists, returning `None` for a missing file.
///
/// # Errors
///
/// Returns [`ConfigError::MissingSource`] for any failure other than the
/// file not existing.
pub(crate) fn read_optional(path: &Path) -> ConfigResult<Option<String>> {
    match read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) => match err.as_ref() {
            ConfigError::MissingSource { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Ok(None)
            }
            _ => Err(err),
        },
    }
}
