//! Helpers for classifying and routing external errors.

use clap::{Error as ClapError, error::ErrorKind};

/// Returns `true` when a [`clap::Error`] corresponds to `--help` or
/// `--version`.
///
/// Entry points that call `try_parse()` use this to delegate to
/// [`clap::Error::exit`] and keep the zero exit status for display requests.
#[must_use]
pub fn is_display_request(err: &ClapError) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}
