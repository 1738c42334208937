//! Error types produced by the configuration loader.

mod constructors;
mod helpers;
mod types;

pub(crate) use constructors::utf8_path;
pub use helpers::is_display_request;
pub use types::{ConfigError, ErrorKind};
