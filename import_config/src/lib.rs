//! Loader for the layered configuration of a data-import tool.
//!
//! Configuration lives in fragment files spread over several directories.
//! Loading scans the directories ([`scan`]), decodes each fragment in the
//! chosen format and deep-merges them in order ([`file`], [`merge`]), folds
//! optional params documents over the result ([`overlay`]) and decodes it
//! into the typed entity graph rooted at [`model::Configuration`]. Finally
//! command-line options may override individual fields ([`cli`]).
//!
//! ```rust,no_run
//! use import_config::{ConfigurationFactory, LoadRequest, file::Format};
//!
//! # fn main() -> Result<(), std::sync::Arc<import_config::ConfigError>> {
//! let factory = ConfigurationFactory::new()?;
//! let config = factory.from_directories(
//!     &["vendor/app/etc/conf.d", "app/etc/conf.d"],
//!     &LoadRequest::new(Format::Json).with_params_file("app/etc/params.json"),
//! )?;
//! println!("{}", config.database()?.id);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

pub mod cli;
mod error;
mod factory;
pub mod file;
pub mod merge;
pub mod model;
pub mod overlay;
mod result_ext;
pub mod scan;

pub use error::{ConfigError, ErrorKind, is_display_request};
pub use factory::{ConfigurationFactory, LoadRequest};
pub use result_ext::ConfigResultExt;

/// Result type used throughout the crate.
///
/// Errors are shared behind an [`Arc`] so they can be cloned cheaply while
/// keeping the source chain intact.
pub type ConfigResult<T> = Result<T, Arc<ConfigError>>;
