//! Command-line overlay onto a loaded [`Configuration`](crate::model::Configuration).
//!
//! The command line is reached through the [`OptionSource`] trait;
//! [`ArgMatchesSource`] implements it over `clap`. Which options map onto
//! which configuration fields is fixed at compile time by
//! [`OPTION_BINDINGS`], and [`CliOverlay`] applies that table with the
//! override-if-empty and exclusion rules.

mod bindings;
mod overlay;
mod source;

pub use bindings::{OPTION_BINDINGS, OptionBinding, OverridePolicy, binding};
pub use overlay::CliOverlay;
pub use source::{ArgMatchesSource, OptionSource};
