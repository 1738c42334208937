//! Test helpers shared across crates in the import-config workspace.
//!
//! The helpers build temporary trees of configuration fragments and wrap
//! [`figment::Jail`] so tests can use relative paths without leaking state.

pub mod figment;
pub mod fragments;

pub use fragments::FragmentDir;
