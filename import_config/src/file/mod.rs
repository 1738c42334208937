//! Reading, decoding and merging configuration fragment files.

mod format;
mod helpers;
mod parser;
mod yaml;

pub use format::Format;
pub use parser::{FragmentParser, MergedDocument, ParserRegistry};
pub use yaml::SaphyrYaml;

pub(crate) use helpers::{read_optional, read_to_string};

#[cfg(test)]
mod tests;
