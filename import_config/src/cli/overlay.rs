//! Applies command-line values over a loaded configuration.

use std::collections::BTreeSet;

use tracing::debug;

use super::bindings::{OPTION_BINDINGS, OptionBinding, OverridePolicy};
use super::source::OptionSource;
use crate::ConfigResult;
use crate::model::Configuration;

/// Overlay of command-line options onto a [`Configuration`].
///
/// For each binding whose option the source recognises and that is not
/// excluded, a present value overwrites the field. Options under the
/// override-if-empty policy only overwrite an empty field, unless the user
/// gave them explicitly.
#[derive(Debug)]
pub struct CliOverlay<'a, S: ?Sized> {
    source: &'a S,
    bindings: &'a [OptionBinding],
    override_if_empty: BTreeSet<String>,
    exclude: BTreeSet<String>,
}

impl<'a, S> CliOverlay<'a, S>
where
    S: OptionSource + ?Sized,
{
    /// Overlay `source` using [`OPTION_BINDINGS`].
    #[must_use]
    pub const fn new(source: &'a S) -> Self {
        Self {
            source,
            bindings: OPTION_BINDINGS,
            override_if_empty: BTreeSet::new(),
            exclude: BTreeSet::new(),
        }
    }

    /// Use `bindings` instead of the default table.
    #[must_use]
    pub const fn with_bindings(mut self, bindings: &'a [OptionBinding]) -> Self {
        self.bindings = bindings;
        self
    }

    /// Apply the override-if-empty policy to `names` as well.
    #[must_use]
    pub fn override_if_empty<I, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.override_if_empty
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Never apply the options in `names`.
    #[must_use]
    pub fn exclude<I, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.exclude.extend(names.into_iter().map(Into::into));
        self
    }

    fn policy(&self, binding: &OptionBinding) -> OverridePolicy {
        if self.override_if_empty.contains(binding.name) {
            OverridePolicy::IfEmpty
        } else {
            binding.policy
        }
    }

    /// Write command-line values into `config`.
    ///
    /// Returns the names of the options that were applied, in table order.
    ///
    /// # Errors
    ///
    /// Returns an error when a value cannot be converted to the field's type,
    /// such as a boolean option given `maybe`.
    pub fn apply(&self, config: &mut Configuration) -> ConfigResult<Vec<&'static str>> {
        let mut applied = Vec::new();
        for binding in self.bindings {
            let name = binding.name;
            if self.exclude.contains(name) || !self.source.is_recognized(name) {
                continue;
            }
            if !self.source.has_option(name) {
                continue;
            }
            let Some(value) = self.source.option(name) else {
                continue;
            };
            let overwrite = match self.policy(binding) {
                OverridePolicy::Always => true,
                OverridePolicy::IfEmpty => {
                    (binding.get)(config).is_none() || self.source.was_specified(name)
                }
            };
            if overwrite {
                (binding.set)(config, &value)?;
                debug!(option = name, value = %value, "applied command-line option");
                applied.push(name);
            }
        }
        Ok(applied)
    }
}
