//! Access to command-line options by name.

use clap::parser::{MatchesError, ValueSource};
use clap::{ArgMatches, Command};

/// Named access to the options of a parsed command line.
pub trait OptionSource {
    /// Whether the command line defines an option called `name`.
    fn is_recognized(&self, name: &str) -> bool;

    /// Whether `name` carries a value, either given or defaulted.
    fn has_option(&self, name: &str) -> bool;

    /// The value of `name` rendered as text.
    fn option(&self, name: &str) -> Option<String>;

    /// Whether `name` was supplied by the user rather than defaulted.
    fn was_specified(&self, name: &str) -> bool;
}

/// [`OptionSource`] over a `clap` command and the matches it produced.
///
/// Options are looked up by argument id. String values are returned as is;
/// boolean flags render as `true` or `false`.
///
/// # Examples
///
/// ```
/// use clap::{Arg, Command};
/// use import_config::cli::{ArgMatchesSource, OptionSource};
///
/// let command = Command::new("import")
///     .arg(Arg::new("log-level").long("log-level").default_value("info"));
/// let matches = command.clone().get_matches_from(["import"]);
/// let source = ArgMatchesSource::new(&command, &matches);
///
/// assert_eq!(source.option("log-level").as_deref(), Some("info"));
/// assert!(!source.was_specified("log-level"));
/// assert!(!source.is_recognized("serial"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ArgMatchesSource<'a> {
    command: &'a Command,
    matches: &'a ArgMatches,
}

impl<'a> ArgMatchesSource<'a> {
    /// Wrap `matches`, which must have been produced by `command`.
    #[must_use]
    pub const fn new(command: &'a Command, matches: &'a ArgMatches) -> Self {
        Self { command, matches }
    }
}

impl OptionSource for ArgMatchesSource<'_> {
    fn is_recognized(&self, name: &str) -> bool {
        self.command
            .get_arguments()
            .any(|arg| arg.get_id().as_str() == name)
    }

    fn has_option(&self, name: &str) -> bool {
        // `ArgMatches` panics on unknown ids in debug builds.
        self.is_recognized(name) && self.matches.contains_id(name)
    }

    fn option(&self, name: &str) -> Option<String> {
        if !self.has_option(name) {
            return None;
        }
        match self.matches.try_get_one::<String>(name) {
            Ok(value) => value.cloned(),
            Err(MatchesError::Downcast { .. }) => self
                .matches
                .try_get_one::<bool>(name)
                .ok()
                .flatten()
                .map(ToString::to_string),
            Err(_) => None,
        }
    }

    fn was_specified(&self, name: &str) -> bool {
        self.is_recognized(name)
            && matches!(
                self.matches.value_source(name),
                Some(ValueSource::CommandLine | ValueSource::EnvVariable)
            )
    }
}
