//! Run configuration and command-line parsing.
//!
//! Every tinytest binary accepts the same arguments:
//!
//! ```bash
//! my_tests                       # errors only
//! my_tests --log_level=testnames # trace Enter/Leave for every case
//! my_tests --log_level=all       # also trace passing checks
//! TINYTEST_LOG_LEVEL=message my_tests
//! ```

use std::ffi::OsString;
use std::fmt;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};

use crate::error::UsageError;

/// Environment variable consulted when `--log_level` is not given.
pub const LOG_LEVEL_ENV: &str = "TINYTEST_LOG_LEVEL";

/// Which trace categories are printed.
///
/// Levels are ordered: each one prints everything the previous one does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, ValueEnum)]
pub enum Verbosity {
    /// Only failed checks
    #[default]
    #[value(name = "error")]
    Error,
    /// Also messages and "doesn't check anything" warnings
    #[value(name = "message")]
    Message,
    /// Also Enter/Leave for every case
    #[value(name = "testnames")]
    TestNames,
    /// Also passing checks and per-case check counts
    #[value(name = "all")]
    All,
}

impl Verbosity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Message => "message",
            Self::TestNames => "testnames",
            Self::All => "all",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command-line arguments of a tinytest binary.
#[derive(Parser, Debug, Clone)]
#[command(about = "Run the test cases registered in this binary")]
pub struct Cli {
    /// Trace verbosity [default: error, or $TINYTEST_LOG_LEVEL]
    ///
    /// Only the `--log_level=<LEVEL>` form is accepted. Repeating the flag
    /// is allowed; the last one wins.
    #[arg(
        long = "log_level",
        value_enum,
        require_equals = true,
        overrides_with = "log_level"
    )]
    pub log_level: Option<Verbosity>,
}

/// Immutable configuration for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    verbosity: Verbosity,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the verbosity.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Whether trace lines of `level` are printed under this configuration.
    pub fn enabled(&self, level: Verbosity) -> bool {
        level <= self.verbosity
    }

    /// Parse a full argument list (program name first).
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::HelpRequested`] for `--help` and
    /// [`UsageError::Invalid`] for anything clap rejects.
    pub fn from_args<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => {
                let env_level = std::env::var(LOG_LEVEL_ENV).ok();
                Ok(Self::from_cli(cli, env_level.as_deref()))
            }
            Err(err) if err.kind() == ErrorKind::DisplayHelp => {
                Err(UsageError::HelpRequested(err.render().to_string()))
            }
            Err(err) => Err(UsageError::Invalid(err)),
        }
    }

    /// Build a configuration from parsed arguments.
    ///
    /// The flag wins over `env_level` (the value of [`LOG_LEVEL_ENV`]). An
    /// unknown `env_level` is logged and ignored.
    pub fn from_cli(cli: Cli, env_level: Option<&str>) -> Self {
        let verbosity = cli
            .log_level
            .or_else(|| env_level.and_then(parse_env_level))
            .unwrap_or_default();
        Self::new().with_verbosity(verbosity)
    }
}

fn parse_env_level(value: &str) -> Option<Verbosity> {
    match <Verbosity as ValueEnum>::from_str(value, false) {
        Ok(level) => Some(level),
        Err(_) => {
            tracing::warn!(value, env = LOG_LEVEL_ENV, "ignoring unknown log level");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, UsageError> {
        let mut full = vec!["tests"];
        full.extend_from_slice(args);
        Config::from_args(full)
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(Verbosity::Error < Verbosity::Message);
        assert!(Verbosity::Message < Verbosity::TestNames);
        assert!(Verbosity::TestNames < Verbosity::All);
    }

    #[test]
    fn test_enabled_gates_by_level() {
        let config = Config::new().with_verbosity(Verbosity::Message);
        assert!(config.enabled(Verbosity::Error));
        assert!(config.enabled(Verbosity::Message));
        assert!(!config.enabled(Verbosity::TestNames));
        assert!(!config.enabled(Verbosity::All));
    }

    #[test]
    fn test_each_log_level_value() {
        // Only meaningful when the env fallback is not set in the test environment.
        if std::env::var_os(LOG_LEVEL_ENV).is_some() {
            return;
        }
        assert_eq!(parse(&[]).unwrap().verbosity(), Verbosity::Error);
        for (arg, level) in [
            ("--log_level=error", Verbosity::Error),
            ("--log_level=message", Verbosity::Message),
            ("--log_level=testnames", Verbosity::TestNames),
            ("--log_level=all", Verbosity::All),
        ] {
            assert_eq!(parse(&[arg]).unwrap().verbosity(), level, "{arg}");
        }
    }

    #[test]
    fn test_last_log_level_wins() {
        let config = parse(&["--log_level=all", "--log_level=message"]).unwrap();
        assert_eq!(config.verbosity(), Verbosity::Message);
    }

    #[test]
    fn test_help_is_a_usage_error() {
        let err = parse(&["--help"]).unwrap_err();
        match err {
            UsageError::HelpRequested(text) => assert!(text.contains("--log_level")),
            other => panic!("expected help, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_argument_rejected() {
        assert!(matches!(
            parse(&["--filter=foo"]),
            Err(UsageError::Invalid(_))
        ));
        assert!(matches!(parse(&["positional"]), Err(UsageError::Invalid(_))));
        assert!(matches!(
            parse(&["--log_level", "message"]),
            Err(UsageError::Invalid(_))
        ));
        assert!(matches!(parse(&["--log_level"]), Err(UsageError::Invalid(_))));
    }

    #[test]
    fn test_unknown_level_rejected() {
        assert!(matches!(
            parse(&["--log_level=verbose"]),
            Err(UsageError::Invalid(_))
        ));
    }

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["tests"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_env_level_used_without_flag() {
        let config = Config::from_cli(cli(&[]), Some("testnames"));
        assert_eq!(config.verbosity(), Verbosity::TestNames);
    }

    #[test]
    fn test_flag_wins_over_env_level() {
        let config = Config::from_cli(cli(&["--log_level=all"]), Some("message"));
        assert_eq!(config.verbosity(), Verbosity::All);
    }

    #[test]
    fn test_unknown_env_level_falls_back_to_default() {
        let config = Config::from_cli(cli(&[]), Some("loud"));
        assert_eq!(config.verbosity(), Verbosity::Error);
        let config = Config::from_cli(cli(&[]), None);
        assert_eq!(config.verbosity(), Verbosity::Error);
    }

    #[test]
    fn test_verbosity_display() {
        assert_eq!(Verbosity::TestNames.to_string(), "testnames");
        assert_eq!(Verbosity::default(), Verbosity::Error);
    }
}
