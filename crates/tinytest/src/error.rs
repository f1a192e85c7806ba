//! Error types for tinytest.
//!
//! Check failures are not errors: they are reported through the run's
//! counters. These types cover the command line and trace output.

use std::io;

use thiserror::Error;

/// Command-line usage problems detected before any case runs.
#[derive(Debug, Error)]
pub enum UsageError {
    /// `--help` was given. Holds the rendered usage text.
    #[error("{0}")]
    HelpRequested(String),

    /// An unknown argument or an invalid `--log_level` value.
    #[error("{0}")]
    Invalid(#[from] clap::Error),
}

/// Errors that can occur while driving a test binary.
#[derive(Debug, Error)]
pub enum Error {
    /// Command line could not be parsed.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Writing trace or summary output failed.
    #[error("failed to write test output: {0}")]
    Io(#[from] io::Error),
}

/// Result type for tinytest operations.
pub type Result<T> = std::result::Result<T, Error>;
