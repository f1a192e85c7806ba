//! Entry point for tinytest binaries.
//!
//! A test binary builds its [`Registry`] and hands it to [`main`]:
//!
//! ```rust,no_run
//! use std::process::ExitCode;
//! use tinytest::{Registry, check};
//!
//! fn main() -> ExitCode {
//!     let mut registry = Registry::new();
//!     registry.case("truth", |ctx| {
//!         check!(ctx, true);
//!         Ok(())
//!     });
//!     tinytest::main(&registry)
//! }
//! ```

use std::ffi::OsString;
use std::process::ExitCode;

use crate::config::Config;
use crate::logging::init_tracing;
use crate::registry::Registry;
use crate::runner::Driver;

/// Exit status for usage errors (`--help`, unknown arguments).
const USAGE_EXIT: u8 = 1;

/// Parse the process arguments, run `registry` and print the summary.
pub fn main(registry: &Registry) -> ExitCode {
    run_main(std::env::args_os(), registry)
}

/// Like [`main`], with an explicit argument list (program name first).
///
/// Returns status 1 without running anything when the arguments are
/// rejected or `--help` is given. Otherwise the status is failure when any
/// check failed and success when none did.
pub fn run_main<I, T>(args: I, registry: &Registry) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    init_tracing();

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(USAGE_EXIT);
        }
    };

    let mut driver = Driver::new(config);
    let summary = driver.run(registry);
    if let Err(err) = driver.report(&summary) {
        tracing::error!(%err, "could not write run summary");
    }
    summary.exit_code()
}
