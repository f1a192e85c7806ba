#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Tinytest
//!
//! A tiny unit-testing harness for test binaries built with `harness = false`.
//!
//! Tinytest provides:
//! - **Registry**: cases grouped into nested, named suites
//! - **CaseContext**: boolean and equality checks with continue/stop variants
//! - **Driver**: sequential execution, pass/fail counting, run summary
//! - **Tracer**: verbosity-gated trace lines (`--log_level=...`)
//! - **Printer**: separator-joined printing of heterogeneous values
//!
//! ## Example
//!
//! ```rust,no_run
//! use tinytest::{Registry, check, check_eq, require};
//!
//! fn main() -> std::process::ExitCode {
//!     let mut registry = Registry::new();
//!     {
//!         let mut suite = registry.suite("strings");
//!         suite.case("compare", |ctx| {
//!             let s1 = String::from("one");
//!             check!(ctx, s1.len() == 3);
//!             check_eq!(ctx, s1, "one");
//!             Ok(())
//!         });
//!         suite.case("required", |ctx| {
//!             let found: Option<u32> = None;
//!             require!(ctx, found.is_some());
//!             check_eq!(ctx, found, Some(5)); // never reached
//!             Ok(())
//!         });
//!     }
//!     tinytest::main(&registry)
//! }
//! ```
//!
//! ## Command line
//!
//! - `--log_level=error|message|testnames|all` (default `error`)
//! - `--help` prints usage and exits with status 1

mod config;
mod context;
mod entry;
mod error;
mod logging;
mod macros;
mod print;
mod registry;
mod runner;
mod trace;

pub use config::{Cli, Config, LOG_LEVEL_ENV, Verbosity};
pub use context::{CaseAborted, CaseContext, CaseResult, CheckOutcome, Location};
pub use entry::{main, run_main};
pub use error::{Error, Result, UsageError};
pub use logging::{TRACE_ENV, init_tracing};
pub use print::{DEFAULT_SEPARATOR, Printer, SharedBuffer};
pub use registry::{CaseBody, CaseEntry, DEFAULT_SUITE_SEPARATOR, Registry, SuiteGuard};
pub use runner::{
    AcceptAll, CaseFilter, CaseReport, Driver, NameContains, RunSummary, summary_line,
};
pub use trace::{OutputWriter, Tracer};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        CaseContext, CaseResult, Config, Driver, Printer, Registry, RunSummary, Verbosity,
        add_info, check, check_eq, message, print_values, println_values, require, require_eq,
    };
}
