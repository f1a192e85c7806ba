//! Internal diagnostics via `tracing`.
//!
//! Registration and driver events are emitted as `tracing` events. They are
//! separate from the verbosity-gated trace lines on stdout and go to stderr
//! only when enabled through [`TRACE_ENV`].

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Environment variable holding the `tracing` filter (default `warn`).
pub const TRACE_ENV: &str = "TINYTEST_TRACE";

/// Install a stderr `tracing` subscriber filtered by [`TRACE_ENV`].
///
/// Does nothing if a global subscriber is already set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(TRACE_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
