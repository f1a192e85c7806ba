//! Cases spread over several files, collected into one registry.
//!
//! Each part registers its own suites; this file owns the entry point.

use std::process::ExitCode;

use tinytest::Registry;

mod part1;
mod part2;

fn main() -> ExitCode {
    let mut registry = Registry::new();
    part1::register(&mut registry);
    part2::register(&mut registry);
    tinytest::main(&registry)
}
