#![forbid(unsafe_code)]

//! # tinytest-demo
//!
//! Small test binary showing nested suites, contextual info and messages.
//!
//! ## Usage
//!
//! ```bash
//! tinytest-demo                       # errors only
//! tinytest-demo --log_level=all       # every check and case
//! TINYTEST_DEMO_FAILURES=1 tinytest-demo
//! TINYTEST_DEMO_DUPLICATES=1 tinytest-demo
//! ```
//!
//! With `TINYTEST_DEMO_FAILURES` set, an extra suite with failing checks is
//! registered so the failure output can be seen. `TINYTEST_DEMO_DUPLICATES`
//! registers one case name twice under the same suite.

use std::process::ExitCode;

use tinytest::{CaseContext, Registry, add_info, check, check_eq, message, require};

const FAILURES_ENV: &str = "TINYTEST_DEMO_FAILURES";
const DUPLICATES_ENV: &str = "TINYTEST_DEMO_DUPLICATES";

fn bar(ctx: &mut CaseContext<'_>, input: bool) -> bool {
    message!(ctx, "called 'bar({input})'");
    input
}

fn register_basics(registry: &mut Registry) {
    let mut part1 = registry.suite("suite_part1");
    {
        let mut nested = part1.suite("suite_nested");
        nested.case("case1", |ctx| {
            check!(ctx, true);
            check_eq!(ctx, 2, 2);
            Ok(())
        });
    }
    part1.case("case2", |ctx| {
        add_info!(ctx, "msg1");
        add_info!(ctx, "msg2");
        check!(ctx, true);
        Ok(())
    });
    // Same name as the nested case, different suite.
    part1.case("case1", |ctx| {
        check!(ctx, true);
        Ok(())
    });
}

fn register_messages(registry: &mut Registry) {
    let mut part2 = registry.suite("suite_part2");
    part2.case("case3", |ctx| {
        let called = bar(ctx, true);
        check!(ctx, called);
        let s1 = String::from("same");
        let s2 = String::from("same");
        check_eq!(ctx, s1, s2);
        Ok(())
    });
    part2.case("case4", |ctx| {
        check!(ctx, true);
        Ok(())
    });
    part2.case("placeholder", |_| Ok(()));
}

fn register_failures(registry: &mut Registry) {
    let mut failing = registry.suite("failing");
    failing.case("mismatch", |ctx| {
        let s1 = String::from("one");
        add_info!(ctx, "comparing {s1:?}");
        check_eq!(ctx, s1, "two");
        check!(ctx, s1.len() == 3);
        Ok(())
    });
    failing.case("required", |ctx| {
        let found: Option<i32> = None;
        require!(ctx, found.is_some());
        check_eq!(ctx, found, Some(5));
        Ok(())
    });
}

fn register_duplicates(registry: &mut Registry) {
    let mut twice = registry.suite("duplicated");
    for _ in 0..2 {
        twice.case("same", |ctx| {
            check!(ctx, true);
            Ok(())
        });
    }
}

fn main() -> ExitCode {
    let mut registry = Registry::new();
    register_basics(&mut registry);
    register_messages(&mut registry);
    if std::env::var_os(FAILURES_ENV).is_some() {
        register_failures(&mut registry);
    }
    if std::env::var_os(DUPLICATES_ENV).is_some() {
        register_duplicates(&mut registry);
    }
    tinytest::main(&registry)
}
