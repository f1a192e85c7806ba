//! CaseContext - what a running case body sees
//!
//! Combines the run configuration, the tracer and the reporting callback
//! into one handle passed to every case body. All checks go through it.
//!
//! Each check:
//! - reports exactly once to the run (passed or failed)
//! - traces its outcome according to the verbosity
//! - clears the pending contextual info, whatever the outcome
//!
//! The `require` variants return `Err(CaseAborted)` on failure; propagating
//! it with `?` ends the case body while later cases still run.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::config::{Config, Verbosity};
use crate::trace::Tracer;

/// Outcome of a single check, as seen by the reporting callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckOutcome {
    Passed,
    Failed,
}

/// A required check failed and the case body stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Error)]
#[error("required check failed")]
pub struct CaseAborted;

/// Return type of every case body.
pub type CaseResult = Result<(), CaseAborted>;

/// Source position of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Context for one invocation of a case body.
pub struct CaseContext<'a> {
    /// Qualified case name
    name: &'a str,
    /// Run configuration (read-only)
    config: &'a Config,
    /// Trace output
    tracer: &'a mut Tracer,
    /// Reporting callback, called once per check
    report: &'a mut dyn FnMut(CheckOutcome),
    /// Contextual info for the next failing check
    info: Vec<String>,
}

impl<'a> CaseContext<'a> {
    /// Create a context for the case `name`.
    pub fn new(
        name: &'a str,
        config: &'a Config,
        tracer: &'a mut Tracer,
        report: &'a mut dyn FnMut(CheckOutcome),
    ) -> Self {
        Self {
            name,
            config,
            tracer,
            report,
            info: Vec::new(),
        }
    }

    /// Qualified name of the running case.
    pub fn name(&self) -> &str {
        self.name
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    /// Info lines waiting for the next check.
    pub fn pending_info(&self) -> &[String] {
        &self.info
    }

    /// Attach a line of context to the next check.
    ///
    /// Nothing is printed now. If the next check fails, the line is printed
    /// before its error; either way the next check discards it.
    pub fn add_info(&mut self, message: impl Into<String>) {
        self.info.push(message.into());
    }

    /// Print `message` at [`Verbosity::Message`].
    pub fn message(&mut self, message: &str) {
        self.tracer.trace(Verbosity::Message, message);
    }

    /// The tracer, for helpers that print on the case's behalf.
    pub fn tracer(&mut self) -> &mut Tracer {
        &mut *self.tracer
    }

    /// Boolean check that lets the case continue on failure.
    ///
    /// Returns whether the check passed.
    pub fn check(&mut self, passed: bool, expr: &str, at: Location) -> bool {
        self.boolean(false, passed, expr, at)
    }

    /// Boolean check that stops the case on failure.
    ///
    /// # Errors
    ///
    /// Returns [`CaseAborted`] when `passed` is false.
    pub fn require(&mut self, passed: bool, expr: &str, at: Location) -> CaseResult {
        if self.boolean(true, passed, expr, at) {
            Ok(())
        } else {
            Err(CaseAborted)
        }
    }

    /// Equality check that lets the case continue on failure.
    ///
    /// Both operands are already evaluated; they are compared once and,
    /// on failure, formatted from the same values.
    pub fn check_eq<L, R>(
        &mut self,
        lhs: &L,
        rhs: &R,
        lhs_expr: &str,
        rhs_expr: &str,
        at: Location,
    ) -> bool
    where
        L: PartialEq<R> + Debug + ?Sized,
        R: Debug + ?Sized,
    {
        self.equality(false, lhs, rhs, lhs_expr, rhs_expr, at)
    }

    /// Equality check that stops the case on failure.
    ///
    /// # Errors
    ///
    /// Returns [`CaseAborted`] when the operands differ.
    pub fn require_eq<L, R>(
        &mut self,
        lhs: &L,
        rhs: &R,
        lhs_expr: &str,
        rhs_expr: &str,
        at: Location,
    ) -> CaseResult
    where
        L: PartialEq<R> + Debug + ?Sized,
        R: Debug + ?Sized,
    {
        if self.equality(true, lhs, rhs, lhs_expr, rhs_expr, at) {
            Ok(())
        } else {
            Err(CaseAborted)
        }
    }

    fn boolean(&mut self, required: bool, passed: bool, expr: &str, at: Location) -> bool {
        if passed {
            self.pass(&format!("Ok: '{expr}' passed"));
        } else {
            self.fail(required, &format!("'{expr}' failed"), at);
        }
        passed
    }

    fn equality<L, R>(
        &mut self,
        required: bool,
        lhs: &L,
        rhs: &R,
        lhs_expr: &str,
        rhs_expr: &str,
        at: Location,
    ) -> bool
    where
        L: PartialEq<R> + Debug + ?Sized,
        R: Debug + ?Sized,
    {
        let passed = lhs == rhs;
        if passed {
            self.pass(&format!("Ok: '{lhs_expr} == {rhs_expr}' passed"));
        } else {
            let detail = format!("{lhs_expr} == {rhs_expr} (failed)[`{lhs:?}` != `{rhs:?}`]");
            self.fail(required, &detail, at);
        }
        passed
    }

    fn pass(&mut self, trace: &str) {
        (self.report)(CheckOutcome::Passed);
        self.tracer.trace(Verbosity::All, trace);
        self.info.clear();
    }

    fn fail(&mut self, required: bool, detail: &str, at: Location) {
        (self.report)(CheckOutcome::Failed);
        for info in self.info.drain(..) {
            self.tracer
                .trace(Verbosity::Error, &format!("   Failed in context:{info}"));
        }
        let marker = if required { "(required check) " } else { "" };
        self.tracer.trace(
            Verbosity::Error,
            &format!("[error] {marker}{} File: {at} {detail}", self.name),
        );
    }
}

impl Debug for CaseContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseContext")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}
