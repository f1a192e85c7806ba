//! Driver - executing the cases of a registry
//!
//! Runs every registered case in registration order, one after another,
//! counting passed and failed checks across the whole run:
//! - `Enter: <name>` / `Leave: <name>` bracket every case (testnames)
//! - a case without checks is reported with a warning (message)
//! - per-case check counts are traced (all)
//!
//! The summary line goes to standard error:
//!
//! ```text
//! *** run 2 tests. 1 checks failed.
//! ```

use std::io::Write;
use std::process::ExitCode;

use crate::config::{Config, Verbosity};
use crate::context::{CaseContext, CheckOutcome};
use crate::error::Result;
use crate::print::Printer;
use crate::registry::Registry;
use crate::trace::{OutputWriter, Tracer};

/// Decides which cases run, by qualified name.
pub trait CaseFilter {
    fn accepts(&self, name: &str) -> bool;
}

/// Runs every case.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl CaseFilter for AcceptAll {
    fn accepts(&self, _name: &str) -> bool {
        true
    }
}

/// Runs cases whose qualified name contains a substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContains(pub String);

impl CaseFilter for NameContains {
    fn accepts(&self, name: &str) -> bool {
        name.contains(&self.0)
    }
}

impl<F> CaseFilter for F
where
    F: Fn(&str) -> bool,
{
    fn accepts(&self, name: &str) -> bool {
        self(name)
    }
}

/// Result of running one case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    /// Qualified case name
    pub name: String,
    /// Checks that passed
    pub passed: usize,
    /// Checks that failed
    pub failed: usize,
    /// Whether a required check stopped the body
    pub aborted: bool,
}

impl CaseReport {
    /// Number of checks the case performed.
    pub fn checks(&self) -> usize {
        self.passed + self.failed
    }
}

/// Summary of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Cases that were executed (accepted by the filter)
    pub cases: usize,
    /// Passed checks across all cases
    pub passed_checks: usize,
    /// Failed checks across all cases
    pub failed_checks: usize,
    /// Per-case results, in execution order
    pub reports: Vec<CaseReport>,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        self.failed_checks > 0
    }

    /// The line printed at the end of a run.
    pub fn summary_line(&self) -> String {
        summary_line(self.cases, self.failed_checks)
    }

    /// Process exit status: failure if any check failed.
    pub fn exit_code(&self) -> ExitCode {
        if self.has_failures() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

/// Format the end-of-run line for `cases` executed cases and `failed` failed checks.
///
/// The failure clause is omitted when nothing failed.
pub fn summary_line(cases: usize, failed: usize) -> String {
    let failures = if failed > 0 {
        format!("{failed} checks failed.")
    } else {
        String::new()
    };
    format!("*** run {cases} tests. {failures}")
}

#[derive(Debug, Clone, Copy, Default)]
struct Counters {
    passed: usize,
    failed: usize,
}

impl Counters {
    fn record(&mut self, outcome: CheckOutcome) {
        match outcome {
            CheckOutcome::Passed => self.passed += 1,
            CheckOutcome::Failed => self.failed += 1,
        }
    }
}

/// Runs the cases of a [`Registry`].
pub struct Driver {
    config: Config,
    tracer: Tracer,
    summary: Printer<OutputWriter>,
    filter: Box<dyn CaseFilter>,
}

impl Driver {
    /// Driver tracing to stdout and summarizing to stderr.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            tracer: Tracer::new(config.verbosity()),
            summary: Printer::new(OutputWriter::stderr()),
            filter: Box::new(AcceptAll),
        }
    }

    /// Send trace lines to `output` instead of stdout.
    #[must_use]
    pub fn with_trace_output<W: Write + Send + 'static>(mut self, output: W) -> Self {
        self.tracer = Tracer::new(self.config.verbosity()).with_output(output);
        self
    }

    /// Send the summary line to `output` instead of stderr.
    #[must_use]
    pub fn with_summary_output<W: Write + Send + 'static>(mut self, output: W) -> Self {
        self.summary = Printer::new(OutputWriter::plain(output));
        self
    }

    /// Only run cases accepted by `filter`.
    #[must_use]
    pub fn with_filter<F: CaseFilter + 'static>(mut self, filter: F) -> Self {
        self.filter = Box::new(filter);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run every case of `registry` in registration order.
    pub fn run(&mut self, registry: &Registry) -> RunSummary {
        tracing::debug!(cases = registry.len(), verbosity = %self.config.verbosity(), "run start");
        let mut summary = RunSummary::default();
        let mut totals = Counters::default();

        for entry in registry.entries() {
            let name = entry.name();
            self.tracer.trace(Verbosity::TestNames, &format!("Enter: {name}"));
            if self.filter.accepts(name) {
                let before = totals;
                let aborted = {
                    let mut report = |outcome: CheckOutcome| totals.record(outcome);
                    let mut ctx =
                        CaseContext::new(name, &self.config, &mut self.tracer, &mut report);
                    entry.run(&mut ctx).is_err()
                };
                summary.cases += 1;

                let case = CaseReport {
                    name: name.to_string(),
                    passed: totals.passed - before.passed,
                    failed: totals.failed - before.failed,
                    aborted,
                };
                self.trace_case_counts(&case);
                summary.reports.push(case);
            } else {
                tracing::debug!(case = %name, "filtered out");
            }
            self.tracer.trace(Verbosity::TestNames, &format!("Leave: {name}"));
        }

        summary.passed_checks = totals.passed;
        summary.failed_checks = totals.failed;
        tracing::debug!(
            cases = summary.cases,
            passed = summary.passed_checks,
            failed = summary.failed_checks,
            "run finished"
        );
        summary
    }

    fn trace_case_counts(&mut self, case: &CaseReport) {
        if case.checks() == 0 {
            self.tracer.trace(
                Verbosity::Message,
                &format!("[warning] Test case {} doesn't check anything", case.name),
            );
        } else {
            self.tracer.trace(
                Verbosity::All,
                &format!(
                    "[info] Test case {} ran {} checks ({} of them failed)",
                    case.name,
                    case.checks(),
                    case.failed
                ),
            );
        }
    }

    /// Write the summary line.
    ///
    /// # Errors
    ///
    /// Returns an error if the summary output cannot be written.
    pub fn report(&mut self, summary: &RunSummary) -> Result<()> {
        crate::println_values!(self.summary, summary.summary_line())?;
        Ok(())
    }
}

impl std::fmt::Debug for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Driver")
            .field("config", &self.config)
            .field("tracer", &self.tracer)
            .finish_non_exhaustive()
    }
}
