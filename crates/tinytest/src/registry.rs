//! Registry - suites and cases of one test binary
//!
//! Cases are registered under the currently active suites. A case's
//! qualified name is every active suite name followed by the separator,
//! then the case name: registering `case` while `a` and `b` are active
//! yields `a/b/case`.
//!
//! Suites are entered either explicitly ([`Registry::enter_suite`] /
//! [`Registry::leave_suite`]) or through a [`SuiteGuard`], which leaves the
//! suite when dropped.
//!
//! ```rust
//! use tinytest::Registry;
//!
//! let mut registry = Registry::new();
//! {
//!     let mut outer = registry.suite("suite_part1");
//!     {
//!         let mut nested = outer.suite("suite_nested");
//!         nested.case("case1", |_| Ok(()));
//!     }
//!     outer.case("case1", |_| Ok(()));
//! }
//! assert_eq!(
//!     registry.names().collect::<Vec<_>>(),
//!     ["suite_part1/suite_nested/case1", "suite_part1/case1"]
//! );
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::context::{CaseContext, CaseResult};
use crate::logging::init_tracing;

/// Separator between suite names in qualified case names.
pub const DEFAULT_SUITE_SEPARATOR: &str = "/";

/// A case body.
pub type CaseBody = Box<dyn Fn(&mut CaseContext<'_>) -> CaseResult>;

/// One registered case.
pub struct CaseEntry {
    name: String,
    body: CaseBody,
}

impl CaseEntry {
    /// Qualified name (suite path and case name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the body.
    pub fn run(&self, ctx: &mut CaseContext<'_>) -> CaseResult {
        (self.body)(ctx)
    }
}

impl fmt::Debug for CaseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of cases plus the active suite stack.
#[derive(Debug)]
pub struct Registry {
    cases: Vec<CaseEntry>,
    suites: Vec<String>,
    separator: String,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create an empty registry using `/` as separator.
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SUITE_SEPARATOR)
    }

    /// Create an empty registry with a custom separator.
    ///
    /// Installs the diagnostics subscriber (see [`init_tracing`]) so that
    /// warnings raised while registering are not lost.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        init_tracing();
        Self {
            cases: Vec::new(),
            suites: Vec::new(),
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Push a suite onto the active stack.
    pub fn enter_suite(&mut self, name: impl Into<String>) {
        let name = name.into();
        tracing::debug!(suite = %name, depth = self.suites.len() + 1, "enter suite");
        self.suites.push(name);
    }

    /// Pop the most recently entered suite and return its name.
    ///
    /// # Panics
    ///
    /// Panics if no suite is active. Enter and leave calls must nest.
    pub fn leave_suite(&mut self) -> String {
        match self.pop_suite() {
            Some(name) => name,
            None => panic!("leave_suite called with no active suite"),
        }
    }

    fn pop_suite(&mut self) -> Option<String> {
        let name = self.suites.pop();
        if let Some(ref name) = name {
            tracing::debug!(suite = %name, depth = self.suites.len(), "leave suite");
        }
        name
    }

    /// Enter a suite for the lifetime of the returned guard.
    ///
    /// The guard dereferences to the registry, so cases and nested suites
    /// are registered through it.
    pub fn suite(&mut self, name: impl Into<String>) -> SuiteGuard<'_> {
        self.enter_suite(name);
        SuiteGuard { registry: self }
    }

    /// Active suite names, outermost first.
    pub fn active_suites(&self) -> &[String] {
        &self.suites
    }

    /// Active suites joined by the separator (empty at top level).
    pub fn current_path(&self) -> String {
        self.suites.join(&self.separator)
    }

    /// Name a case called `name` would get if registered now.
    pub fn qualified_name(&self, name: &str) -> String {
        let mut qualified = String::new();
        for suite in &self.suites {
            qualified.push_str(suite);
            qualified.push_str(&self.separator);
        }
        qualified.push_str(name);
        qualified
    }

    /// Register a case under the active suites.
    pub fn register_case<F>(&mut self, name: &str, body: F) -> &mut Self
    where
        F: Fn(&mut CaseContext<'_>) -> CaseResult + 'static,
    {
        let qualified = self.qualified_name(name);
        if self.cases.iter().any(|case| case.name == qualified) {
            tracing::warn!(case = %qualified, "case registered twice under the same name");
        }
        tracing::debug!(case = %qualified, "register case");
        self.cases.push(CaseEntry {
            name: qualified,
            body: Box::new(body),
        });
        self
    }

    /// Shorthand for [`register_case`](Self::register_case).
    pub fn case<F>(&mut self, name: &str, body: F) -> &mut Self
    where
        F: Fn(&mut CaseContext<'_>) -> CaseResult + 'static,
    {
        self.register_case(name, body)
    }

    /// Registered cases in registration order.
    pub fn entries(&self) -> &[CaseEntry] {
        &self.cases
    }

    /// Qualified names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(CaseEntry::name)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Keeps a suite active until dropped.
#[derive(Debug)]
pub struct SuiteGuard<'a> {
    registry: &'a mut Registry,
}

impl Deref for SuiteGuard<'_> {
    type Target = Registry;

    fn deref(&self) -> &Registry {
        &*self.registry
    }
}

impl DerefMut for SuiteGuard<'_> {
    fn deref_mut(&mut self) -> &mut Registry {
        &mut *self.registry
    }
}

impl Drop for SuiteGuard<'_> {
    fn drop(&mut self) {
        if self.registry.pop_suite().is_none() {
            tracing::warn!("suite guard dropped after its suite was already left");
        }
    }
}
