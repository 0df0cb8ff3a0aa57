use std::fmt;

use crate::errors::HarnessError;

/// Body of a test case. Fails by returning an error.
pub type TestBody = Box<dyn Fn() -> Result<(), HarnessError>>;

/// A named unit of verification.
///
/// A case with an empty name or without a body is malformed; the runner
/// records it as a failure when it reaches it.
pub struct TestCase {
    pub name: String,
    pub body: Option<TestBody>,
}

impl TestCase {
    pub fn new(
        name: impl Into<String>,
        body: impl Fn() -> Result<(), HarnessError> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            body: Some(Box::new(body)),
        }
    }

    /// A case with no body.
    pub fn without_body(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: None,
        }
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("has_body", &self.body.is_some())
            .finish()
    }
}

/// Terminal state of a test case after a run.
#[derive(Debug, Clone)]
pub enum Outcome {
    Passed,
    Failed(HarnessError),
    /// Excluded by the selection; counts neither as passed nor failed.
    Skipped,
}

/// Result for individual test execution
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Position of the case in the input sequence.
    pub index: usize,
    pub name: String,
    pub outcome: Outcome,
}

impl ExecutionResult {
    pub fn is_passed(&self) -> bool {
        matches!(self.outcome, Outcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, Outcome::Skipped)
    }

    pub fn error(&self) -> Option<&HarnessError> {
        match &self.outcome {
            Outcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Structured outcome of one run, in input order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub results: Vec<ExecutionResult>,
}

impl RunReport {
    pub fn passed(&self) -> impl Iterator<Item = &ExecutionResult> {
        self.results.iter().filter(|r| r.is_passed())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ExecutionResult> {
        self.results.iter().filter(|r| r.is_failed())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &ExecutionResult> {
        self.results.iter().filter(|r| r.is_skipped())
    }

    pub fn passed_count(&self) -> usize {
        self.passed().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }

    /// Number of cases that actually ran.
    pub fn total_run(&self) -> usize {
        self.passed_count() + self.failed_count()
    }
}


pub use config::{RunConfig, Selection};
pub use runner::run_tests;
