use tracing::error;
use tracing::info;

/// How a single case ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// The call itself did not produce the expected kind of outcome.
    CallFailed(String),
    /// The call produced a value (or error) that its validator rejected.
    ValidationFailed(String),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Outcome::Passed => None,
            Outcome::CallFailed(diagnostic) | Outcome::ValidationFailed(diagnostic) => {
                Some(diagnostic)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Passed => "success",
            Outcome::CallFailed(_) => "call-error",
            Outcome::ValidationFailed(_) => "validation-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Position of the case in the registry.
    pub index: usize,
    pub method: String,
    pub outcome: Outcome,
}

/// Receives one verdict per case, in registry order.
pub trait ReportSink {
    fn record(&mut self, verdict: &Verdict);
}

impl ReportSink for Vec<Verdict> {
    fn record(&mut self, verdict: &Verdict) {
        self.push(verdict.clone());
    }
}

/// Emits each verdict as a structured log event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn record(&mut self, verdict: &Verdict) {
        let method = verdict.method.as_str();
        let index = verdict.index;
        match &verdict.outcome {
            Outcome::Passed => info!(method, index, "Successfully validated"),
            Outcome::CallFailed(diagnostic) => {
                error!(method, index, error = %diagnostic, "Method test failed")
            }
            Outcome::ValidationFailed(diagnostic) => {
                error!(method, index, error = %diagnostic, "Failed to validate")
            }
        }
    }
}

/// All verdicts of one run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    verdicts: Vec<Verdict>,
}

impl RunReport {
    pub(crate) fn push(&mut self, verdict: Verdict) {
        self.verdicts.push(verdict);
    }

    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    pub fn total(&self) -> usize {
        self.verdicts.len()
    }

    pub fn passed(&self) -> usize {
        self.verdicts.iter().filter(|v| v.outcome.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| !v.outcome.is_pass())
    }
}
