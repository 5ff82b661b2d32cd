use serde_json::Value;
use tracing::trace;

use crate::registry::Registry;
use crate::report::Outcome;
use crate::report::ReportSink;
use crate::report::RunReport;
use crate::report::Verdict;
use crate::test_case::RpcTest;
use crate::validator::Observed;

/// Performs a single RPC call.
///
/// Exactly one of a decoded result or an error comes back per call.
/// Deadlines, if any, belong to the implementation.
pub trait RpcCaller {
    type Error: std::error::Error;

    fn call(&mut self, method: &str, args: &[Value]) -> Result<Value, Self::Error>;
}

impl<C: RpcCaller + ?Sized> RpcCaller for &mut C {
    type Error = C::Error;

    fn call(&mut self, method: &str, args: &[Value]) -> Result<Value, Self::Error> {
        (**self).call(method, args)
    }
}

/// Runs every case of a registry, in order, one call at a time.
///
/// A failing case never stops the run.
pub struct Runner<'r> {
    registry: &'r Registry,
}

impl<'r> Runner<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    pub fn run<C, S>(&self, caller: &mut C, sink: &mut S) -> RunReport
    where
        C: RpcCaller + ?Sized,
        S: ReportSink + ?Sized,
    {
        let mut report = RunReport::default();
        for (index, test) in self.registry.iter().enumerate() {
            trace!(method = test.method(), index, "Running Test");
            let verdict = Verdict {
                index,
                method: test.method().to_string(),
                outcome: execute(test, caller),
            };
            sink.record(&verdict);
            report.push(verdict);
        }
        report
    }
}

fn execute<C>(test: &dyn RpcTest, caller: &mut C) -> Outcome
where
    C: RpcCaller + ?Sized,
{
    let validation = match caller.call(test.method(), test.args()) {
        Err(err) if !test.expect_error() => return Outcome::CallFailed(err.to_string()),
        Err(err) => test.validate(&Observed::Error(&err)),
        Ok(value) if test.expect_error() => {
            return Outcome::CallFailed(format!(
                "Expected the call to fail but it returned {}",
                value
            ));
        }
        Ok(value) => test.validate(&Observed::Result(&value)),
    };

    match validation {
        Ok(()) => Outcome::Passed,
        Err(err) => Outcome::ValidationFailed(err.to_string()),
    }
}
