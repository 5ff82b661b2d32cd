//! Run setup, execution and the end-of-run summary.

use std::fmt::Write as _;

use rpcfuzz_client::HttpClient;
use rpcfuzz_client::HttpClientConfig;
use rpcfuzz_common::Colors;
use rpcfuzz_core::RpcCaller;
use rpcfuzz_core::RunReport;
use rpcfuzz_core::Runner;
use rpcfuzz_core::TracingSink;
use tracing::info;
use tracing::warn;

use crate::account::Address;
use crate::catalog;
use crate::catalog::Preconditions;
use crate::config::RunConfig;
use crate::error::AppError;

pub struct Application {
    config: RunConfig,
}

impl Application {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Derives the sender account and parses the contract address.
    pub fn preconditions(&self) -> Result<Preconditions, AppError> {
        let sender = Address::from_private_key_hex(self.config.private_key())
            .map_err(AppError::InvalidKey)?;
        info!(address = %sender, "Loaded private key");

        let contract_address = self
            .config
            .contract_address()
            .parse()
            .map_err(AppError::InvalidContractAddress)?;
        Ok(Preconditions::new(sender, contract_address))
    }

    /// Runs the catalog against the configured HTTP endpoint.
    pub fn run(&self) -> Result<RunReport, AppError> {
        let pre = self.preconditions()?;
        let client_config = HttpClientConfig::default().with_timeout(self.config.timeout());
        let mut client = HttpClient::with_config(self.config.rpc_url(), client_config)?;
        info!(endpoint = %client.endpoint(), "Connected to RPC endpoint");
        self.run_catalog(&pre, &mut client)
    }

    /// Runs the catalog through an arbitrary caller.
    pub fn run_with<C>(&self, caller: &mut C) -> Result<RunReport, AppError>
    where
        C: RpcCaller + ?Sized,
    {
        let pre = self.preconditions()?;
        self.run_catalog(&pre, caller)
    }

    fn run_catalog<C>(&self, pre: &Preconditions, caller: &mut C) -> Result<RunReport, AppError>
    where
        C: RpcCaller + ?Sized,
    {
        let registry = catalog::build_registry(pre)?;
        let report = Runner::new(&registry).run(caller, &mut TracingSink);

        if report.all_passed() {
            info!(total = report.total(), "All tests passed");
        } else {
            warn!(
                total = report.total(),
                passed = report.passed(),
                failed = report.failed(),
                "Some tests failed"
            );
        }
        Ok(report)
    }

    /// Applies the exit policy to a finished run. Failed cases only turn into
    /// an error when `--fail-on-error` is set.
    pub fn finish(&self, report: &RunReport) -> Result<(), AppError> {
        if self.config.fail_on_error() && !report.all_passed() {
            return Err(AppError::TestsFailed {
                failed: report.failed(),
                total: report.total(),
            });
        }
        Ok(())
    }
}

/// Human-readable summary printed after the run.
pub fn render_summary(report: &RunReport) -> String {
    let mut out = String::new();
    for verdict in report.failures() {
        let _ = writeln!(
            out,
            "{} #{} {} {}: {}",
            Colors::error("✗"),
            verdict.index,
            Colors::method(&verdict.method),
            verdict.outcome.as_str(),
            verdict.outcome.diagnostic().unwrap_or_default()
        );
    }

    let totals = format!("{}/{} tests passed", report.passed(), report.total());
    if report.all_passed() {
        let _ = write!(out, "{} {}", Colors::success("✓"), totals);
    } else {
        let _ = write!(out, "{} {}", Colors::warning("!"), Colors::bold(&totals));
    }
    out
}
