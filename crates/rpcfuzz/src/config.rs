//! Run configuration.

use std::time::Duration;

use crate::account::DEFAULT_PRIVATE_KEY;
use crate::catalog::DEFAULT_CONTRACT_ADDRESS;
use crate::commands::Cli;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct RunConfig {
    rpc_url: String,
    private_key: String,
    contract_address: String,
    timeout: Option<Duration>,
    fail_on_error: bool,
}

impl RunConfig {
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            private_key: DEFAULT_PRIVATE_KEY.to_string(),
            contract_address: DEFAULT_CONTRACT_ADDRESS.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            fail_on_error: false,
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.rpc_url.clone())
            .with_private_key(cli.private_key.clone())
            .with_contract_address(cli.contract_address.clone())
            .with_timeout(timeout_from_secs(cli.timeout))
            .with_fail_on_error(cli.fail_on_error)
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    pub fn contract_address(&self) -> &str {
        &self.contract_address
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn fail_on_error(&self) -> bool {
        self.fail_on_error
    }

    pub fn with_private_key(mut self, key: impl Into<String>) -> Self {
        self.private_key = key.into();
        self
    }

    pub fn with_contract_address(mut self, address: impl Into<String>) -> Self {
        self.contract_address = address.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_fail_on_error(mut self, fail_on_error: bool) -> Self {
        self.fail_on_error = fail_on_error;
        self
    }
}

/// `0` means no deadline.
fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = RunConfig::new("http://localhost:8545");
        assert_eq!(config.rpc_url(), "http://localhost:8545");
        assert_eq!(config.private_key(), DEFAULT_PRIVATE_KEY);
        assert_eq!(config.contract_address(), DEFAULT_CONTRACT_ADDRESS);
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert!(!config.fail_on_error());
    }

    #[test]
    fn test_builders() {
        let config = RunConfig::new("http://localhost:8545")
            .with_private_key("0x01")
            .with_contract_address("0x0000000000000000000000000000000000000002")
            .with_timeout(None)
            .with_fail_on_error(true);
        assert_eq!(config.private_key(), "0x01");
        assert_eq!(
            config.contract_address(),
            "0x0000000000000000000000000000000000000002"
        );
        assert_eq!(config.timeout(), None);
        assert!(config.fail_on_error());
    }

    #[test]
    fn test_from_cli() {
        let cli = Cli::try_parse_from([
            "rpcfuzz",
            "--timeout",
            "0",
            "--fail-on-error",
            "http://node:8545",
        ])
        .unwrap();
        let config = RunConfig::from_cli(&cli);
        assert_eq!(config.rpc_url(), "http://node:8545");
        assert_eq!(config.timeout(), None);
        assert!(config.fail_on_error());
    }

    #[test]
    fn test_timeout_from_secs() {
        assert_eq!(timeout_from_secs(0), None);
        assert_eq!(timeout_from_secs(12), Some(Duration::from_secs(12)));
    }
}
