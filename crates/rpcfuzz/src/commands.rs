use clap::Parser;
use clap::ValueEnum;

use crate::account::DEFAULT_PRIVATE_KEY;
use crate::catalog::DEFAULT_CONTRACT_ADDRESS;

const LONG_ABOUT: &str = r#"rpcfuzz runs a series of JSON-RPC calls against an Ethereum execution
endpoint and checks that each answer conforms to typical geth behavior.

Every case is reported as one log line. A failing case does not stop the
run; the process exits successfully unless setup fails or --fail-on-error
is given.

SETUP:
    Some cases depend on chain state. To prepare a geth dev node:

    # Start geth in dev mode with HTTP RPC enabled
    geth --dev --dev.period 5 --http --http.addr localhost \
        --http.port 8545 \
        --http.api admin,debug,web3,eth,txpool,personal,miner,net

    # Fund the test account derived from the default private key
    cast send --from "$(cast rpc --rpc-url localhost:8545 eth_coinbase | jq -r '.')" \
        --rpc-url localhost:8545 --unlocked --value 100ether \
        0x85dA99c8a7C2C95964c8EfD687E95E632Fc533D6

    # Deploy the test contract from that account as its first transaction
    cast send --from 0x85dA99c8a7C2C95964c8EfD687E95E632Fc533D6 \
        --private-key 0x42b6e34dc21598a807dc19d7784c71b2a7a01f6480dc6f58258f78e539f1a1fa \
        --rpc-url localhost:8545 --create "$BYTECODE"

    The contract then lives at 0x6fda56c57b0acadb96ed5624ac500c0429d59429.

EXAMPLES:
    rpcfuzz http://localhost:8545
    rpcfuzz --verbose --log-format json http://localhost:8545
    RPCFUZZ_LOG=/tmp/rpcfuzz.log rpcfuzz --fail-on-error http://localhost:8545

REFERENCES:
    https://ethereum.github.io/execution-apis/api-documentation/
    https://ethereum.org/en/developers/docs/apis/json-rpc/"#;

#[derive(Debug, Parser)]
#[command(name = "rpcfuzz")]
#[command(author, version)]
#[command(about = "Run a series of JSON-RPC conformance checks against an Ethereum node")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    /// JSON-RPC endpoint, e.g. http://localhost:8545
    #[arg(value_name = "RPC_URL")]
    pub rpc_url: String,

    /// Hex private key of the funded test account (0x prefix optional)
    #[arg(
        long,
        env = "RPCFUZZ_PRIVATE_KEY",
        default_value = DEFAULT_PRIVATE_KEY,
        hide_default_value = true,
        hide_env_values = true
    )]
    pub private_key: String,

    /// Address of the test contract deployed by the test account
    #[arg(long, env = "RPCFUZZ_CONTRACT_ADDRESS", default_value = DEFAULT_CONTRACT_ADDRESS)]
    pub contract_address: String,

    /// Per-call timeout in seconds (0 disables the timeout)
    #[arg(long, env = "RPCFUZZ_TIMEOUT", default_value = "30")]
    pub timeout: u64,

    /// Exit with status 1 when any test case fails
    #[arg(long)]
    pub fail_on_error: bool,

    /// Log output format
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Log every call, including branch failures inside chained validators
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}
