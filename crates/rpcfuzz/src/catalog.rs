//! The built-in conformance cases.
//!
//! Cases run in the order they are registered here. Some of them depend on
//! state the operator prepares on the node before the run: the sender account
//! must be funded, and the test contract deployed by that account must exist.

use rpcfuzz_core::GenericTest;
use rpcfuzz_core::Registry;
use rpcfuzz_core::Validator;
use serde_json::Value;
use serde_json::json;

use crate::account::Address;
use crate::error::AppError;
use crate::schemas;

/// Address of the contract the sender deploys as its first transaction.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x6fda56c57b0acadb96ed5624ac500c0429d59429";

/// `"hello world"` as hex bytes.
const HELLO_WORLD_HEX: &str = "68656c6c6f20776f726c64";
/// Keccak-256 of `"hello world"`.
const HELLO_WORLD_KECCAK: &str =
    "0x47173285a8d7341e5e972fc677286384f802f8ef42a5ec5f03bbfa254cb01fad";

/// `0x` with any number of hex digits, including none.
const HEX_QUANTITY: &str = r"^0x[[:xdigit:]]*$";
/// `0x` with at least one hex digit.
const HEX_NUMBER: &str = r"^0x[[:xdigit:]]{1,}$";

/// Run-scoped facts the catalog needs about the node under test.
#[derive(Debug, Clone)]
pub struct Preconditions {
    /// Account derived from the configured private key.
    pub sender: Address,
    /// Contract whose storage slot 3 holds the deployer's address.
    pub contract_address: Address,
}

impl Preconditions {
    pub fn new(sender: Address, contract_address: Address) -> Self {
        Self {
            sender,
            contract_address,
        }
    }
}

pub fn build_registry(pre: &Preconditions) -> Result<Registry, AppError> {
    let mut registry = Registry::new();
    let sender = json!(pre.sender.to_checksum());
    let contract = json!(format!("0x{}", pre.contract_address.to_lower_hex()));

    registry.push(GenericTest::new(
        "net_version",
        Validator::regex_string(r"^\d*$")?,
    ))?;
    registry.push(GenericTest::new(
        "web3_clientVersion",
        Validator::regex_string(r"^[[:print:]]*$")?,
    ))?;
    registry.push(
        GenericTest::new(
            "web3_sha3",
            Validator::regex_string(HELLO_WORLD_KECCAK)?,
        )
        .with_args(vec![json!(format!("0x{}", HELLO_WORLD_HEX))]),
    )?;
    registry.push(
        GenericTest::new(
            "web3_sha3",
            Validator::error_message("cannot unmarshal hex string without 0x prefix")?,
        )
        .with_args(vec![json!(HELLO_WORLD_HEX)])
        .expecting_error(),
    )?;
    registry.push(GenericTest::new("net_listening", Validator::exact(true)))?;
    registry.push(GenericTest::new(
        "net_peerCount",
        Validator::regex_string(HEX_QUANTITY)?,
    ))?;
    registry.push(
        GenericTest::new(
            "eth_protocolVersion",
            Validator::error_message("method eth_protocolVersion does not exist")?,
        )
        .expecting_error(),
    )?;
    registry.push(GenericTest::new(
        "eth_syncing",
        Validator::chain([
            Validator::exact(false),
            Validator::json_schema(schemas::ETH_SYNCING),
        ]),
    ))?;
    registry.push(GenericTest::new(
        "eth_coinbase",
        Validator::regex_string(r"^0x[[:xdigit:]]{40}$")?,
    ))?;
    registry.push(GenericTest::new(
        "eth_chainId",
        Validator::regex_string(HEX_NUMBER)?,
    ))?;
    registry.push(GenericTest::new(
        "eth_mining",
        Validator::chain([Validator::exact(true), Validator::exact(false)]),
    ))?;
    registry.push(GenericTest::new(
        "eth_hashrate",
        Validator::regex_string(HEX_NUMBER)?,
    ))?;
    registry.push(GenericTest::new(
        "eth_gasPrice",
        Validator::regex_string(HEX_NUMBER)?,
    ))?;
    registry.push(GenericTest::new(
        "eth_accounts",
        Validator::json_schema(schemas::ACCOUNT_LIST),
    ))?;
    registry.push(GenericTest::new(
        "eth_blockNumber",
        Validator::regex_string(HEX_NUMBER)?,
    ))?;

    for tag in ["latest", "earliest", "pending"] {
        registry.push(
            GenericTest::new("eth_getBalance", Validator::regex_string(HEX_NUMBER)?)
                .with_args(vec![sender.clone(), json!(tag)]),
        )?;
    }

    // Slot 3 of the test contract holds its deployer. Genesis predates it.
    let deployer_slot = format!(r"^0x000000000000000000000000{}$", pre.sender.to_lower_hex());
    for tag in ["latest", "earliest", "pending"] {
        let pattern = if tag == "earliest" {
            r"^0x0{64}"
        } else {
            deployer_slot.as_str()
        };
        registry.push(
            GenericTest::new("eth_getStorageAt", Validator::regex_string(pattern)?)
                .with_args(vec![contract.clone(), json!("0x3"), json!(tag)]),
        )?;
    }

    for tag in ["latest", "earliest", "pending"] {
        let pattern = if tag == "earliest" { r"^0x0$" } else { HEX_NUMBER };
        registry.push(
            GenericTest::new("eth_getTransactionCount", Validator::regex_string(pattern)?)
                .with_args(vec![sender.clone(), json!(tag)]),
        )?;
    }

    registry.push(
        GenericTest::new(
            "eth_getBlockByNumber",
            Validator::json_schema(schemas::ETH_BLOCK),
        )
        .with_args(vec![json!("0x0"), Value::Bool(true)]),
    )?;

    Ok(registry)
}
