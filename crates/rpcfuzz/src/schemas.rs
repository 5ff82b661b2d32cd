//! JSON Schemas for structured RPC results.

/// `eth_syncing` while a sync is in progress.
pub const ETH_SYNCING: &str = r##"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Syncing progress",
  "type": "object",
  "properties": {
    "startingBlock": { "$ref": "#/definitions/uint" },
    "currentBlock": { "$ref": "#/definitions/uint" },
    "highestBlock": { "$ref": "#/definitions/uint" }
  },
  "required": ["startingBlock", "currentBlock", "highestBlock"],
  "definitions": {
    "uint": { "type": "string", "pattern": "^0x([1-9a-f]+[0-9a-f]*|0)$" }
  }
}"##;

/// `eth_accounts`.
pub const ACCOUNT_LIST: &str = r##"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Accounts",
  "type": "array",
  "items": { "type": "string", "pattern": "^0x[0-9a-fA-F]{40}$" }
}"##;

/// `eth_getBlockByNumber` with full transaction objects.
pub const ETH_BLOCK: &str = r##"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Block object",
  "type": "object",
  "properties": {
    "number": { "$ref": "#/definitions/uint" },
    "hash": { "$ref": "#/definitions/hash32" },
    "parentHash": { "$ref": "#/definitions/hash32" },
    "nonce": { "type": "string", "pattern": "^0x[0-9a-f]{16}$" },
    "sha3Uncles": { "$ref": "#/definitions/hash32" },
    "logsBloom": { "type": "string", "pattern": "^0x[0-9a-f]{512}$" },
    "transactionsRoot": { "$ref": "#/definitions/hash32" },
    "stateRoot": { "$ref": "#/definitions/hash32" },
    "receiptsRoot": { "$ref": "#/definitions/hash32" },
    "miner": { "$ref": "#/definitions/address" },
    "difficulty": { "$ref": "#/definitions/uint" },
    "totalDifficulty": { "$ref": "#/definitions/uint" },
    "extraData": { "type": "string", "pattern": "^0x[0-9a-f]*$" },
    "size": { "$ref": "#/definitions/uint" },
    "gasLimit": { "$ref": "#/definitions/uint" },
    "gasUsed": { "$ref": "#/definitions/uint" },
    "timestamp": { "$ref": "#/definitions/uint" },
    "mixHash": { "$ref": "#/definitions/hash32" },
    "baseFeePerGas": { "$ref": "#/definitions/uint" },
    "transactions": {
      "type": "array",
      "items": { "type": "object" }
    },
    "uncles": {
      "type": "array",
      "items": { "$ref": "#/definitions/hash32" }
    }
  },
  "required": [
    "number",
    "hash",
    "parentHash",
    "sha3Uncles",
    "logsBloom",
    "transactionsRoot",
    "stateRoot",
    "receiptsRoot",
    "miner",
    "difficulty",
    "extraData",
    "size",
    "gasLimit",
    "gasUsed",
    "timestamp",
    "transactions",
    "uncles"
  ],
  "definitions": {
    "uint": { "type": "string", "pattern": "^0x([1-9a-f]+[0-9a-f]*|0)$" },
    "hash32": { "type": "string", "pattern": "^0x[0-9a-f]{64}$" },
    "address": { "type": "string", "pattern": "^0x[0-9a-fA-F]{40}$" }
  }
}"##;
