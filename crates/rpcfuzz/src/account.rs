//! Sender account derivation.

use std::fmt;
use std::str::FromStr;

use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use sha3::Digest;
use sha3::Keccak256;
use thiserror::Error;

/// Well-known development key. Never fund it on a real network.
pub const DEFAULT_PRIVATE_KEY: &str =
    "42b6e34dc21598a807dc19d7784c71b2a7a01f6480dc6f58258f78e539f1a1fa";

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Private key is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Private key must be 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("Private key is not a valid secp256k1 scalar")]
    InvalidKey,

    #[error("Invalid address '{0}': expected 0x followed by 40 hex digits")]
    InvalidAddress(String),
}

/// A 20-byte account address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Derives the address owning a hex-encoded secp256k1 private key
    /// (optionally `0x`-prefixed).
    pub fn from_private_key_hex(key: &str) -> Result<Self, AccountError> {
        let bytes = hex::decode(strip_hex_prefix(key.trim()))?;
        if bytes.len() != 32 {
            return Err(AccountError::InvalidKeyLength(bytes.len()));
        }
        let signing_key = SigningKey::from_slice(&bytes).map_err(|_| AccountError::InvalidKey)?;
        let point = signing_key.verifying_key().as_affine().to_encoded_point(false);

        // Uncompressed SEC1 points start with a 0x04 tag byte.
        let hash = Keccak256::digest(&point.as_bytes()[1..]);
        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);
        Ok(Self(address))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Lowercase hex without the `0x` prefix.
    pub fn to_lower_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// EIP-55 mixed-case checksum encoding.
    pub fn to_checksum(&self) -> String {
        let lower = self.to_lower_hex();
        let hash = Keccak256::digest(lower.as_bytes());

        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0f
            };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl FromStr for Address {
    type Err = AccountError;

    /// Parses `0x` + 40 hex digits; checksum casing is not enforced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AccountError::InvalidAddress(s.to_string());
        let digits = s.strip_prefix("0x").ok_or_else(invalid)?;
        if digits.len() != 40 {
            return Err(invalid());
        }
        let mut address = [0u8; 20];
        hex::decode_to_slice(digits, &mut address).map_err(|_| invalid())?;
        Ok(Self(address))
    }
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}
