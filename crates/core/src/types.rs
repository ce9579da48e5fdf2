//! Core value types for the contract keeper
//!
//! This module defines the identifiers and payload types that flow through
//! every lifecycle operation:
//! - AccountAddress: Opaque account identifier (callers, admins, contracts)
//! - CodeId: Sequential identifier of a stored bytecode blob
//! - Checksum: Content hash of stored bytecode
//! - Coin / Coins: Funds attached to instantiate and execute calls
//! - ContractInfoExtension: Opaque extra attributes kept on contract info
//!
//! None of these types are interpreted by the authorization layer beyond
//! equality checks and byte-level hashing.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::KeeperError;

/// Length in bytes of a checksum
pub const CHECKSUM_LEN: usize = 32;

/// Opaque account identifier
///
/// An address is a byte string of fixed format chosen by the host chain.
/// It is never parsed; it is compared for equality and fed into address
/// derivation. The human-readable form is lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountAddress(Vec<u8>);

impl AccountAddress {
    /// Create an address from raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Get the raw bytes of this address
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes in the address
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the address carries no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume and return the inner bytes
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for AccountAddress {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for AccountAddress {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for AccountAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl FromStr for AccountAddress {
    type Err = KeeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex::decode(s)
            .map(Self)
            .map_err(|e| KeeperError::invalid_input(format!("invalid address '{}': {}", s, e)))
    }
}

impl Serialize for AccountAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Identifier of a stored code blob
///
/// Assigned monotonically by the base keeper, starting at 1.
/// Never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CodeId(u64);

impl CodeId {
    /// Wrap a raw code id
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Big-endian bytes, as used in address derivation
    #[inline]
    pub fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }
}

impl From<u64> for CodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for CodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content hash of stored bytecode
///
/// Computed by the base keeper when code is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Checksum([u8; CHECKSUM_LEN]);

impl Checksum {
    /// Wrap raw hash bytes
    pub const fn from_bytes(bytes: [u8; CHECKSUM_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw hash bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8; CHECKSUM_LEN] {
        &self.0
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl TryFrom<&[u8]> for Checksum {
    type Error = KeeperError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; CHECKSUM_LEN] = bytes.try_into().map_err(|_| {
            KeeperError::invalid_input(format!(
                "checksum must be {} bytes, got {}",
                CHECKSUM_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }
}

/// A single denomination and amount
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    /// Denomination, e.g. "ustake"
    pub denom: String,
    /// Amount in the smallest unit
    pub amount: u128,
}

impl Coin {
    /// Create a coin
    pub fn new(amount: u128, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Funds attached to a call
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coins(Vec<Coin>);

impl Coins {
    /// No funds
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether no funds are attached
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the coins
    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.0.iter()
    }
}

impl From<Vec<Coin>> for Coins {
    fn from(coins: Vec<Coin>) -> Self {
        Self(coins)
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

/// Extra attributes stored alongside contract info
///
/// The payload is opaque: a type URL naming its schema plus encoded bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractInfoExtension {
    /// Schema identifier of the payload
    pub type_url: String,
    /// Encoded payload
    pub value: Vec<u8>,
}

impl ContractInfoExtension {
    /// Create an extension
    pub fn new(type_url: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            type_url: type_url.into(),
            value: value.into(),
        }
    }
}
