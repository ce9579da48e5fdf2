//! Core types for the wasmgate contract keeper
//!
//! This crate defines the foundational types used throughout the system:
//! - AccountAddress: Opaque caller / admin / contract identifier
//! - CodeId, Checksum: Identity of stored bytecode
//! - Coin, Coins: Funds passed through to contract calls
//! - ContractInfoExtension: Opaque extra contract attributes
//! - AccessConfig, ChainAccessConfigs: Who may upload and instantiate
//! - Limits: Input size limits
//! - InstantiateRequest: Pass-through inputs of an instantiation
//! - KeeperError: Error type shared by every layer

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod access;
pub mod error;
pub mod limits;
pub mod request;
pub mod types;

pub use access::{AccessConfig, ChainAccessConfigs};
pub use error::{KeeperError, KeeperResult};
pub use limits::{validate_salt, Limits, MAX_ADDRESS_BYTES, MAX_SALT_BYTES};
pub use request::InstantiateRequest;
pub use types::{
    AccountAddress, Checksum, CodeId, Coin, Coins, ContractInfoExtension, CHECKSUM_LEN,
};
