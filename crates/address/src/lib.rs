//! Contract address derivation for wasmgate
//!
//! This crate computes the address assigned to a newly instantiated
//! contract. Two strategies are provided:
//! - [`ClassicAddressGenerator`]: sequence-based, unpredictable before execution
//! - [`PredictableAddressGenerator`]: salt-based, computable off-chain
//!
//! Generators are pure apart from the classic generator drawing one id from
//! the [`CreationContext`] sequence.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod generator;
pub mod module;

pub use generator::{
    build_contract_address_classic, build_contract_address_predictable, AddressGenerator,
    ClassicAddressGenerator, CreationContext, PredictableAddressGenerator,
};
pub use module::{length_prefixed, module_address, CONTRACT_ADDRESS_LEN, MODULE_NAME};
