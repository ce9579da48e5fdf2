//! Module-scoped address hashing
//!
//! Contract addresses are module addresses of the `wasm` module:
//!
//! ```text
//! module_address(module, key) = SHA256( SHA256("module") || module || 0x00 || key )
//! ```
//!
//! The outer type hash separates module addresses from every other address
//! class.

use sha2::{Digest, Sha256};

/// Module whose address space contracts live in
pub const MODULE_NAME: &str = "wasm";

/// Length in bytes of a derived contract address
pub const CONTRACT_ADDRESS_LEN: usize = 32;

const MODULE_TYPE: &[u8] = b"module";

/// Hash `key` into the address space of `module`
pub fn module_address(module: &str, key: &[u8]) -> [u8; 32] {
    let type_hash = Sha256::digest(MODULE_TYPE);
    let mut hasher = Sha256::new();
    hasher.update(type_hash);
    hasher.update(module.as_bytes());
    hasher.update([0u8]);
    hasher.update(key);
    hasher.finalize().into()
}

/// Prefix `bytes` with its length as a big-endian u64
pub fn length_prefixed(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + bytes.len());
    out.extend_from_slice(&(bytes.len() as u64).to_be_bytes());
    out.extend_from_slice(bytes);
    out
}
