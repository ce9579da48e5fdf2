//! Size limits for keeper inputs
//!
//! These limits are enforced by the base keeper before any state is touched.
//! Violations result in `InvalidInput` errors.

use serde::{Deserialize, Serialize};

use crate::error::{KeeperError, KeeperResult};

/// Maximum length of an address fed into address derivation
pub const MAX_ADDRESS_BYTES: usize = 255;

/// Maximum salt length for predictable addresses
pub const MAX_SALT_BYTES: usize = 64;

/// Size limits for keeper inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum stored bytecode size in bytes (default: 800 KiB)
    pub max_wasm_code_bytes: usize,

    /// Maximum contract label length in bytes (default: 128)
    pub max_label_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_wasm_code_bytes: 800 * 1024,
            max_label_bytes: 128,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_wasm_code_bytes: 64,
            max_label_bytes: 8,
        }
    }

    /// Validate bytecode size
    pub fn validate_wasm_code(&self, code: &[u8]) -> KeeperResult<()> {
        if code.is_empty() {
            return Err(KeeperError::invalid_input("wasm code cannot be empty"));
        }
        if code.len() > self.max_wasm_code_bytes {
            return Err(KeeperError::invalid_input(format!(
                "wasm code too large: {} bytes (max {})",
                code.len(),
                self.max_wasm_code_bytes
            )));
        }
        Ok(())
    }

    /// Validate a contract label
    pub fn validate_label(&self, label: &str) -> KeeperResult<()> {
        if label.trim().is_empty() {
            return Err(KeeperError::invalid_input("label cannot be empty"));
        }
        if label.len() > self.max_label_bytes {
            return Err(KeeperError::invalid_input(format!(
                "label too long: {} bytes (max {})",
                label.len(),
                self.max_label_bytes
            )));
        }
        Ok(())
    }
}

/// Validate a salt for predictable address derivation
pub fn validate_salt(salt: &[u8]) -> KeeperResult<()> {
    if salt.is_empty() {
        return Err(KeeperError::invalid_input("salt cannot be empty"));
    }
    if salt.len() > MAX_SALT_BYTES {
        return Err(KeeperError::invalid_input(format!(
            "salt too long: {} bytes (max {})",
            salt.len(),
            MAX_SALT_BYTES
        )));
    }
    Ok(())
}
