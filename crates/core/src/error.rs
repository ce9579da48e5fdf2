//! Error types for the contract keeper
//!
//! Every error surfaced by a lifecycle operation originates in the base
//! keeper. The authorization facade forwards them unchanged.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::types::{AccountAddress, CodeId};
use thiserror::Error;

/// Result type alias for keeper operations
pub type KeeperResult<T> = std::result::Result<T, KeeperError>;

/// Error types for keeper operations
///
/// None of these are retryable as-is: a state transition that failed must
/// be resubmitted with different inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeeperError {
    /// Caller failed the bound authorization policy
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Derived contract address is already in use
    #[error("Duplicate contract: address {0} already exists")]
    DuplicateContract(AccountAddress),

    /// Referenced code id does not exist
    #[error("Code not found: {0}")]
    CodeNotFound(CodeId),

    /// Referenced contract does not exist
    #[error("Contract not found: {0}")]
    ContractNotFound(AccountAddress),

    /// Malformed message, configuration, or address
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Contract execution failed inside the VM
    #[error("VM error: {0}")]
    Vm(String),

    /// Configuration could not be read, parsed, or written
    #[error("Config error: {0}")]
    Config(String),
}

impl KeeperError {
    /// Authorization failure with a reason
    pub fn unauthorized(reason: impl Into<String>) -> Self {
        KeeperError::Unauthorized(reason.into())
    }

    /// Invalid input with a message
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        KeeperError::InvalidInput(msg.into())
    }

    /// VM failure with a message
    pub fn vm(msg: impl Into<String>) -> Self {
        KeeperError::Vm(msg.into())
    }

    /// Configuration failure with a message
    pub fn config(msg: impl Into<String>) -> Self {
        KeeperError::Config(msg.into())
    }

    /// Whether this is an authorization denial
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, KeeperError::Unauthorized(_))
    }

    /// Whether this is a not-found error (code or contract)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            KeeperError::CodeNotFound(_) | KeeperError::ContractNotFound(_)
        )
    }
}
