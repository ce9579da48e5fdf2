//! Instantiation request
//!
//! Groups the pass-through inputs of an instantiation so that the classic
//! and predictable entry points share one shape. The address strategy and
//! the authorization policy travel separately.

use crate::types::{AccountAddress, CodeId, Coins};

/// Inputs of a contract instantiation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstantiateRequest {
    /// Code to instantiate from
    pub code_id: CodeId,
    /// Account creating the contract
    pub creator: AccountAddress,
    /// Optional admin allowed to migrate the contract
    pub admin: Option<AccountAddress>,
    /// Instantiate message passed to the contract
    pub init_msg: Vec<u8>,
    /// Human-readable label
    pub label: String,
    /// Funds transferred to the new contract
    pub funds: Coins,
}

impl InstantiateRequest {
    /// Request without admin or funds
    pub fn new(
        code_id: CodeId,
        creator: AccountAddress,
        init_msg: impl Into<Vec<u8>>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            code_id,
            creator,
            admin: None,
            init_msg: init_msg.into(),
            label: label.into(),
            funds: Coins::empty(),
        }
    }

    /// Set the contract admin
    pub fn with_admin(mut self, admin: AccountAddress) -> Self {
        self.admin = Some(admin);
        self
    }

    /// Attach funds
    pub fn with_funds(mut self, funds: Coins) -> Self {
        self.funds = funds;
        self
    }

    /// Replace the instantiate message
    pub fn with_msg(mut self, init_msg: impl Into<Vec<u8>>) -> Self {
        self.init_msg = init_msg.into();
        self
    }
}
