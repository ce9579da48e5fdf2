//! Authorization policy abstraction
//!
//! A policy decides allow/deny for the lifecycle operations that change code,
//! contract identity, admin ownership, or access configuration. Policies are
//! evaluated by the base keeper; the facade only selects which one travels
//! with a call.

use serde::{Deserialize, Serialize};
use std::fmt;
use wasmgate_core::{AccessConfig, AccountAddress, ChainAccessConfigs};

/// Lifecycle action a contract may trigger through a sub-message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyAction {
    /// Instantiate a new contract
    Instantiate,
    /// Migrate an existing contract
    Migrate,
}

impl fmt::Display for PolicyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyAction::Instantiate => write!(f, "instantiate"),
            PolicyAction::Migrate => write!(f, "migrate"),
        }
    }
}

/// Authorization decisions for contract lifecycle operations
///
/// Implementations hold no per-call state and must be safe to share across
/// concurrently validated transactions.
///
/// ## Contract
///
/// - Decisions are pure functions of their arguments
/// - A `false` decision makes the base keeper fail with `Unauthorized`
///   before any mutation
pub trait AuthorizationPolicy: fmt::Debug + Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// May `actor` store code that will carry `requested` as its instantiate config?
    fn can_create_code(
        &self,
        chain: &ChainAccessConfigs,
        actor: &AccountAddress,
        requested: &AccessConfig,
    ) -> bool;

    /// May `actor` instantiate from code guarded by `code_config`?
    fn can_instantiate_contract(&self, code_config: &AccessConfig, actor: &AccountAddress)
        -> bool;

    /// May `actor` migrate the contract or reassign its admin?
    ///
    /// `admin` is `None` when the contract has no admin.
    fn can_modify_contract(&self, admin: Option<&AccountAddress>, actor: &AccountAddress) -> bool;

    /// May `actor` replace the instantiate config of code stored by `creator`?
    ///
    /// `is_subset` reports whether the new config stays inside the chain default.
    fn can_modify_code_access_config(
        &self,
        creator: &AccountAddress,
        actor: &AccountAddress,
        is_subset: bool,
    ) -> bool;

    /// Policy that applies to a sub-message of the given action dispatched
    /// by a contract running under this policy
    fn sub_message_policy(&self, action: PolicyAction) -> Box<dyn AuthorizationPolicy>;
}
