//! Decorated keeper - the base keeper boundary
//!
//! The permissioned facade depends only on the capabilities listed here, not
//! on the full surface of whatever keeper sits underneath. Gated operations
//! receive the authorization policy to consult; the keeper must fail with
//! `Unauthorized` and mutate nothing when the policy denies.
//!
//! ## Operations
//!
//! | Operation | Policy | Generator |
//! |-----------|--------|-----------|
//! | `create` | yes | - |
//! | `instantiate` | yes | yes |
//! | `migrate` | yes | - |
//! | `set_contract_admin` | yes | - |
//! | `set_access_config` | yes | - |
//! | `execute` | - | - |
//! | `sudo` | - | - |
//! | `pin_code` / `unpin_code` | - | - |
//! | `set_contract_info_extension` | - | - |
//!
//! ## Module Structure
//!
//! - `memory`: implementation for the in-memory reference keeper

mod memory;

use wasmgate_address::{AddressGenerator, CreationContext};
use wasmgate_core::{
    AccessConfig, AccountAddress, Checksum, CodeId, Coins, ContractInfoExtension,
    InstantiateRequest, KeeperResult,
};
use wasmgate_security::AuthorizationPolicy;

/// Minimal capability surface of a base keeper
///
/// `Context` is the execution context of one state transition. It must be
/// usable as a [`CreationContext`] so that generators can draw from the
/// instance sequence.
pub trait DecoratedKeeper: Send + Sync {
    /// Execution context operations run against
    type Context: CreationContext;

    /// Store bytecode; returns the new code id and checksum
    fn create(
        &self,
        ctx: &mut Self::Context,
        creator: &AccountAddress,
        wasm: &[u8],
        access: Option<&AccessConfig>,
        policy: &dyn AuthorizationPolicy,
    ) -> KeeperResult<(CodeId, Checksum)>;

    /// Instantiate at the address produced by `generator`; returns the
    /// address and the contract's result bytes
    fn instantiate(
        &self,
        ctx: &mut Self::Context,
        request: &InstantiateRequest,
        generator: &dyn AddressGenerator,
        policy: &dyn AuthorizationPolicy,
    ) -> KeeperResult<(AccountAddress, Vec<u8>)>;

    /// Move a contract to new code
    fn migrate(
        &self,
        ctx: &mut Self::Context,
        contract: &AccountAddress,
        caller: &AccountAddress,
        new_code_id: CodeId,
        msg: &[u8],
        policy: &dyn AuthorizationPolicy,
    ) -> KeeperResult<Vec<u8>>;

    /// Replace the admin; `None` clears it
    fn set_contract_admin(
        &self,
        ctx: &mut Self::Context,
        contract: &AccountAddress,
        caller: &AccountAddress,
        new_admin: Option<&AccountAddress>,
        policy: &dyn AuthorizationPolicy,
    ) -> KeeperResult<()>;

    /// Replace the instantiate config of stored code
    fn set_access_config(
        &self,
        ctx: &mut Self::Context,
        code_id: CodeId,
        caller: &AccountAddress,
        new_config: &AccessConfig,
        policy: &dyn AuthorizationPolicy,
    ) -> KeeperResult<()>;

    /// Pin code in the VM cache
    fn pin_code(&self, ctx: &mut Self::Context, code_id: CodeId) -> KeeperResult<()>;

    /// Unpin code from the VM cache
    fn unpin_code(&self, ctx: &mut Self::Context, code_id: CodeId) -> KeeperResult<()>;

    /// Call the execute entry point
    fn execute(
        &self,
        ctx: &mut Self::Context,
        contract: &AccountAddress,
        caller: &AccountAddress,
        msg: &[u8],
        funds: &Coins,
    ) -> KeeperResult<Vec<u8>>;

    /// Privileged call into a contract
    fn sudo(
        &self,
        ctx: &mut Self::Context,
        contract: &AccountAddress,
        msg: &[u8],
    ) -> KeeperResult<Vec<u8>>;

    /// Attach an extension to contract info
    fn set_contract_info_extension(
        &self,
        ctx: &mut Self::Context,
        contract: &AccountAddress,
        extension: ContractInfoExtension,
    ) -> KeeperResult<()>;

    /// Generator for non-predictable instantiation
    fn classic_address_generator(&self) -> Box<dyn AddressGenerator>;
}
