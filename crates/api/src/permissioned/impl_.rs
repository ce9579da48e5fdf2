//! Permissioned keeper implementation
//!
//! `PermissionedKeeper` wraps a shared base keeper and a shared policy. Both
//! are fixed at construction, so a facade is immutable and can be cloned
//! cheaply and shared across threads.

use std::fmt;
use std::sync::Arc;
use tracing::debug;
use wasmgate_address::PredictableAddressGenerator;
use wasmgate_core::{
    AccessConfig, AccountAddress, Checksum, CodeId, Coins, ContractInfoExtension,
    InstantiateRequest, KeeperResult,
};
use wasmgate_security::{
    AuthorizationPolicy, DefaultAuthorizationPolicy, GovAuthorizationPolicy, PolicyAction,
};

use super::ContractOps;
use crate::decorated::DecoratedKeeper;

// =============================================================================
// PermissionedKeeper
// =============================================================================

/// Facade attaching a fixed authorization policy to base keeper calls
pub struct PermissionedKeeper<K> {
    /// The underlying base keeper
    keeper: Arc<K>,

    /// Policy bound to every gated call
    policy: Arc<dyn AuthorizationPolicy>,
}

impl<K: DecoratedKeeper> PermissionedKeeper<K> {
    /// Create a facade with an explicit policy
    pub fn new(keeper: Arc<K>, policy: Arc<dyn AuthorizationPolicy>) -> Self {
        PermissionedKeeper { keeper, policy }
    }

    /// Facade enforcing ownership and allow-list rules
    pub fn with_default_policy(keeper: Arc<K>) -> Self {
        Self::new(keeper, Arc::new(DefaultAuthorizationPolicy))
    }

    /// Facade for governance execution; every gated call is authorized
    pub fn with_gov_policy(keeper: Arc<K>) -> Self {
        Self::new(keeper, Arc::new(GovAuthorizationPolicy::default()))
    }

    /// Facade for sub-messages of `action` dispatched under this facade
    pub fn for_sub_message(&self, action: PolicyAction) -> Self {
        Self::new(
            Arc::clone(&self.keeper),
            Arc::from(self.policy.sub_message_policy(action)),
        )
    }

    /// Bound policy
    pub fn policy(&self) -> &dyn AuthorizationPolicy {
        self.policy.as_ref()
    }

    /// Underlying base keeper
    pub fn keeper(&self) -> &K {
        &self.keeper
    }
}

impl<K> Clone for PermissionedKeeper<K> {
    fn clone(&self) -> Self {
        PermissionedKeeper {
            keeper: Arc::clone(&self.keeper),
            policy: Arc::clone(&self.policy),
        }
    }
}

impl<K> fmt::Debug for PermissionedKeeper<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermissionedKeeper")
            .field("policy", &self.policy.name())
            .finish_non_exhaustive()
    }
}

impl<K: DecoratedKeeper> ContractOps for PermissionedKeeper<K> {
    type Context = K::Context;

    fn create(
        &self,
        ctx: &mut K::Context,
        creator: &AccountAddress,
        wasm: &[u8],
        access: Option<&AccessConfig>,
    ) -> KeeperResult<(CodeId, Checksum)> {
        debug!(target: "wasmgate::permissioned", policy = self.policy.name(), creator = %creator, "create");
        self.keeper
            .create(ctx, creator, wasm, access, self.policy.as_ref())
    }

    fn instantiate(
        &self,
        ctx: &mut K::Context,
        request: &InstantiateRequest,
    ) -> KeeperResult<(AccountAddress, Vec<u8>)> {
        debug!(
            target: "wasmgate::permissioned",
            policy = self.policy.name(),
            code_id = %request.code_id,
            "instantiate"
        );
        let generator = self.keeper.classic_address_generator();
        self.keeper
            .instantiate(ctx, request, generator.as_ref(), self.policy.as_ref())
    }

    fn instantiate2(
        &self,
        ctx: &mut K::Context,
        request: &InstantiateRequest,
        salt: &[u8],
        fix_msg: bool,
    ) -> KeeperResult<(AccountAddress, Vec<u8>)> {
        debug!(
            target: "wasmgate::permissioned",
            policy = self.policy.name(),
            code_id = %request.code_id,
            fix_msg,
            "instantiate2"
        );
        let generator = PredictableAddressGenerator::new(
            request.creator.clone(),
            salt,
            request.init_msg.clone(),
            fix_msg,
        );
        self.keeper
            .instantiate(ctx, request, &generator, self.policy.as_ref())
    }

    fn execute(
        &self,
        ctx: &mut K::Context,
        contract: &AccountAddress,
        caller: &AccountAddress,
        msg: &[u8],
        funds: &Coins,
    ) -> KeeperResult<Vec<u8>> {
        debug!(target: "wasmgate::permissioned", contract = %contract, "execute");
        self.keeper.execute(ctx, contract, caller, msg, funds)
    }

    fn migrate(
        &self,
        ctx: &mut K::Context,
        contract: &AccountAddress,
        caller: &AccountAddress,
        new_code_id: CodeId,
        msg: &[u8],
    ) -> KeeperResult<Vec<u8>> {
        debug!(
            target: "wasmgate::permissioned",
            policy = self.policy.name(),
            contract = %contract,
            new_code_id = %new_code_id,
            "migrate"
        );
        self.keeper
            .migrate(ctx, contract, caller, new_code_id, msg, self.policy.as_ref())
    }

    fn sudo(
        &self,
        ctx: &mut K::Context,
        contract: &AccountAddress,
        msg: &[u8],
    ) -> KeeperResult<Vec<u8>> {
        debug!(target: "wasmgate::permissioned", contract = %contract, "sudo");
        self.keeper.sudo(ctx, contract, msg)
    }

    fn update_contract_admin(
        &self,
        ctx: &mut K::Context,
        contract: &AccountAddress,
        caller: &AccountAddress,
        new_admin: &AccountAddress,
    ) -> KeeperResult<()> {
        debug!(
            target: "wasmgate::permissioned",
            policy = self.policy.name(),
            contract = %contract,
            new_admin = %new_admin,
            "update_contract_admin"
        );
        self.keeper
            .set_contract_admin(ctx, contract, caller, Some(new_admin), self.policy.as_ref())
    }

    fn clear_contract_admin(
        &self,
        ctx: &mut K::Context,
        contract: &AccountAddress,
        caller: &AccountAddress,
    ) -> KeeperResult<()> {
        debug!(
            target: "wasmgate::permissioned",
            policy = self.policy.name(),
            contract = %contract,
            "clear_contract_admin"
        );
        self.keeper
            .set_contract_admin(ctx, contract, caller, None, self.policy.as_ref())
    }

    fn pin_code(&self, ctx: &mut K::Context, code_id: CodeId) -> KeeperResult<()> {
        debug!(target: "wasmgate::permissioned", code_id = %code_id, "pin_code");
        self.keeper.pin_code(ctx, code_id)
    }

    fn unpin_code(&self, ctx: &mut K::Context, code_id: CodeId) -> KeeperResult<()> {
        debug!(target: "wasmgate::permissioned", code_id = %code_id, "unpin_code");
        self.keeper.unpin_code(ctx, code_id)
    }

    fn set_contract_info_extension(
        &self,
        ctx: &mut K::Context,
        contract: &AccountAddress,
        extension: ContractInfoExtension,
    ) -> KeeperResult<()> {
        debug!(target: "wasmgate::permissioned", contract = %contract, "set_contract_info_extension");
        self.keeper.set_contract_info_extension(ctx, contract, extension)
    }

    fn set_access_config(
        &self,
        ctx: &mut K::Context,
        code_id: CodeId,
        caller: &AccountAddress,
        new_config: &AccessConfig,
    ) -> KeeperResult<()> {
        debug!(
            target: "wasmgate::permissioned",
            policy = self.policy.name(),
            code_id = %code_id,
            "set_access_config"
        );
        self.keeper
            .set_access_config(ctx, code_id, caller, new_config, self.policy.as_ref())
    }
}
