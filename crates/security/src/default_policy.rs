//! Default (permissionless) authorization policy
//!
//! Ownership rules apply as stored:
//! - Upload: chain upload config must allow the actor, and the requested
//!   instantiate config must stay inside the chain default
//! - Instantiate: the code's instantiate config must allow the actor
//! - Migrate / admin changes: only the current admin
//! - Code access changes: only the code creator, and only to a subset of the
//!   chain default

use wasmgate_core::{AccessConfig, AccountAddress, ChainAccessConfigs};

use crate::policy::{AuthorizationPolicy, PolicyAction};

/// Ownership-enforcing policy for ordinary transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultAuthorizationPolicy;

impl AuthorizationPolicy for DefaultAuthorizationPolicy {
    fn name(&self) -> &'static str {
        "default"
    }

    fn can_create_code(
        &self,
        chain: &ChainAccessConfigs,
        actor: &AccountAddress,
        requested: &AccessConfig,
    ) -> bool {
        chain.upload.allowed(actor) && requested.is_subset(&chain.instantiate_default)
    }

    fn can_instantiate_contract(
        &self,
        code_config: &AccessConfig,
        actor: &AccountAddress,
    ) -> bool {
        code_config.allowed(actor)
    }

    fn can_modify_contract(&self, admin: Option<&AccountAddress>, actor: &AccountAddress) -> bool {
        admin.is_some_and(|admin| admin == actor)
    }

    fn can_modify_code_access_config(
        &self,
        creator: &AccountAddress,
        actor: &AccountAddress,
        is_subset: bool,
    ) -> bool {
        creator == actor && is_subset
    }

    fn sub_message_policy(&self, _action: PolicyAction) -> Box<dyn AuthorizationPolicy> {
        Box::new(*self)
    }
}
