//! Governance authorization policy
//!
//! Models a privileged, protocol-level actor such as an on-chain governance
//! execution path. Every lifecycle decision is allowed regardless of caller,
//! access configuration, or contract admin.
//!
//! ## Sub-message propagation
//!
//! Contracts invoked under governance may dispatch further lifecycle
//! messages. Only actions listed in `propagate` keep governance rights;
//! everything else falls back to `DefaultAuthorizationPolicy`.

use std::collections::BTreeSet;
use wasmgate_core::{AccessConfig, AccountAddress, ChainAccessConfigs};

use crate::default_policy::DefaultAuthorizationPolicy;
use crate::policy::{AuthorizationPolicy, PolicyAction};

/// Unconditional policy for governance-executed operations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GovAuthorizationPolicy {
    propagate: BTreeSet<PolicyAction>,
}

impl GovAuthorizationPolicy {
    /// Governance policy that propagates to sub-messages of the given actions
    pub fn new(propagate: impl IntoIterator<Item = PolicyAction>) -> Self {
        Self {
            propagate: propagate.into_iter().collect(),
        }
    }

    /// Whether sub-messages of `action` keep governance rights
    pub fn propagates(&self, action: PolicyAction) -> bool {
        self.propagate.contains(&action)
    }
}

impl AuthorizationPolicy for GovAuthorizationPolicy {
    fn name(&self) -> &'static str {
        "governance"
    }

    fn can_create_code(
        &self,
        _chain: &ChainAccessConfigs,
        _actor: &AccountAddress,
        _requested: &AccessConfig,
    ) -> bool {
        true
    }

    fn can_instantiate_contract(
        &self,
        _code_config: &AccessConfig,
        _actor: &AccountAddress,
    ) -> bool {
        true
    }

    fn can_modify_contract(
        &self,
        _admin: Option<&AccountAddress>,
        _actor: &AccountAddress,
    ) -> bool {
        true
    }

    fn can_modify_code_access_config(
        &self,
        _creator: &AccountAddress,
        _actor: &AccountAddress,
        _is_subset: bool,
    ) -> bool {
        true
    }

    fn sub_message_policy(&self, action: PolicyAction) -> Box<dyn AuthorizationPolicy> {
        if self.propagates(action) {
            Box::new(self.clone())
        } else {
            Box::new(DefaultAuthorizationPolicy)
        }
    }
}
