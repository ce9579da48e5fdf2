//! Access configuration for stored code
//!
//! An `AccessConfig` says who may instantiate contracts from a code id, or,
//! at chain level, who may upload code at all. The base keeper stores it on
//! code metadata; policies evaluate it.
//!
//! ## Subset relation
//!
//! `a.is_subset(b)` holds when every actor allowed by `a` is also allowed by
//! `b`. It is used to keep per-code configs inside the chain default.
//!
//! | Superset | Accepted subsets |
//! |----------|------------------|
//! | `Everybody` | anything |
//! | `Nobody` | `Nobody` |
//! | `OnlyAddress{x}` | `Nobody`, `OnlyAddress{x}`, `AnyOfAddresses` containing only `x` |
//! | `AnyOfAddresses{S}` | `Nobody`, `OnlyAddress{a ∈ S}`, `AnyOfAddresses{T ⊆ S}` |

use serde::{Deserialize, Serialize};

use crate::types::AccountAddress;

/// Who may perform an access-controlled action
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "permission", rename_all = "snake_case")]
pub enum AccessConfig {
    /// No one
    Nobody,
    /// A single owner
    OnlyAddress {
        /// The allowed actor
        address: AccountAddress,
    },
    /// Any actor on an allow-list
    AnyOfAddresses {
        /// The allowed actors
        addresses: Vec<AccountAddress>,
    },
    /// Any actor (default)
    #[default]
    Everybody,
}

impl AccessConfig {
    /// Allow-list config from any iterator of addresses
    pub fn any_of(addresses: impl IntoIterator<Item = AccountAddress>) -> Self {
        AccessConfig::AnyOfAddresses {
            addresses: addresses.into_iter().collect(),
        }
    }

    /// Single-owner config
    pub fn only(address: AccountAddress) -> Self {
        AccessConfig::OnlyAddress { address }
    }

    /// Whether `actor` is allowed by this config
    pub fn allowed(&self, actor: &AccountAddress) -> bool {
        match self {
            AccessConfig::Nobody => false,
            AccessConfig::OnlyAddress { address } => address == actor,
            AccessConfig::AnyOfAddresses { addresses } => addresses.contains(actor),
            AccessConfig::Everybody => true,
        }
    }

    /// Whether every actor allowed by `self` is allowed by `superset`
    pub fn is_subset(&self, superset: &AccessConfig) -> bool {
        match superset {
            AccessConfig::Everybody => true,
            AccessConfig::Nobody => matches!(self, AccessConfig::Nobody),
            AccessConfig::OnlyAddress { address: owner } => match self {
                AccessConfig::Nobody => true,
                AccessConfig::OnlyAddress { address } => address == owner,
                AccessConfig::AnyOfAddresses { addresses } => {
                    !addresses.is_empty() && addresses.iter().all(|a| a == owner)
                }
                AccessConfig::Everybody => false,
            },
            AccessConfig::AnyOfAddresses { addresses: allowed } => match self {
                AccessConfig::Nobody => true,
                AccessConfig::OnlyAddress { address } => allowed.contains(address),
                AccessConfig::AnyOfAddresses { addresses } => {
                    addresses.iter().all(|a| allowed.contains(a))
                }
                AccessConfig::Everybody => false,
            },
        }
    }
}

/// Chain-wide access rules
///
/// `upload` gates code storage; `instantiate_default` is assigned to code
/// stored without an explicit config and bounds every per-code config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainAccessConfigs {
    /// Who may store code
    #[serde(default)]
    pub upload: AccessConfig,
    /// Default and upper bound for per-code instantiate configs
    #[serde(default)]
    pub instantiate_default: AccessConfig,
}

impl ChainAccessConfigs {
    /// Create chain configs
    pub fn new(upload: AccessConfig, instantiate_default: AccessConfig) -> Self {
        Self {
            upload,
            instantiate_default,
        }
    }
}
