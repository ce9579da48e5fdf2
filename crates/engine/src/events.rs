//! Keeper events
//!
//! One event is appended to the store for every successful operation. A
//! failed operation appends nothing, which makes the log a convenient
//! witness that no partial mutation happened.

use std::fmt;
use wasmgate_core::{AccessConfig, AccountAddress, Checksum, CodeId};

/// Record of a successful keeper operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeeperEvent {
    /// Code stored
    StoreCode {
        /// Assigned code id
        code_id: CodeId,
        /// Hash of the stored bytecode
        checksum: Checksum,
        /// Uploader
        creator: AccountAddress,
    },
    /// Contract instantiated
    Instantiate {
        /// New contract address
        contract: AccountAddress,
        /// Code the contract runs
        code_id: CodeId,
        /// Creator of the contract
        creator: AccountAddress,
    },
    /// Contract executed
    Execute {
        /// Executed contract
        contract: AccountAddress,
        /// Caller
        sender: AccountAddress,
    },
    /// Contract migrated to new code
    Migrate {
        /// Migrated contract
        contract: AccountAddress,
        /// New code id
        code_id: CodeId,
    },
    /// Privileged call into a contract
    Sudo {
        /// Called contract
        contract: AccountAddress,
    },
    /// Contract admin replaced or cleared
    UpdateContractAdmin {
        /// Affected contract
        contract: AccountAddress,
        /// New admin, `None` when cleared
        new_admin: Option<AccountAddress>,
    },
    /// Code pinned in the VM cache
    PinCode {
        /// Pinned code
        code_id: CodeId,
    },
    /// Code unpinned from the VM cache
    UnpinCode {
        /// Unpinned code
        code_id: CodeId,
    },
    /// Instantiate config of a code replaced
    UpdateCodeAccessConfig {
        /// Affected code
        code_id: CodeId,
        /// New config
        config: AccessConfig,
    },
    /// Contract info extension replaced
    SetContractExtension {
        /// Affected contract
        contract: AccountAddress,
    },
}

impl KeeperEvent {
    /// Event type name
    pub fn kind(&self) -> &'static str {
        match self {
            KeeperEvent::StoreCode { .. } => "store_code",
            KeeperEvent::Instantiate { .. } => "instantiate",
            KeeperEvent::Execute { .. } => "execute",
            KeeperEvent::Migrate { .. } => "migrate",
            KeeperEvent::Sudo { .. } => "sudo",
            KeeperEvent::UpdateContractAdmin { .. } => "update_contract_admin",
            KeeperEvent::PinCode { .. } => "pin_code",
            KeeperEvent::UnpinCode { .. } => "unpin_code",
            KeeperEvent::UpdateCodeAccessConfig { .. } => "update_code_access_config",
            KeeperEvent::SetContractExtension { .. } => "set_contract_extension",
        }
    }
}

impl fmt::Display for KeeperEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeeperEvent::StoreCode { code_id, checksum, .. } => {
                write!(f, "store_code code_id={} checksum={}", code_id, checksum)
            }
            KeeperEvent::Instantiate { contract, code_id, .. } => {
                write!(f, "instantiate contract={} code_id={}", contract, code_id)
            }
            KeeperEvent::Migrate { contract, code_id } => {
                write!(f, "migrate contract={} code_id={}", contract, code_id)
            }
            KeeperEvent::PinCode { code_id }
            | KeeperEvent::UnpinCode { code_id }
            | KeeperEvent::UpdateCodeAccessConfig { code_id, .. } => {
                write!(f, "{} code_id={}", self.kind(), code_id)
            }
            KeeperEvent::Execute { contract, .. }
            | KeeperEvent::Sudo { contract }
            | KeeperEvent::UpdateContractAdmin { contract, .. }
            | KeeperEvent::SetContractExtension { contract } => {
                write!(f, "{} contract={}", self.kind(), contract)
            }
        }
    }
}
