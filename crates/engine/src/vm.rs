//! Contract VM seam
//!
//! The keeper never interprets bytecode itself. Entry points are dispatched
//! to a `ContractVm`, which returns the contract's response data or an
//! error. A VM must not touch keeper state; the keeper commits only after
//! the VM call succeeds.

use wasmgate_core::{AccountAddress, Checksum, Coins, CodeId, KeeperResult};

use crate::store::BlockInfo;

/// Environment visible to a contract call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractEnv {
    /// Current block
    pub block: BlockInfo,
    /// Address of the called contract
    pub contract: AccountAddress,
    /// Code the call runs
    pub code_id: CodeId,
}

/// Sender and funds of a contract call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageInfo {
    /// Caller
    pub sender: AccountAddress,
    /// Funds sent with the call
    pub funds: Coins,
}

/// Executes contract entry points
pub trait ContractVm: Send + Sync {
    /// Run the `instantiate` entry point
    fn instantiate(
        &self,
        checksum: &Checksum,
        env: &ContractEnv,
        info: &MessageInfo,
        msg: &[u8],
    ) -> KeeperResult<Vec<u8>>;

    /// Run the `execute` entry point
    fn execute(
        &self,
        checksum: &Checksum,
        env: &ContractEnv,
        info: &MessageInfo,
        msg: &[u8],
    ) -> KeeperResult<Vec<u8>>;

    /// Run the `migrate` entry point of the new code
    fn migrate(&self, checksum: &Checksum, env: &ContractEnv, msg: &[u8])
        -> KeeperResult<Vec<u8>>;

    /// Run the `sudo` entry point
    fn sudo(&self, checksum: &Checksum, env: &ContractEnv, msg: &[u8]) -> KeeperResult<Vec<u8>>;
}

/// VM that answers every call with the message it received
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoVm;

impl ContractVm for EchoVm {
    fn instantiate(
        &self,
        _checksum: &Checksum,
        _env: &ContractEnv,
        _info: &MessageInfo,
        msg: &[u8],
    ) -> KeeperResult<Vec<u8>> {
        Ok(msg.to_vec())
    }

    fn execute(
        &self,
        _checksum: &Checksum,
        _env: &ContractEnv,
        _info: &MessageInfo,
        msg: &[u8],
    ) -> KeeperResult<Vec<u8>> {
        Ok(msg.to_vec())
    }

    fn migrate(
        &self,
        _checksum: &Checksum,
        _env: &ContractEnv,
        msg: &[u8],
    ) -> KeeperResult<Vec<u8>> {
        Ok(msg.to_vec())
    }

    fn sudo(&self, _checksum: &Checksum, _env: &ContractEnv, msg: &[u8]) -> KeeperResult<Vec<u8>> {
        Ok(msg.to_vec())
    }
}
