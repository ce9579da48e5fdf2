//! Reference contract keeper for wasmgate
//!
//! This crate provides the base keeper the permissioned facade delegates to:
//! - MemoryKeeper: Policy-checked contract lifecycle over an in-memory store
//! - KeeperStore: Execution context holding code, contracts, history, events
//! - ContractVm: Seam for executing contract entry points
//! - KeeperConfig: Chain access rules and limits from `wasmgate.toml`
//!
//! The keeper never decides authorization itself. Every gated call carries
//! the policy to consult.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod events;
pub mod keeper;
pub mod store;
pub mod vm;

pub use config::{GovernanceConfig, KeeperConfig, CONFIG_FILE_NAME};
pub use events::KeeperEvent;
pub use keeper::MemoryKeeper;
pub use store::{
    BlockInfo, CodeInfo, ContractCodeHistoryEntry, ContractInfo, HistoryOperation, KeeperStore,
};
pub use vm::{ContractEnv, ContractVm, EchoVm, MessageInfo};
