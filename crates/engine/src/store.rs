//! Keeper store
//!
//! `KeeperStore` is the execution context handed to every keeper operation:
//! it holds the current block and all persisted keeper state (code,
//! contracts, history, sequences, pins, events). One store corresponds to
//! one chain state; operations on it run sequentially.
//!
//! Reads are public. Mutation is crate-private so that every change goes
//! through `MemoryKeeper`, which checks authorization first.

use std::collections::{BTreeMap, BTreeSet};
use wasmgate_address::CreationContext;
use wasmgate_core::{
    AccessConfig, AccountAddress, Checksum, CodeId, ContractInfoExtension, KeeperError,
    KeeperResult,
};

use crate::events::KeeperEvent;

/// Current block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockInfo {
    /// Block height
    pub height: u64,
    /// Block time in nanoseconds since the Unix epoch
    pub time_nanos: u64,
    /// Chain identifier
    pub chain_id: String,
}

impl Default for BlockInfo {
    fn default() -> Self {
        Self {
            height: 1,
            time_nanos: 0,
            chain_id: "wasmgate-local".to_string(),
        }
    }
}

/// Metadata of stored code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeInfo {
    /// SHA-256 of the bytecode
    pub checksum: Checksum,
    /// Uploader
    pub creator: AccountAddress,
    /// Who may instantiate from this code
    pub instantiate_config: AccessConfig,
}

/// Metadata of a contract instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractInfo {
    /// Code the contract currently runs
    pub code_id: CodeId,
    /// Account that instantiated the contract
    pub creator: AccountAddress,
    /// Account allowed to migrate the contract, if any
    pub admin: Option<AccountAddress>,
    /// Human-readable label
    pub label: String,
    /// Block height at instantiation
    pub created_height: u64,
    /// Extra attributes
    pub extension: Option<ContractInfoExtension>,
}

/// Kind of code change recorded in contract history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOperation {
    /// Instantiation
    Init,
    /// Migration
    Migrate,
}

/// One code change of a contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCodeHistoryEntry {
    /// Kind of change
    pub operation: HistoryOperation,
    /// Code id after the change
    pub code_id: CodeId,
    /// Block height of the change
    pub height: u64,
    /// Message passed to the contract
    pub msg: Vec<u8>,
}

/// In-memory keeper state and execution context
#[derive(Debug, Default)]
pub struct KeeperStore {
    block: BlockInfo,
    last_code_id: u64,
    last_instance_id: u64,
    codes: BTreeMap<CodeId, CodeInfo>,
    wasm: BTreeMap<CodeId, Vec<u8>>,
    contracts: BTreeMap<AccountAddress, ContractInfo>,
    history: BTreeMap<AccountAddress, Vec<ContractCodeHistoryEntry>>,
    pinned: BTreeSet<CodeId>,
    events: Vec<KeeperEvent>,
}

impl KeeperStore {
    /// Empty store at the default block
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store at the given block
    pub fn with_block(block: BlockInfo) -> Self {
        Self {
            block,
            ..Self::default()
        }
    }

    /// Current block
    pub fn block(&self) -> &BlockInfo {
        &self.block
    }

    /// Advance to the next block
    pub fn next_block(&mut self, time_step_nanos: u64) {
        self.block.height += 1;
        self.block.time_nanos += time_step_nanos;
    }

    /// Metadata of a stored code
    pub fn code_info(&self, code_id: CodeId) -> Option<&CodeInfo> {
        self.codes.get(&code_id)
    }

    /// Bytecode of a stored code
    pub fn wasm_code(&self, code_id: CodeId) -> Option<&[u8]> {
        self.wasm.get(&code_id).map(Vec::as_slice)
    }

    /// Metadata of a contract
    pub fn contract_info(&self, contract: &AccountAddress) -> Option<&ContractInfo> {
        self.contracts.get(contract)
    }

    /// Whether a contract exists at `contract`
    pub fn has_contract(&self, contract: &AccountAddress) -> bool {
        self.contracts.contains_key(contract)
    }

    /// Code changes of a contract, oldest first
    pub fn contract_history(&self, contract: &AccountAddress) -> &[ContractCodeHistoryEntry] {
        self.history.get(contract).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Contracts currently running `code_id`
    pub fn contracts_by_code(&self, code_id: CodeId) -> Vec<&AccountAddress> {
        self.contracts
            .iter()
            .filter(|(_, info)| info.code_id == code_id)
            .map(|(addr, _)| addr)
            .collect()
    }

    /// Whether `code_id` is pinned
    pub fn is_pinned(&self, code_id: CodeId) -> bool {
        self.pinned.contains(&code_id)
    }

    /// Number of stored codes
    pub fn code_count(&self) -> usize {
        self.codes.len()
    }

    /// Number of contracts
    pub fn contract_count(&self) -> usize {
        self.contracts.len()
    }

    /// Events of all successful operations, oldest first
    pub fn events(&self) -> &[KeeperEvent] {
        &self.events
    }

    // ------------------------------------------------------------------
    // Crate-private mutation
    // ------------------------------------------------------------------

    pub(crate) fn code(&self, code_id: CodeId) -> KeeperResult<&CodeInfo> {
        self.codes
            .get(&code_id)
            .ok_or(KeeperError::CodeNotFound(code_id))
    }

    pub(crate) fn contract(&self, contract: &AccountAddress) -> KeeperResult<&ContractInfo> {
        self.contracts
            .get(contract)
            .ok_or_else(|| KeeperError::ContractNotFound(contract.clone()))
    }

    pub(crate) fn contract_mut(
        &mut self,
        contract: &AccountAddress,
    ) -> KeeperResult<&mut ContractInfo> {
        self.contracts
            .get_mut(contract)
            .ok_or_else(|| KeeperError::ContractNotFound(contract.clone()))
    }

    pub(crate) fn code_mut(&mut self, code_id: CodeId) -> KeeperResult<&mut CodeInfo> {
        self.codes
            .get_mut(&code_id)
            .ok_or(KeeperError::CodeNotFound(code_id))
    }

    pub(crate) fn insert_code(&mut self, info: CodeInfo, wasm: Vec<u8>) -> CodeId {
        self.last_code_id += 1;
        let code_id = CodeId::new(self.last_code_id);
        self.codes.insert(code_id, info);
        self.wasm.insert(code_id, wasm);
        code_id
    }

    pub(crate) fn insert_contract(&mut self, contract: AccountAddress, info: ContractInfo) {
        self.contracts.insert(contract, info);
    }

    pub(crate) fn append_history(
        &mut self,
        contract: &AccountAddress,
        entry: ContractCodeHistoryEntry,
    ) {
        self.history.entry(contract.clone()).or_default().push(entry);
    }

    pub(crate) fn instance_sequence(&self) -> u64 {
        self.last_instance_id
    }

    pub(crate) fn reset_instance_sequence(&mut self, value: u64) {
        self.last_instance_id = value;
    }

    pub(crate) fn set_pinned(&mut self, code_id: CodeId, pinned: bool) {
        if pinned {
            self.pinned.insert(code_id);
        } else {
            self.pinned.remove(&code_id);
        }
    }

    pub(crate) fn emit(&mut self, event: KeeperEvent) {
        self.events.push(event);
    }
}

impl CreationContext for KeeperStore {
    fn next_instance_id(&mut self) -> u64 {
        self.last_instance_id += 1;
        self.last_instance_id
    }
}
