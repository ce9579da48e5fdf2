//! Reference base keeper
//!
//! `MemoryKeeper` implements the contract lifecycle against a [`KeeperStore`].
//! Every gated operation asks the supplied [`AuthorizationPolicy`] before it
//! touches the store, and every operation finishes its validation before the
//! first mutation. A failed call leaves the store exactly as it found it.
//!
//! The keeper itself is stateless apart from its configuration and VM; one
//! instance can serve any number of stores.

use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};
use wasmgate_address::{AddressGenerator, ClassicAddressGenerator};
use wasmgate_core::{
    AccessConfig, AccountAddress, Checksum, CodeId, Coins, ContractInfoExtension,
    InstantiateRequest, KeeperError, KeeperResult,
};
use wasmgate_security::AuthorizationPolicy;

use crate::config::KeeperConfig;
use crate::events::KeeperEvent;
use crate::store::{
    CodeInfo, ContractCodeHistoryEntry, ContractInfo, HistoryOperation, KeeperStore,
};
use crate::vm::{ContractEnv, ContractVm, EchoVm, MessageInfo};

/// Log a denial and build the matching error
fn denied(policy: &dyn AuthorizationPolicy, op: &str, actor: &AccountAddress) -> KeeperError {
    warn!(
        target: "wasmgate::keeper",
        policy = policy.name(),
        op,
        actor = %actor,
        "Authorization denied"
    );
    KeeperError::unauthorized(format!("{} not permitted for {}", op, actor))
}

/// In-memory base keeper
#[derive(Debug, Clone, Default)]
pub struct MemoryKeeper<V = EchoVm> {
    config: KeeperConfig,
    vm: V,
}

impl MemoryKeeper<EchoVm> {
    /// Keeper with the echo VM
    pub fn new(config: KeeperConfig) -> Self {
        Self { config, vm: EchoVm }
    }
}

impl<V: ContractVm> MemoryKeeper<V> {
    /// Keeper with a custom VM
    pub fn with_vm(config: KeeperConfig, vm: V) -> Self {
        Self { config, vm }
    }

    /// Active configuration
    pub fn config(&self) -> &KeeperConfig {
        &self.config
    }

    /// Generator used for non-predictable instantiation
    pub fn classic_address_generator(&self) -> ClassicAddressGenerator {
        ClassicAddressGenerator
    }

    fn env(store: &KeeperStore, contract: &AccountAddress, code_id: CodeId) -> ContractEnv {
        ContractEnv {
            block: store.block().clone(),
            contract: contract.clone(),
            code_id,
        }
    }

    /// Store bytecode and return its code id and checksum
    ///
    /// Without an explicit `access` the code inherits the chain's default
    /// instantiate permission.
    pub fn store_code(
        &self,
        store: &mut KeeperStore,
        creator: &AccountAddress,
        wasm: &[u8],
        access: Option<&AccessConfig>,
        policy: &dyn AuthorizationPolicy,
    ) -> KeeperResult<(CodeId, Checksum)> {
        debug!(target: "wasmgate::keeper", creator = %creator, size = wasm.len(), "store_code");

        self.config.limits.validate_wasm_code(wasm)?;
        let chain = self.config.chain_access();
        let instantiate_config = access
            .cloned()
            .unwrap_or_else(|| chain.instantiate_default.clone());
        if !policy.can_create_code(&chain, creator, &instantiate_config) {
            return Err(denied(policy, "store_code", creator));
        }

        let checksum = Checksum::from_bytes(Sha256::digest(wasm).into());
        let info = CodeInfo {
            checksum,
            creator: creator.clone(),
            instantiate_config,
        };
        let code_id = store.insert_code(info, wasm.to_vec());
        store.emit(KeeperEvent::StoreCode {
            code_id,
            checksum,
            creator: creator.clone(),
        });

        info!(target: "wasmgate::keeper", code_id = %code_id, checksum = %checksum, "Code stored");
        Ok((code_id, checksum))
    }

    /// Instantiate a contract at the address chosen by `generator`
    ///
    /// Returns the new address and the data returned by the contract.
    pub fn instantiate(
        &self,
        store: &mut KeeperStore,
        request: &InstantiateRequest,
        generator: &dyn AddressGenerator,
        policy: &dyn AuthorizationPolicy,
    ) -> KeeperResult<(AccountAddress, Vec<u8>)> {
        debug!(
            target: "wasmgate::keeper",
            code_id = %request.code_id,
            creator = %request.creator,
            generator = ?generator,
            "instantiate"
        );

        let code = store.code(request.code_id)?.clone();
        if !policy.can_instantiate_contract(&code.instantiate_config, &request.creator) {
            return Err(denied(policy, "instantiate", &request.creator));
        }
        self.config.limits.validate_label(&request.label)?;
        if request.init_msg.is_empty() {
            return Err(KeeperError::invalid_input("instantiate message cannot be empty"));
        }

        // The classic generator consumes a sequence value; roll it back if
        // anything after this point fails.
        let sequence = store.instance_sequence();
        let result = self.instantiate_at(store, request, &code, generator);
        if result.is_err() {
            store.reset_instance_sequence(sequence);
        }
        result
    }

    fn instantiate_at(
        &self,
        store: &mut KeeperStore,
        request: &InstantiateRequest,
        code: &CodeInfo,
        generator: &dyn AddressGenerator,
    ) -> KeeperResult<(AccountAddress, Vec<u8>)> {
        let contract = generator.generate(store, request.code_id, &code.checksum)?;
        if store.has_contract(&contract) {
            return Err(KeeperError::DuplicateContract(contract));
        }

        let env = Self::env(store, &contract, request.code_id);
        let info = MessageInfo {
            sender: request.creator.clone(),
            funds: request.funds.clone(),
        };
        let data = self
            .vm
            .instantiate(&code.checksum, &env, &info, &request.init_msg)?;

        let height = store.block().height;
        store.insert_contract(
            contract.clone(),
            ContractInfo {
                code_id: request.code_id,
                creator: request.creator.clone(),
                admin: request.admin.clone(),
                label: request.label.clone(),
                created_height: height,
                extension: None,
            },
        );
        store.append_history(
            &contract,
            ContractCodeHistoryEntry {
                operation: HistoryOperation::Init,
                code_id: request.code_id,
                height,
                msg: request.init_msg.clone(),
            },
        );
        store.emit(KeeperEvent::Instantiate {
            contract: contract.clone(),
            code_id: request.code_id,
            creator: request.creator.clone(),
        });

        info!(
            target: "wasmgate::keeper",
            contract = %contract,
            code_id = %request.code_id,
            "Contract instantiated"
        );
        Ok((contract, data))
    }

    /// Call the contract's execute entry point
    pub fn execute(
        &self,
        store: &mut KeeperStore,
        contract: &AccountAddress,
        caller: &AccountAddress,
        msg: &[u8],
        funds: &Coins,
    ) -> KeeperResult<Vec<u8>> {
        debug!(target: "wasmgate::keeper", contract = %contract, caller = %caller, "execute");

        let code_id = store.contract(contract)?.code_id;
        let checksum = store.code(code_id)?.checksum;
        let env = Self::env(store, contract, code_id);
        let info = MessageInfo {
            sender: caller.clone(),
            funds: funds.clone(),
        };
        let data = self.vm.execute(&checksum, &env, &info, msg)?;

        store.emit(KeeperEvent::Execute {
            contract: contract.clone(),
            sender: caller.clone(),
        });
        Ok(data)
    }

    /// Move a contract to new code
    pub fn migrate(
        &self,
        store: &mut KeeperStore,
        contract: &AccountAddress,
        caller: &AccountAddress,
        new_code_id: CodeId,
        msg: &[u8],
        policy: &dyn AuthorizationPolicy,
    ) -> KeeperResult<Vec<u8>> {
        debug!(
            target: "wasmgate::keeper",
            contract = %contract,
            caller = %caller,
            new_code_id = %new_code_id,
            "migrate"
        );

        let admin = store.contract(contract)?.admin.clone();
        if !policy.can_modify_contract(admin.as_ref(), caller) {
            return Err(denied(policy, "migrate", caller));
        }
        let new_code = store.code(new_code_id)?;
        if !policy.can_instantiate_contract(&new_code.instantiate_config, caller) {
            return Err(denied(policy, "migrate", caller));
        }
        let checksum = new_code.checksum;

        let env = Self::env(store, contract, new_code_id);
        let data = self.vm.migrate(&checksum, &env, msg)?;

        let height = store.block().height;
        store.contract_mut(contract)?.code_id = new_code_id;
        store.append_history(
            contract,
            ContractCodeHistoryEntry {
                operation: HistoryOperation::Migrate,
                code_id: new_code_id,
                height,
                msg: msg.to_vec(),
            },
        );
        store.emit(KeeperEvent::Migrate {
            contract: contract.clone(),
            code_id: new_code_id,
        });

        info!(target: "wasmgate::keeper", contract = %contract, code_id = %new_code_id, "Contract migrated");
        Ok(data)
    }

    /// Privileged call into a contract; no caller identity is involved
    pub fn sudo(
        &self,
        store: &mut KeeperStore,
        contract: &AccountAddress,
        msg: &[u8],
    ) -> KeeperResult<Vec<u8>> {
        debug!(target: "wasmgate::keeper", contract = %contract, "sudo");

        let code_id = store.contract(contract)?.code_id;
        let checksum = store.code(code_id)?.checksum;
        let env = Self::env(store, contract, code_id);
        let data = self.vm.sudo(&checksum, &env, msg)?;

        store.emit(KeeperEvent::Sudo {
            contract: contract.clone(),
        });
        Ok(data)
    }

    /// Replace or clear (`new_admin = None`) the contract admin
    pub fn set_contract_admin(
        &self,
        store: &mut KeeperStore,
        contract: &AccountAddress,
        caller: &AccountAddress,
        new_admin: Option<&AccountAddress>,
        policy: &dyn AuthorizationPolicy,
    ) -> KeeperResult<()> {
        debug!(
            target: "wasmgate::keeper",
            contract = %contract,
            caller = %caller,
            clear = new_admin.is_none(),
            "set_contract_admin"
        );

        let info = store.contract(contract)?;
        if !policy.can_modify_contract(info.admin.as_ref(), caller) {
            return Err(denied(policy, "set_contract_admin", caller));
        }

        store.contract_mut(contract)?.admin = new_admin.cloned();
        store.emit(KeeperEvent::UpdateContractAdmin {
            contract: contract.clone(),
            new_admin: new_admin.cloned(),
        });
        Ok(())
    }

    /// Replace the instantiate config of stored code
    pub fn set_access_config(
        &self,
        store: &mut KeeperStore,
        code_id: CodeId,
        caller: &AccountAddress,
        new_config: &AccessConfig,
        policy: &dyn AuthorizationPolicy,
    ) -> KeeperResult<()> {
        debug!(target: "wasmgate::keeper", code_id = %code_id, caller = %caller, "set_access_config");

        let code = store.code(code_id)?;
        let is_subset = new_config.is_subset(&self.config.instantiate_default_permission);
        if !policy.can_modify_code_access_config(&code.creator, caller, is_subset) {
            return Err(denied(policy, "set_access_config", caller));
        }

        store.code_mut(code_id)?.instantiate_config = new_config.clone();
        store.emit(KeeperEvent::UpdateCodeAccessConfig {
            code_id,
            config: new_config.clone(),
        });
        Ok(())
    }

    /// Pin code in the VM cache
    pub fn pin_code(&self, store: &mut KeeperStore, code_id: CodeId) -> KeeperResult<()> {
        debug!(target: "wasmgate::keeper", code_id = %code_id, "pin_code");
        store.code(code_id)?;
        store.set_pinned(code_id, true);
        store.emit(KeeperEvent::PinCode { code_id });
        Ok(())
    }

    /// Unpin code from the VM cache
    pub fn unpin_code(&self, store: &mut KeeperStore, code_id: CodeId) -> KeeperResult<()> {
        debug!(target: "wasmgate::keeper", code_id = %code_id, "unpin_code");
        store.code(code_id)?;
        store.set_pinned(code_id, false);
        store.emit(KeeperEvent::UnpinCode { code_id });
        Ok(())
    }

    /// Attach an extension to contract info
    pub fn set_contract_info_extension(
        &self,
        store: &mut KeeperStore,
        contract: &AccountAddress,
        extension: ContractInfoExtension,
    ) -> KeeperResult<()> {
        debug!(target: "wasmgate::keeper", contract = %contract, "set_contract_info_extension");
        store.contract_mut(contract)?.extension = Some(extension);
        store.emit(KeeperEvent::SetContractExtension {
            contract: contract.clone(),
        });
        Ok(())
    }
}
