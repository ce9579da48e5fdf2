//! `DecoratedKeeper` for the in-memory reference keeper
//!
//! A thin mapping: each boundary operation forwards to the matching
//! `MemoryKeeper` method with the `KeeperStore` as context.

use wasmgate_address::AddressGenerator;
use wasmgate_core::{
    AccessConfig, AccountAddress, Checksum, CodeId, Coins, ContractInfoExtension,
    InstantiateRequest, KeeperResult,
};
use wasmgate_engine::{ContractVm, KeeperStore, MemoryKeeper};
use wasmgate_security::AuthorizationPolicy;

use super::DecoratedKeeper;

impl<V: ContractVm> DecoratedKeeper for MemoryKeeper<V> {
    type Context = KeeperStore;

    fn create(
        &self,
        ctx: &mut KeeperStore,
        creator: &AccountAddress,
        wasm: &[u8],
        access: Option<&AccessConfig>,
        policy: &dyn AuthorizationPolicy,
    ) -> KeeperResult<(CodeId, Checksum)> {
        self.store_code(ctx, creator, wasm, access, policy)
    }

    fn instantiate(
        &self,
        ctx: &mut KeeperStore,
        request: &InstantiateRequest,
        generator: &dyn AddressGenerator,
        policy: &dyn AuthorizationPolicy,
    ) -> KeeperResult<(AccountAddress, Vec<u8>)> {
        MemoryKeeper::instantiate(self, ctx, request, generator, policy)
    }

    fn migrate(
        &self,
        ctx: &mut KeeperStore,
        contract: &AccountAddress,
        caller: &AccountAddress,
        new_code_id: CodeId,
        msg: &[u8],
        policy: &dyn AuthorizationPolicy,
    ) -> KeeperResult<Vec<u8>> {
        MemoryKeeper::migrate(self, ctx, contract, caller, new_code_id, msg, policy)
    }

    fn set_contract_admin(
        &self,
        ctx: &mut KeeperStore,
        contract: &AccountAddress,
        caller: &AccountAddress,
        new_admin: Option<&AccountAddress>,
        policy: &dyn AuthorizationPolicy,
    ) -> KeeperResult<()> {
        MemoryKeeper::set_contract_admin(self, ctx, contract, caller, new_admin, policy)
    }

    fn set_access_config(
        &self,
        ctx: &mut KeeperStore,
        code_id: CodeId,
        caller: &AccountAddress,
        new_config: &AccessConfig,
        policy: &dyn AuthorizationPolicy,
    ) -> KeeperResult<()> {
        MemoryKeeper::set_access_config(self, ctx, code_id, caller, new_config, policy)
    }

    fn pin_code(&self, ctx: &mut KeeperStore, code_id: CodeId) -> KeeperResult<()> {
        MemoryKeeper::pin_code(self, ctx, code_id)
    }

    fn unpin_code(&self, ctx: &mut KeeperStore, code_id: CodeId) -> KeeperResult<()> {
        MemoryKeeper::unpin_code(self, ctx, code_id)
    }

    fn execute(
        &self,
        ctx: &mut KeeperStore,
        contract: &AccountAddress,
        caller: &AccountAddress,
        msg: &[u8],
        funds: &Coins,
    ) -> KeeperResult<Vec<u8>> {
        MemoryKeeper::execute(self, ctx, contract, caller, msg, funds)
    }

    fn sudo(
        &self,
        ctx: &mut KeeperStore,
        contract: &AccountAddress,
        msg: &[u8],
    ) -> KeeperResult<Vec<u8>> {
        MemoryKeeper::sudo(self, ctx, contract, msg)
    }

    fn set_contract_info_extension(
        &self,
        ctx: &mut KeeperStore,
        contract: &AccountAddress,
        extension: ContractInfoExtension,
    ) -> KeeperResult<()> {
        MemoryKeeper::set_contract_info_extension(self, ctx, contract, extension)
    }

    fn classic_address_generator(&self) -> Box<dyn AddressGenerator> {
        Box::new(MemoryKeeper::classic_address_generator(self))
    }
}
