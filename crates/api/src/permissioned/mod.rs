//! Permissioned keeper - the outward contract lifecycle surface
//!
//! `PermissionedKeeper` binds one authorization policy at construction time
//! and attaches it to every gated call it forwards to a [`DecoratedKeeper`].
//! Instantiation additionally binds an address generator. The facade does
//! no validation of its own and returns base keeper errors unchanged.
//!
//! ## Desugaring
//!
//! | Facade | Base keeper |
//! |--------|-------------|
//! | `create(creator, wasm, access)` | `create(.., policy)` |
//! | `instantiate(request)` | `instantiate(request, classic_address_generator(), policy)` |
//! | `instantiate2(request, salt, fix_msg)` | `instantiate(request, Predictable(creator, salt, msg, fix_msg), policy)` |
//! | `execute(..)` | `execute(..)` |
//! | `migrate(..)` | `migrate(.., policy)` |
//! | `sudo(..)` | `sudo(..)` |
//! | `update_contract_admin(.., admin)` | `set_contract_admin(.., Some(admin), policy)` |
//! | `clear_contract_admin(..)` | `set_contract_admin(.., None, policy)` |
//! | `pin_code` / `unpin_code` | `pin_code` / `unpin_code` |
//! | `set_contract_info_extension(..)` | `set_contract_info_extension(..)` |
//! | `set_access_config(..)` | `set_access_config(.., policy)` |
//!
//! [`DecoratedKeeper`]: crate::decorated::DecoratedKeeper

mod impl_;

pub use impl_::PermissionedKeeper;

use wasmgate_core::{
    AccessConfig, AccountAddress, Checksum, CodeId, Coins, ContractInfoExtension,
    InstantiateRequest, KeeperResult,
};

/// Contract lifecycle operations with authorization bound in
///
/// ## Example
///
/// ```ignore
/// let keeper = PermissionedKeeper::with_default_policy(Arc::new(MemoryKeeper::new(KeeperConfig::default())));
/// let mut store = KeeperStore::new();
///
/// let (code_id, _) = keeper.create(&mut store, &creator, &wasm, None)?;
/// let request = InstantiateRequest::new(code_id, creator.clone(), b"{}".to_vec(), "demo");
/// let (addr, _) = keeper.instantiate2(&mut store, &request, b"salt", false)?;
/// ```
pub trait ContractOps {
    /// Execution context operations run against
    type Context;

    /// Store bytecode, optionally with an explicit instantiate config
    fn create(
        &self,
        ctx: &mut Self::Context,
        creator: &AccountAddress,
        wasm: &[u8],
        access: Option<&AccessConfig>,
    ) -> KeeperResult<(CodeId, Checksum)>;

    /// Instantiate at a sequence-derived address
    fn instantiate(
        &self,
        ctx: &mut Self::Context,
        request: &InstantiateRequest,
    ) -> KeeperResult<(AccountAddress, Vec<u8>)>;

    /// Instantiate at an address derived from `(checksum, creator, salt)`,
    /// plus the instantiate message when `fix_msg` is set
    fn instantiate2(
        &self,
        ctx: &mut Self::Context,
        request: &InstantiateRequest,
        salt: &[u8],
        fix_msg: bool,
    ) -> KeeperResult<(AccountAddress, Vec<u8>)>;

    /// Call the execute entry point
    fn execute(
        &self,
        ctx: &mut Self::Context,
        contract: &AccountAddress,
        caller: &AccountAddress,
        msg: &[u8],
        funds: &Coins,
    ) -> KeeperResult<Vec<u8>>;

    /// Move a contract to new code
    fn migrate(
        &self,
        ctx: &mut Self::Context,
        contract: &AccountAddress,
        caller: &AccountAddress,
        new_code_id: CodeId,
        msg: &[u8],
    ) -> KeeperResult<Vec<u8>>;

    /// Privileged call into a contract
    fn sudo(
        &self,
        ctx: &mut Self::Context,
        contract: &AccountAddress,
        msg: &[u8],
    ) -> KeeperResult<Vec<u8>>;

    /// Hand admin rights to `new_admin`
    fn update_contract_admin(
        &self,
        ctx: &mut Self::Context,
        contract: &AccountAddress,
        caller: &AccountAddress,
        new_admin: &AccountAddress,
    ) -> KeeperResult<()>;

    /// Remove the admin
    fn clear_contract_admin(
        &self,
        ctx: &mut Self::Context,
        contract: &AccountAddress,
        caller: &AccountAddress,
    ) -> KeeperResult<()>;

    /// Pin code in the VM cache
    fn pin_code(&self, ctx: &mut Self::Context, code_id: CodeId) -> KeeperResult<()>;

    /// Unpin code from the VM cache
    fn unpin_code(&self, ctx: &mut Self::Context, code_id: CodeId) -> KeeperResult<()>;

    /// Attach an extension to contract info
    fn set_contract_info_extension(
        &self,
        ctx: &mut Self::Context,
        contract: &AccountAddress,
        extension: ContractInfoExtension,
    ) -> KeeperResult<()>;

    /// Replace the instantiate config of stored code
    fn set_access_config(
        &self,
        ctx: &mut Self::Context,
        code_id: CodeId,
        caller: &AccountAddress,
        new_config: &AccessConfig,
    ) -> KeeperResult<()>;
}
