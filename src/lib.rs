//! Wasmgate - authorization gate for smart-contract lifecycle operations
//!
//! Wasmgate decides, for every operation that changes code, contract
//! identity, admin ownership, or access configuration, whether the caller is
//! permitted to perform it, and derives the address of newly instantiated
//! contracts.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use wasmgate::{
//!     ContractOps, InstantiateRequest, KeeperConfig, KeeperStore, MemoryKeeper, PermissionedKeeper,
//! };
//!
//! let facade = PermissionedKeeper::with_default_policy(Arc::new(MemoryKeeper::new(KeeperConfig::default())));
//! let mut store = KeeperStore::new();
//!
//! let (code_id, _) = facade.create(&mut store, &creator, &wasm, None)?;
//! let request = InstantiateRequest::new(code_id, creator.clone(), b"{}".to_vec(), "demo");
//! let (contract, _) = facade.instantiate2(&mut store, &request, b"salt", false)?;
//! ```
//!
//! # Architecture
//!
//! [`PermissionedKeeper`] binds an [`AuthorizationPolicy`] and, for
//! instantiation, an [`AddressGenerator`] to each call, then delegates to a
//! [`DecoratedKeeper`]. [`MemoryKeeper`] is the bundled base keeper.

pub use wasmgate_address::{
    build_contract_address_classic, build_contract_address_predictable, module_address,
    AddressGenerator, ClassicAddressGenerator, CreationContext, PredictableAddressGenerator,
};
pub use wasmgate_api::{ContractOps, DecoratedKeeper, PermissionedKeeper};
pub use wasmgate_core::{
    AccessConfig, AccountAddress, ChainAccessConfigs, Checksum, CodeId, Coin, Coins,
    ContractInfoExtension, InstantiateRequest, KeeperError, KeeperResult, Limits,
};
pub use wasmgate_engine::{
    BlockInfo, CodeInfo, ContractCodeHistoryEntry, ContractEnv, ContractInfo, ContractVm,
    EchoVm, GovernanceConfig, HistoryOperation, KeeperConfig, KeeperEvent, KeeperStore,
    MemoryKeeper, MessageInfo, CONFIG_FILE_NAME,
};
pub use wasmgate_security::{
    AuthorizationPolicy, DefaultAuthorizationPolicy, GovAuthorizationPolicy, PolicyAction,
};
