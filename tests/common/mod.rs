//! Shared test utilities for the integration suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use std::sync::{Arc, Once};

pub use wasmgate::{
    AccessConfig, AccountAddress, CodeId, Coins, ContractOps, InstantiateRequest, KeeperConfig,
    KeeperError, KeeperEvent, KeeperStore, MemoryKeeper, PermissionedKeeper,
};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Install a test-writer subscriber once per process.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

/// Minimal module header, enough for the echo VM.
pub const WASM: &[u8] = b"\0asm\x01\0\0\0";

/// 20-byte address filled with `b`.
pub fn addr(b: u8) -> AccountAddress {
    AccountAddress::new(vec![b; 20])
}

/// Creator used throughout the scenarios.
pub fn creator() -> AccountAddress {
    addr(0xc1)
}

/// Test harness: one shared keeper, one store, and a facade per regime.
pub struct Chain {
    pub keeper: Arc<MemoryKeeper>,
    pub store: KeeperStore,
    pub default: PermissionedKeeper<MemoryKeeper>,
    pub gov: PermissionedKeeper<MemoryKeeper>,
}

impl Chain {
    /// Chain with default configuration.
    pub fn new() -> Self {
        Self::with_config(KeeperConfig::default())
    }

    /// Chain with the given keeper configuration.
    pub fn with_config(config: KeeperConfig) -> Self {
        init_tracing();
        let keeper = Arc::new(MemoryKeeper::new(config));
        Chain {
            default: PermissionedKeeper::with_default_policy(Arc::clone(&keeper)),
            gov: PermissionedKeeper::with_gov_policy(Arc::clone(&keeper)),
            keeper,
            store: KeeperStore::new(),
        }
    }

    /// Store `WASM` as `creator()` through the default facade.
    pub fn upload(&mut self) -> CodeId {
        self.default
            .create(&mut self.store, &creator(), WASM, None)
            .unwrap()
            .0
    }

    /// Classic instantiation by `creator()` with an optional admin.
    pub fn instantiate(&mut self, code_id: CodeId, admin: Option<AccountAddress>) -> AccountAddress {
        let mut request = InstantiateRequest::new(code_id, creator(), b"{}".to_vec(), "contract");
        request.admin = admin;
        self.default.instantiate(&mut self.store, &request).unwrap().0
    }

    /// Number of events recorded so far.
    pub fn event_count(&self) -> usize {
        self.store.events().len()
    }
}
