//! Public API layer for wasmgate
//!
//! This crate provides the contract lifecycle surface:
//! - **Decorated keeper**: the narrow capability trait a base keeper implements
//! - **Permissioned keeper**: the facade that binds an authorization policy
//!   and an address generator to each call before delegating
//!
//! ## Two-Layer Model
//!
//! ### Permissioned keeper (outward)
//!
//! Callers never pass a policy. The facade is built with one, either the
//! default ownership rules or the governance override, and attaches it to
//! every gated operation.
//!
//! ### Decorated keeper (inward)
//!
//! Every gated operation receives the policy explicitly and is responsible
//! for consulting it before mutating state.
//!
//! ## Architectural Invariant
//!
//! Every facade call **desugars to exactly one decorated keeper call**.
//! Errors pass through unchanged.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use wasmgate_api::{ContractOps, PermissionedKeeper};
//! use wasmgate_engine::{KeeperConfig, KeeperStore, MemoryKeeper};
//!
//! let facade = PermissionedKeeper::with_default_policy(Arc::new(MemoryKeeper::new(KeeperConfig::default())));
//! let mut store = KeeperStore::new();
//! let (code_id, checksum) = facade.create(&mut store, &creator, &wasm, None)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod decorated;
pub mod permissioned;

pub use decorated::DecoratedKeeper;
pub use permissioned::{ContractOps, PermissionedKeeper};
