//! Authorization policies for wasmgate.
//!
//! This crate provides the [`AuthorizationPolicy`] trait and the two regimes
//! shipped with the keeper:
//! - [`DefaultAuthorizationPolicy`]: ownership and allow-list checks
//! - [`GovAuthorizationPolicy`]: unconditional, for governance execution
//!
//! Policies are values injected into the facade at construction time. They
//! are stateless and shared through `Arc<dyn AuthorizationPolicy>`.

#![warn(missing_docs)]

pub mod default_policy;
pub mod gov_policy;
pub mod policy;

pub use default_policy::DefaultAuthorizationPolicy;
pub use gov_policy::GovAuthorizationPolicy;
pub use policy::{AuthorizationPolicy, PolicyAction};
