//! Integration tests for the permissioned keeper.
//!
//! These run the facade against the in-memory reference keeper and check
//! the lifecycle end to end: code upload, both address schemes, admin
//! control under each policy regime, and configuration loaded from disk.
//! Facade routing against a recording stub is covered by the unit tests
//! in crates/api.

#[path = "../common/mod.rs"]
mod common;

mod addresses;
mod admin;
mod authorization;
mod config;
mod passthrough;
