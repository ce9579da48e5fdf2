//! Keeper configuration via `wasmgate.toml`
//!
//! Chain-wide access rules, governance propagation, and input limits live
//! in a single TOML file. To change settings, edit the file and restart.

use serde::{Deserialize, Serialize};
use std::path::Path;
use wasmgate_core::{AccessConfig, ChainAccessConfigs, KeeperError, KeeperResult, Limits};
use wasmgate_security::{GovAuthorizationPolicy, PolicyAction};

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "wasmgate.toml";

/// Governance policy settings, persisted under `[governance]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceConfig {
    /// Lifecycle actions whose sub-messages keep governance rights
    #[serde(default)]
    pub propagate: Vec<PolicyAction>,
}

/// Keeper configuration loaded from `wasmgate.toml`.
///
/// # Example
///
/// ```toml
/// [upload_access]
/// permission = "any_of_addresses"
/// addresses = ["0a0b0c"]
///
/// [instantiate_default_permission]
/// permission = "everybody"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeeperConfig {
    /// Who may store code.
    #[serde(default)]
    pub upload_access: AccessConfig,
    /// Instantiate config given to code stored without one; also the upper
    /// bound for per-code configs.
    #[serde(default)]
    pub instantiate_default_permission: AccessConfig,
    /// Governance policy settings.
    #[serde(default)]
    pub governance: GovernanceConfig,
    /// Input size limits.
    #[serde(default)]
    pub limits: Limits,
}

impl KeeperConfig {
    /// Chain-wide access rules as seen by authorization policies.
    pub fn chain_access(&self) -> ChainAccessConfigs {
        ChainAccessConfigs::new(
            self.upload_access.clone(),
            self.instantiate_default_permission.clone(),
        )
    }

    /// Governance policy with the configured propagation set.
    pub fn gov_policy(&self) -> GovAuthorizationPolicy {
        GovAuthorizationPolicy::new(self.governance.propagate.iter().copied())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Wasmgate keeper configuration
#
# Access configs take a "permission" of:
#   "everybody", "nobody",
#   "only_address"      (with address = "<hex>"),
#   "any_of_addresses"  (with addresses = ["<hex>", ...])

# Who may store code.
[upload_access]
permission = "everybody"

# Instantiate permission for code stored without an explicit config.
# Per-code configs must stay inside it.
[instantiate_default_permission]
permission = "everybody"

# Sub-messages of these actions keep governance rights: "instantiate", "migrate".
[governance]
propagate = []

[limits]
max_wasm_code_bytes = 819200
max_label_bytes = 128
"#
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> KeeperResult<Self> {
        toml::from_str(content)
            .map_err(|e| KeeperError::config(format!("Failed to parse config: {}", e)))
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> KeeperResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            KeeperError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            KeeperError::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> KeeperResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                KeeperError::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> KeeperResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| KeeperError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            KeeperError::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
