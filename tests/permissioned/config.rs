//! Keeper configuration loaded from disk.

use crate::common::*;
use tempfile::TempDir;
use wasmgate::{PolicyAction, CONFIG_FILE_NAME};

fn load(content: &str) -> KeeperConfig {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, content).unwrap();
    KeeperConfig::from_file(&path).unwrap()
}

#[test]
fn test_default_file_gives_permissionless_chain() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    KeeperConfig::write_default_if_missing(&path).unwrap();

    let mut chain = Chain::with_config(KeeperConfig::from_file(&path).unwrap());
    let code_id = chain
        .default
        .create(&mut chain.store, &addr(0x77), WASM, None)
        .unwrap()
        .0;
    assert_eq!(
        chain.store.code_info(code_id).unwrap().instantiate_config,
        AccessConfig::Everybody
    );
}

#[test]
fn test_upload_allow_list() {
    let uploader = addr(0x0a);
    let config = load(&format!(
        "[upload_access]\npermission = \"any_of_addresses\"\naddresses = [\"{}\"]\n",
        uploader
    ));
    let mut chain = Chain::with_config(config);

    let err = chain
        .default
        .create(&mut chain.store, &addr(0x0b), WASM, None)
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(chain.store.code_count(), 0);

    chain
        .default
        .create(&mut chain.store, &uploader, WASM, None)
        .unwrap();
    chain
        .gov
        .create(&mut chain.store, &addr(0x0b), WASM, None)
        .unwrap();
    assert_eq!(chain.store.code_count(), 2);
}

#[test]
fn test_instantiate_default_caps_requested_config() {
    let owner = addr(0x0a);
    let config = load(&format!(
        "[instantiate_default_permission]\npermission = \"only_address\"\naddress = \"{}\"\n",
        owner
    ));
    let mut chain = Chain::with_config(config);

    // Code without an explicit config inherits the chain default.
    let (code_id, _) = chain
        .default
        .create(&mut chain.store, &owner, WASM, None)
        .unwrap();
    assert_eq!(
        chain.store.code_info(code_id).unwrap().instantiate_config,
        AccessConfig::only(owner.clone())
    );

    // Asking for more than the default is refused.
    let err = chain
        .default
        .create(&mut chain.store, &owner, WASM, Some(&AccessConfig::Everybody))
        .unwrap_err();
    assert!(err.is_unauthorized());
}

#[test]
fn test_governance_propagation_from_config() {
    let config = load("[governance]\npropagate = [\"migrate\"]\n");
    let policy = config.gov_policy();
    assert!(policy.propagates(PolicyAction::Migrate));

    let keeper = std::sync::Arc::new(MemoryKeeper::new(config));
    let facade = PermissionedKeeper::new(keeper, std::sync::Arc::new(policy));
    assert_eq!(
        facade.for_sub_message(PolicyAction::Migrate).policy().name(),
        "governance"
    );
    assert_eq!(
        facade.for_sub_message(PolicyAction::Instantiate).policy().name(),
        "default"
    );
}

#[test]
fn test_limits_from_config() {
    let config = load("[limits]\nmax_wasm_code_bytes = 4\nmax_label_bytes = 3\n");
    let mut chain = Chain::with_config(config);

    let err = chain
        .default
        .create(&mut chain.store, &creator(), WASM, None)
        .unwrap_err();
    assert!(matches!(err, KeeperError::InvalidInput(_)));

    let (code_id, _) = chain
        .default
        .create(&mut chain.store, &creator(), b"wasm", None)
        .unwrap();
    let request = InstantiateRequest::new(code_id, creator(), b"{}".to_vec(), "long");
    let err = chain
        .default
        .instantiate(&mut chain.store, &request)
        .unwrap_err();
    assert!(matches!(err, KeeperError::InvalidInput(_)));
}
