//! Operations forwarded without an authorization policy.

use crate::common::*;
use wasmgate::{ContractInfoExtension, HistoryOperation};

#[test]
fn test_execute_and_sudo_reach_the_vm() {
    let mut chain = Chain::new();
    let code_id = chain.upload();
    let contract = chain.instantiate(code_id, None);
    let anyone = addr(0x55);

    let data = chain
        .default
        .execute(&mut chain.store, &contract, &anyone, b"{\"inc\":{}}", &Coins::empty())
        .unwrap();
    assert_eq!(data, b"{\"inc\":{}}");

    let data = chain.default.sudo(&mut chain.store, &contract, b"{\"reset\":{}}").unwrap();
    assert_eq!(data, b"{\"reset\":{}}");

    let kinds: Vec<_> = chain.store.events().iter().map(|e| e.kind()).collect();
    assert_eq!(kinds, vec!["store_code", "instantiate", "execute", "sudo"]);
}

#[test]
fn test_pin_and_unpin_need_no_rights() {
    let mut chain = Chain::new();
    let code_id = chain.upload();

    chain.default.pin_code(&mut chain.store, code_id).unwrap();
    assert!(chain.store.is_pinned(code_id));
    chain.default.unpin_code(&mut chain.store, code_id).unwrap();
    assert!(!chain.store.is_pinned(code_id));

    let err = chain
        .default
        .pin_code(&mut chain.store, CodeId::new(99))
        .unwrap_err();
    assert_eq!(err, KeeperError::CodeNotFound(CodeId::new(99)));
}

#[test]
fn test_set_contract_info_extension() {
    let mut chain = Chain::new();
    let code_id = chain.upload();
    let contract = chain.instantiate(code_id, None);
    let ext = ContractInfoExtension::new("/example.v1.Meta", b"{\"tag\":1}".to_vec());

    chain
        .default
        .set_contract_info_extension(&mut chain.store, &contract, ext.clone())
        .unwrap();
    assert_eq!(
        chain.store.contract_info(&contract).unwrap().extension,
        Some(ext)
    );
}

#[test]
fn test_history_tracks_init_and_migrations() {
    let mut chain = Chain::new();
    let v1 = chain.upload();
    let v2 = chain.upload();
    let contract = chain.instantiate(v1, Some(creator()));

    chain.store.next_block(6_000_000_000);
    chain
        .default
        .migrate(&mut chain.store, &contract, &creator(), v2, b"{\"v\":2}")
        .unwrap();

    let history = chain.store.contract_history(&contract);
    let ops: Vec<_> = history.iter().map(|h| (h.operation, h.code_id, h.height)).collect();
    assert_eq!(
        ops,
        vec![(HistoryOperation::Init, v1, 1), (HistoryOperation::Migrate, v2, 2)]
    );
    assert_eq!(chain.store.contracts_by_code(v2), vec![&contract]);
    assert!(chain.store.contracts_by_code(v1).is_empty());
}
