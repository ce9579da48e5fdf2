//! Address assignment through the facade.

use crate::common::*;
use wasmgate::{build_contract_address_classic, build_contract_address_predictable};

#[test]
fn test_first_upload_gets_code_id_one() {
    let mut chain = Chain::new();
    let code_id = chain.upload();
    assert_eq!(code_id, CodeId::new(1));

    let info = chain.store.code_info(code_id).unwrap();
    assert_eq!(info.creator, creator());
}

#[test]
fn test_classic_addresses_never_repeat() {
    let mut chain = Chain::new();
    let code_id = chain.upload();

    let a1 = chain.instantiate(code_id, None);
    let a2 = chain.instantiate(code_id, None);
    assert_ne!(a1, a2);
    assert_eq!(a1, build_contract_address_classic(code_id, 1));
    assert_eq!(a2, build_contract_address_classic(code_id, 2));
    assert_eq!(
        a1.to_string(),
        "ade4a5f5803a439835c636395a8d648dee57b2fc90d98dc17fa887159b69638b"
    );
}

#[test]
fn test_predictable_address_ignores_msg_unless_fixed() {
    let mut chain = Chain::new();
    let code_id = chain.upload();
    let checksum = chain.store.code_info(code_id).unwrap().checksum;

    let first = InstantiateRequest::new(code_id, creator(), b"{\"a\":1}".to_vec(), "p");
    let (p, _) = chain
        .default
        .instantiate2(&mut chain.store, &first, b"s", false)
        .unwrap();
    let expected = build_contract_address_predictable(&checksum, &creator(), b"s", &[]).unwrap();
    assert_eq!(p, expected);

    // Same (creator, salt), different message: same address, already taken.
    let second = first.clone().with_msg(b"{\"a\":2}".to_vec());
    let err = chain
        .default
        .instantiate2(&mut chain.store, &second, b"s", false)
        .unwrap_err();
    assert_eq!(err, KeeperError::DuplicateContract(p.clone()));

    // With the message fixed into the derivation the address moves.
    let (p_prime, _) = chain
        .default
        .instantiate2(&mut chain.store, &second, b"s", true)
        .unwrap();
    assert_ne!(p, p_prime);
    let expected = build_contract_address_predictable(&checksum, &creator(), b"s", b"{\"a\":2}")
        .unwrap();
    assert_eq!(p_prime, expected);
}

#[test]
fn test_predictable_address_known_before_instantiation() {
    let mut chain = Chain::new();
    let code_id = chain.upload();
    let checksum = chain.store.code_info(code_id).unwrap().checksum;

    let precomputed =
        build_contract_address_predictable(&checksum, &creator(), b"counterfactual", &[]).unwrap();
    assert!(!chain.store.has_contract(&precomputed));

    let request = InstantiateRequest::new(code_id, creator(), b"{}".to_vec(), "p");
    let (actual, _) = chain
        .default
        .instantiate2(&mut chain.store, &request, b"counterfactual", false)
        .unwrap();
    assert_eq!(actual, precomputed);
    assert!(chain.store.has_contract(&precomputed));
}

#[test]
fn test_predictable_instantiation_does_not_consume_sequence() {
    let mut chain = Chain::new();
    let code_id = chain.upload();

    let request = InstantiateRequest::new(code_id, creator(), b"{}".to_vec(), "p");
    chain
        .default
        .instantiate2(&mut chain.store, &request, b"x", false)
        .unwrap();

    let classic = chain.instantiate(code_id, None);
    assert_eq!(classic, build_contract_address_classic(code_id, 1));
}

#[test]
fn test_duplicate_leaves_store_untouched() {
    let mut chain = Chain::new();
    let code_id = chain.upload();
    let request = InstantiateRequest::new(code_id, creator(), b"{}".to_vec(), "p");

    chain
        .default
        .instantiate2(&mut chain.store, &request, b"dup", false)
        .unwrap();
    let events = chain.event_count();
    let contracts = chain.store.contract_count();

    // Governance cannot override an address collision.
    let err = chain
        .gov
        .instantiate2(&mut chain.store, &request, b"dup", false)
        .unwrap_err();
    assert!(matches!(err, KeeperError::DuplicateContract(_)));
    assert_eq!(chain.event_count(), events);
    assert_eq!(chain.store.contract_count(), contracts);
}

#[test]
fn test_invalid_salt_rejected() {
    let mut chain = Chain::new();
    let code_id = chain.upload();
    let request = InstantiateRequest::new(code_id, creator(), b"{}".to_vec(), "p");

    for salt in [Vec::new(), vec![7u8; 65]] {
        let err = chain
            .default
            .instantiate2(&mut chain.store, &request, &salt, false)
            .unwrap_err();
        assert!(matches!(err, KeeperError::InvalidInput(_)));
    }
    chain
        .default
        .instantiate2(&mut chain.store, &request, &[7u8; 64], false)
        .unwrap();
}
