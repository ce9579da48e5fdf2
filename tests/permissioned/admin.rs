//! Admin update and clear.

use crate::common::*;

#[test]
fn test_admin_hands_over_control() {
    let mut chain = Chain::new();
    let code_id = chain.upload();
    let contract = chain.instantiate(code_id, Some(creator()));
    let next = addr(0x0e);

    chain
        .default
        .update_contract_admin(&mut chain.store, &contract, &creator(), &next)
        .unwrap();

    // The previous admin lost its rights.
    let err = chain
        .default
        .update_contract_admin(&mut chain.store, &contract, &creator(), &creator())
        .unwrap_err();
    assert!(err.is_unauthorized());

    chain
        .default
        .update_contract_admin(&mut chain.store, &contract, &next, &creator())
        .unwrap();
    assert_eq!(
        chain.store.contract_info(&contract).unwrap().admin,
        Some(creator())
    );
}

#[test]
fn test_clear_admin_matches_update_with_none() {
    let mut chain = Chain::new();
    let code_id = chain.upload();
    let cleared = chain.instantiate(code_id, Some(creator()));
    let updated = chain.instantiate(code_id, Some(creator()));

    chain
        .default
        .clear_contract_admin(&mut chain.store, &cleared, &creator())
        .unwrap();
    chain
        .keeper
        .set_contract_admin(
            &mut chain.store,
            &updated,
            &creator(),
            None,
            chain.default.policy(),
        )
        .unwrap();

    let a = chain.store.contract_info(&cleared).unwrap();
    let b = chain.store.contract_info(&updated).unwrap();
    assert_eq!(a.admin, None);
    assert_eq!(a.admin, b.admin);

    let events = chain.store.events();
    let n = events.len();
    assert_eq!(
        events[n - 2],
        KeeperEvent::UpdateContractAdmin {
            contract: cleared.clone(),
            new_admin: None,
        }
    );
    assert_eq!(
        events[n - 1],
        KeeperEvent::UpdateContractAdmin {
            contract: updated.clone(),
            new_admin: None,
        }
    );
}

#[test]
fn test_cleared_contract_cannot_regain_admin_without_governance() {
    let mut chain = Chain::new();
    let code_id = chain.upload();
    let contract = chain.instantiate(code_id, Some(creator()));

    chain
        .default
        .clear_contract_admin(&mut chain.store, &contract, &creator())
        .unwrap();
    assert!(chain
        .default
        .update_contract_admin(&mut chain.store, &contract, &creator(), &creator())
        .unwrap_err()
        .is_unauthorized());

    chain
        .gov
        .update_contract_admin(&mut chain.store, &contract, &addr(0x01), &creator())
        .unwrap();
    assert_eq!(
        chain.store.contract_info(&contract).unwrap().admin,
        Some(creator())
    );
}

#[test]
fn test_admin_ops_on_missing_contract() {
    let mut chain = Chain::new();
    let missing = addr(0x42);
    let err = chain
        .gov
        .clear_contract_admin(&mut chain.store, &missing, &creator())
        .unwrap_err();
    assert_eq!(err, KeeperError::ContractNotFound(missing));
}
