//! Policy enforcement under the default and governance regimes.

use crate::common::*;

#[test]
fn test_outsider_cannot_update_admin_under_default_policy() {
    let mut chain = Chain::new();
    let code_id = chain.upload();
    let contract = chain.instantiate(code_id, Some(creator()));
    let outsider = addr(0xd0);
    let events = chain.event_count();

    let err = chain
        .default
        .update_contract_admin(&mut chain.store, &contract, &outsider, &outsider)
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(
        chain.store.contract_info(&contract).unwrap().admin,
        Some(creator())
    );
    assert_eq!(chain.event_count(), events);
}

#[test]
fn test_outsider_can_update_admin_under_gov_policy() {
    let mut chain = Chain::new();
    let code_id = chain.upload();
    let contract = chain.instantiate(code_id, Some(creator()));
    let outsider = addr(0xd0);

    chain
        .gov
        .update_contract_admin(&mut chain.store, &contract, &outsider, &outsider)
        .unwrap();
    assert_eq!(
        chain.store.contract_info(&contract).unwrap().admin,
        Some(outsider)
    );
}

#[test]
fn test_migrate_gated_by_admin() {
    let mut chain = Chain::new();
    let v1 = chain.upload();
    let v2 = chain.upload();
    let admin = addr(0xad);
    let contract = chain.instantiate(v1, Some(admin.clone()));

    let err = chain
        .default
        .migrate(&mut chain.store, &contract, &creator(), v2, b"{}")
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(chain.store.contract_history(&contract).len(), 1);

    chain
        .default
        .migrate(&mut chain.store, &contract, &admin, v2, b"{}")
        .unwrap();
    assert_eq!(chain.store.contract_info(&contract).unwrap().code_id, v2);
    assert_eq!(chain.store.contract_history(&contract).len(), 2);
}

#[test]
fn test_migrate_to_restricted_code_needs_instantiate_rights() {
    let mut chain = Chain::new();
    let v1 = chain.upload();
    let admin = addr(0xad);
    let contract = chain.instantiate(v1, Some(admin.clone()));
    let (v2, _) = chain
        .default
        .create(
            &mut chain.store,
            &creator(),
            WASM,
            Some(&AccessConfig::only(creator())),
        )
        .unwrap();
    let events = chain.event_count();

    let err = chain
        .default
        .migrate(&mut chain.store, &contract, &admin, v2, b"{}")
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(chain.store.contract_info(&contract).unwrap().code_id, v1);
    assert_eq!(chain.store.contract_history(&contract).len(), 1);
    assert_eq!(chain.event_count(), events);

    chain
        .gov
        .migrate(&mut chain.store, &contract, &admin, v2, b"{}")
        .unwrap();
    assert_eq!(chain.store.contract_info(&contract).unwrap().code_id, v2);
    assert_eq!(chain.store.contract_history(&contract).len(), 2);
}

#[test]
fn test_contract_without_admin_is_immutable_except_by_governance() {
    let mut chain = Chain::new();
    let v1 = chain.upload();
    let v2 = chain.upload();
    let contract = chain.instantiate(v1, None);

    let err = chain
        .default
        .migrate(&mut chain.store, &contract, &creator(), v2, b"{}")
        .unwrap_err();
    assert!(err.is_unauthorized());

    chain
        .gov
        .migrate(&mut chain.store, &contract, &addr(0x99), v2, b"{}")
        .unwrap();
    assert_eq!(chain.store.contract_info(&contract).unwrap().code_id, v2);
}

#[test]
fn test_instantiate_respects_code_access_config() {
    let mut chain = Chain::new();
    let only_creator = AccessConfig::only(creator());
    let (code_id, _) = chain
        .default
        .create(&mut chain.store, &creator(), WASM, Some(&only_creator))
        .unwrap();

    let outsider = addr(0xd0);
    let request = InstantiateRequest::new(code_id, outsider.clone(), b"{}".to_vec(), "x");
    let err = chain
        .default
        .instantiate(&mut chain.store, &request)
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(chain.store.contract_count(), 0);

    chain.gov.instantiate(&mut chain.store, &request).unwrap();
    assert_eq!(chain.store.contract_count(), 1);
}

#[test]
fn test_access_config_update_by_creator_only() {
    let mut chain = Chain::new();
    let code_id = chain.upload();
    let outsider = addr(0xd0);

    let err = chain
        .default
        .set_access_config(&mut chain.store, code_id, &outsider, &AccessConfig::Nobody)
        .unwrap_err();
    assert!(err.is_unauthorized());

    chain
        .default
        .set_access_config(&mut chain.store, code_id, &creator(), &AccessConfig::Nobody)
        .unwrap();
    assert_eq!(
        chain.store.code_info(code_id).unwrap().instantiate_config,
        AccessConfig::Nobody
    );

    let request = InstantiateRequest::new(code_id, creator(), b"{}".to_vec(), "x");
    assert!(chain
        .default
        .instantiate(&mut chain.store, &request)
        .unwrap_err()
        .is_unauthorized());
}

#[test]
fn test_denials_record_no_events() {
    let mut chain = Chain::new();
    let v1 = chain.upload();
    let contract = chain.instantiate(v1, Some(creator()));
    let outsider = addr(0xd0);
    let before = chain.store.events().to_vec();

    let _ = chain
        .default
        .migrate(&mut chain.store, &contract, &outsider, v1, b"{}");
    let _ = chain
        .default
        .clear_contract_admin(&mut chain.store, &contract, &outsider);
    let _ = chain
        .default
        .set_access_config(&mut chain.store, v1, &outsider, &AccessConfig::Nobody);

    assert_eq!(chain.store.events(), before.as_slice());
}

#[test]
fn test_sub_message_facade_drops_governance_unless_propagated() {
    let mut chain = Chain::new();
    let v1 = chain.upload();
    let contract = chain.instantiate(v1, None);
    let outsider = addr(0xd0);

    let sub = chain.gov.for_sub_message(wasmgate::PolicyAction::Migrate);
    assert_eq!(sub.policy().name(), "default");
    assert!(sub
        .migrate(&mut chain.store, &contract, &outsider, v1, b"{}")
        .unwrap_err()
        .is_unauthorized());
}
