use crate::tests::test_utils::*;
use crate::*;
use near_sdk::test_utils::get_logs;
use near_sdk::testing_env;

// --- init ---

#[test]
fn new_sets_owner_and_core() {
    let contract = new_contract();
    assert_eq!(contract.get_owner(), &owner());
    assert_eq!(contract.get_core_contract_id(), &core());
    assert_eq!(contract.get_num_approved_minters(), 0);
}

// --- add_approved_minter ---

#[test]
fn add_approved_minter_requires_one_yocto() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    let result = contract.add_approved_minter(set_price_minter());
    assert!(matches!(result, Err(MinterError::InvalidInput(_))));
}

#[test]
fn add_approved_minter_requires_admin() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(stranger(), 1).build());
    let result = contract.add_approved_minter(set_price_minter());
    assert!(matches!(result, Err(MinterError::Unauthorized(_))));
}

#[test]
fn add_approved_minter_schedules_type_query() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    assert!(contract.add_approved_minter(set_price_minter()).is_ok());
    // Approval lands only after the callback resolves.
    assert!(!contract.is_approved_minter(set_price_minter()));
}

#[test]
fn add_approved_minter_twice_fails() {
    let mut contract = new_contract();
    approve(&mut contract, &[(set_price_minter(), "MinterSetPriceV1")]);
    testing_env!(context_with_deposit(owner(), 1).build());
    let result = contract.add_approved_minter(set_price_minter());
    assert_eq!(result.err(), Some(MinterError::AlreadyApproved(set_price_minter())));
}

// --- on_minter_type_resolved ---

#[test]
fn resolved_type_approves_and_emits() {
    let mut contract = new_contract();
    assert!(contract.resolve_minter_approval(set_price_minter(), Some("MinterSetPriceV1".into())));
    assert!(contract.is_approved_minter(set_price_minter()));
    let logs = get_logs();
    assert!(logs.iter().any(|l| l.contains("minter_approved") && l.contains("MinterSetPriceV1")));
}

#[test]
fn failed_type_query_does_not_approve() {
    let mut contract = new_contract();
    assert!(!contract.resolve_minter_approval(set_price_minter(), None));
    assert!(!contract.resolve_minter_approval(set_price_minter(), Some(String::new())));
    assert!(!contract.is_approved_minter(set_price_minter()));
}

#[test]
fn type_callback_without_result_does_not_approve() {
    let mut contract = new_contract();
    testing_env!(context("filter.near".parse().unwrap()).build());
    assert!(!contract.on_minter_type_resolved(set_price_minter()));
    assert!(!contract.is_approved_minter(set_price_minter()));
}

#[test]
fn second_resolution_keeps_first_type() {
    let mut contract = new_contract();
    assert!(contract.resolve_minter_approval(set_price_minter(), Some("A".into())));
    assert!(!contract.resolve_minter_approval(set_price_minter(), Some("B".into())));
    assert_eq!(contract.get_approved_minters(None, None)[0].minter_type, "A");
}

// --- remove_approved_minter ---

#[test]
fn remove_unused_minter() {
    let mut contract = setup();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.remove_approved_minter(set_price_minter()).unwrap();
    assert!(!contract.is_approved_minter(set_price_minter()));
}

#[test]
fn remove_minter_in_use_fails() {
    let mut contract = setup();
    contract.set_minter_for_project(1, set_price_minter()).unwrap();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.remove_approved_minter(set_price_minter()).unwrap_err();
    assert_eq!(err, MinterError::OnlyUnused(set_price_minter()));
    assert!(contract.is_approved_minter(set_price_minter()));
}

#[test]
fn remove_unapproved_minter_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.remove_approved_minter(set_price_minter()).unwrap_err();
    assert_eq!(err, MinterError::NotApproved(set_price_minter()));
}

// --- transfer_ownership ---

#[test]
fn transfer_ownership_moves_admin_rights() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.transfer_ownership(stranger()).unwrap();
    assert_eq!(contract.get_owner(), &stranger());

    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.remove_approved_minter(set_price_minter()).unwrap_err();
    assert!(matches!(err, MinterError::Unauthorized(_)));
}

#[test]
fn transfer_ownership_to_self_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.transfer_ownership(owner()).unwrap_err();
    assert!(matches!(err, MinterError::InvalidInput(_)));
}
