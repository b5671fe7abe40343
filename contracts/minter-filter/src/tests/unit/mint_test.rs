use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

#[test]
fn assigned_minter_may_mint() {
    let mut contract = setup();
    contract.set_minter_for_project(1, set_price_minter()).unwrap();
    testing_env!(context(set_price_minter()).build());
    assert!(contract.mint(stranger(), 1, stranger()).is_ok());
}

#[test]
fn approved_but_unassigned_minter_rejected() {
    let mut contract = setup();
    contract.set_minter_for_project(1, set_price_minter()).unwrap();
    testing_env!(context(da_exp_minter()).build());
    let result = contract.mint(stranger(), 1, stranger());
    assert!(matches!(result, Err(MinterError::Unauthorized(_))));
}

#[test]
fn project_without_minter_rejected() {
    let mut contract = setup();
    testing_env!(context(set_price_minter()).build());
    let result = contract.mint(stranger(), 2, stranger());
    assert_eq!(result.err(), Some(MinterError::NotAssigned(2)));
}

#[test]
fn removed_minter_loses_mint_rights() {
    let mut contract = setup();
    contract.set_minter_for_project(1, set_price_minter()).unwrap();
    contract.remove_minter_for_project(1).unwrap();
    testing_env!(context(set_price_minter()).build());
    assert_eq!(
        contract.mint(stranger(), 1, stranger()).err(),
        Some(MinterError::NotAssigned(1))
    );
}

#[test]
fn admin_cannot_mint_directly() {
    let mut contract = setup();
    contract.set_minter_for_project(1, set_price_minter()).unwrap();
    let result = contract.mint(owner(), 1, owner());
    assert!(matches!(result, Err(MinterError::Unauthorized(_))));
}

#[test]
fn core_mint_result_advances_mirrored_invocations() {
    let mut contract = setup();
    contract.set_minter_for_project(1, set_price_minter()).unwrap();
    assert_eq!(contract.resolve_core_mint(1, Some(U64(0))), Some(U64(0)));
    assert_eq!(contract.resolve_core_mint(1, Some(U64(1))), Some(U64(1)));
    assert_eq!(contract.get_project(1).unwrap().invocations, 2);
}

#[test]
fn failed_core_mint_leaves_invocations() {
    let mut contract = setup();
    testing_env!(context("filter.near".parse().unwrap()).build());
    assert_eq!(contract.on_core_minted(1), None);
    assert_eq!(contract.get_project(1).unwrap().invocations, 0);
}
