use crate::tests::test_utils::*;
use crate::*;
use near_sdk::test_utils::get_logs;
use near_sdk::testing_env;

// --- set_minter_for_project ---

#[test]
fn admin_assigns_minter() {
    let mut contract = setup();
    contract.set_minter_for_project(1, set_price_minter()).unwrap();
    assert_eq!(contract.get_minter_for_project(1).unwrap(), set_price_minter());
    assert_eq!(contract.get_minter_usage(set_price_minter()), 1);
    assert!(get_logs().iter().any(|l| l.contains("project_minter_registered")));
}

#[test]
fn artist_assigns_minter() {
    let mut contract = setup();
    testing_env!(context(artist()).build());
    contract.set_minter_for_project(2, da_exp_minter()).unwrap();
    assert!(contract.is_assigned_minter(2, da_exp_minter()));
}

#[test]
fn stranger_cannot_assign() {
    let mut contract = setup();
    testing_env!(context(stranger()).build());
    let err = contract.set_minter_for_project(1, set_price_minter()).unwrap_err();
    assert!(matches!(err, MinterError::Unauthorized(_)));
    assert!(!contract.project_has_minter(1));
}

#[test]
fn unapproved_minter_rejected() {
    let mut contract = setup();
    let rogue: AccountId = "rogue.near".parse().unwrap();
    let err = contract.set_minter_for_project(1, rogue.clone()).unwrap_err();
    assert_eq!(err, MinterError::NotApproved(rogue));
}

#[test]
fn unknown_project_rejected() {
    let mut contract = setup();
    let err = contract.set_minter_for_project(99, set_price_minter()).unwrap_err();
    assert_eq!(err, MinterError::NoSuchProject(99));
}

#[test]
fn reassigning_same_minter_keeps_usage() {
    let mut contract = setup();
    contract.set_minter_for_project(1, set_price_minter()).unwrap();
    contract.set_minter_for_project(1, set_price_minter()).unwrap();
    assert_eq!(contract.get_minter_usage(set_price_minter()), 1);
}

#[test]
fn replacing_minter_moves_usage() {
    let mut contract = setup();
    contract.set_minter_for_project(1, set_price_minter()).unwrap();
    contract.set_minter_for_project(1, da_exp_minter()).unwrap();
    assert_eq!(contract.get_minter_usage(set_price_minter()), 0);
    assert_eq!(contract.get_minter_usage(da_exp_minter()), 1);
    assert!(!contract.is_assigned_minter(1, set_price_minter()));
}

// --- remove_minter_for_project ---

#[test]
fn remove_minter_clears_assignment() {
    let mut contract = setup();
    contract.set_minter_for_project(1, set_price_minter()).unwrap();
    contract.remove_minter_for_project(1).unwrap();
    assert!(!contract.project_has_minter(1));
    assert_eq!(contract.get_minter_usage(set_price_minter()), 0);
    assert!(get_logs().iter().any(|l| l.contains("project_minter_removed")));
}

#[test]
fn remove_without_minter_fails() {
    let mut contract = setup();
    let err = contract.remove_minter_for_project(1).unwrap_err();
    assert_eq!(err, MinterError::NotAssigned(1));
}

#[test]
fn artist_can_remove_stranger_cannot() {
    let mut contract = setup();
    contract.set_minter_for_project(1, set_price_minter()).unwrap();

    testing_env!(context(stranger()).build());
    assert!(contract.remove_minter_for_project(1).is_err());

    testing_env!(context(artist()).build());
    contract.remove_minter_for_project(1).unwrap();
    assert!(!contract.project_has_minter(1));
}
