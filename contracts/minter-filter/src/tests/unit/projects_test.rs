use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

#[test]
fn core_registers_project() {
    let mut contract = new_contract();
    testing_env!(context(core()).build());
    contract.register_project(7, info(50)).unwrap();
    assert_eq!(contract.get_project(7), Some(&info(50)));
}

#[test]
fn only_core_registers() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    let err = contract.register_project(7, info(50)).unwrap_err();
    assert!(matches!(err, MinterError::Unauthorized(_)));
}

#[test]
fn duplicate_registration_fails() {
    let mut contract = new_contract();
    register_projects(&mut contract, &[7]);
    testing_env!(context(core()).build());
    let err = contract.register_project(7, info(10)).unwrap_err();
    assert!(matches!(err, MinterError::InvalidState(_)));
    assert_eq!(contract.get_project(7).unwrap().max_invocations, 100);
}

#[test]
fn update_changes_artist_used_for_auth() {
    let mut contract = setup();
    testing_env!(context(core()).build());
    contract
        .update_project(
            1,
            ProjectInfo {
                artist_id: stranger(),
                max_invocations: 10,
                invocations: 2,
            },
        )
        .unwrap();

    testing_env!(context(stranger()).build());
    contract.set_minter_for_project(1, set_price_minter()).unwrap();
    testing_env!(context(artist()).build());
    assert!(contract.remove_minter_for_project(1).is_err());
}

#[test]
fn update_unknown_project_fails() {
    let mut contract = new_contract();
    testing_env!(context(core()).build());
    assert_eq!(
        contract.update_project(3, info(1)).unwrap_err(),
        MinterError::NoSuchProject(3)
    );
}
