use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

fn assign_all(contract: &mut Contract) {
    contract.set_minter_for_project(1, set_price_minter()).unwrap();
    contract.set_minter_for_project(2, set_price_minter()).unwrap();
    contract.set_minter_for_project(3, da_exp_minter()).unwrap();
    testing_env!(context_with_deposit(owner(), 1).build());
}

#[test]
fn removes_every_listed_project() {
    let mut contract = setup();
    assign_all(&mut contract);
    contract.remove_minters_for_projects(vec![1, 3]).unwrap();
    assert!(!contract.project_has_minter(1));
    assert!(contract.project_has_minter(2));
    assert!(!contract.project_has_minter(3));
    assert_eq!(contract.get_minter_usage(set_price_minter()), 1);
    assert_eq!(contract.get_minter_usage(da_exp_minter()), 0);
}

#[test]
fn unassigned_entry_aborts_whole_batch() {
    let mut contract = setup();
    contract.set_minter_for_project(1, set_price_minter()).unwrap();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.remove_minters_for_projects(vec![1, 2]).unwrap_err();
    assert_eq!(err, MinterError::NotAssigned(2));
    assert!(contract.project_has_minter(1));
    assert_eq!(contract.get_minter_usage(set_price_minter()), 1);
}

#[test]
fn duplicate_entry_aborts_whole_batch() {
    let mut contract = setup();
    assign_all(&mut contract);
    let err = contract.remove_minters_for_projects(vec![1, 2, 1]).unwrap_err();
    assert_eq!(err, MinterError::DuplicateProject(1));
    assert_eq!(contract.get_num_projects_with_minters(), 3);
    assert_eq!(contract.get_minter_usage(set_price_minter()), 2);
}

#[test]
fn artist_cannot_bulk_remove() {
    let mut contract = setup();
    assign_all(&mut contract);
    testing_env!(context_with_deposit(artist(), 1).build());
    let err = contract.remove_minters_for_projects(vec![1]).unwrap_err();
    assert!(matches!(err, MinterError::Unauthorized(_)));
}

#[test]
fn empty_and_oversized_batches_rejected() {
    let mut contract = setup();
    testing_env!(context_with_deposit(owner(), 1).build());
    assert!(matches!(
        contract.remove_minters_for_projects(vec![]).unwrap_err(),
        MinterError::InvalidInput(_)
    ));
    let too_many: Vec<ProjectId> = (0..=MAX_BULK_REMOVALS as u64).collect();
    assert!(matches!(
        contract.remove_minters_for_projects(too_many).unwrap_err(),
        MinterError::InvalidInput(_)
    ));
}

#[test]
fn bulk_removal_requires_one_yocto() {
    let mut contract = setup();
    assign_all(&mut contract);
    for deposit in [0, 2] {
        testing_env!(context_with_deposit(owner(), deposit).build());
        assert!(matches!(
            contract.remove_minters_for_projects(vec![1]).unwrap_err(),
            MinterError::InvalidInput(_)
        ));
    }
    assert_eq!(contract.get_num_projects_with_minters(), 3);
}
