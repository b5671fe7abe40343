use crate::tests::test_utils::*;
use crate::*;

#[test]
fn approved_minters_paginate() {
    let contract = setup();
    assert_eq!(contract.get_num_approved_minters(), 3);
    let first = contract.get_approved_minters(None, Some(2));
    let rest = contract.get_approved_minters(Some(2), Some(2));
    assert_eq!(first.len(), 2);
    assert_eq!(rest.len(), 1);
    assert!(
        first
            .iter()
            .chain(rest.iter())
            .any(|m| m.minter_id == ranked_minter() && m.minter_type == "MinterRankedAuctionV1")
    );
}

#[test]
fn project_minters_report_types() {
    let mut contract = setup();
    contract.set_minter_for_project(2, da_exp_minter()).unwrap();
    let entries = contract.get_project_minters(None, None);
    assert_eq!(
        entries,
        vec![ProjectMinter {
            project_id: 2,
            minter_id: da_exp_minter(),
            minter_type: "MinterDAExpV1".to_string(),
        }]
    );
    assert_eq!(contract.get_num_projects_with_minters(), 1);
}

#[test]
fn minter_for_project_errors() {
    let contract = setup();
    assert_eq!(
        contract.get_minter_for_project(1).unwrap_err(),
        MinterError::NotAssigned(1)
    );
    assert_eq!(
        contract.get_minter_for_project(42).unwrap_err(),
        MinterError::NoSuchProject(42)
    );
}

#[test]
fn page_limit_is_capped() {
    let contract = setup();
    assert_eq!(contract.get_approved_minters(Some(0), Some(u32::MAX)).len(), 3);
    assert!(contract.get_approved_minters(Some(10), None).is_empty());
}
