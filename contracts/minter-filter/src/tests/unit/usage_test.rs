use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

fn assert_usage_matches(contract: &Contract, minters: &[AccountId]) {
    for minter in minters {
        let expected = contract
            .project_minters
            .iter()
            .filter(|(_, assigned)| *assigned == minter)
            .count() as u32;
        assert_eq!(contract.get_minter_usage(minter.clone()), expected);
        if expected == 0 {
            assert!(contract.minter_usage.get(minter).is_none());
        }
    }
}

#[test]
fn usage_tracks_assignments_under_random_operations() {
    let mut contract = new_contract();
    let projects: Vec<ProjectId> = (1..=6).collect();
    register_projects(&mut contract, &projects);
    let minters = [set_price_minter(), da_exp_minter(), ranked_minter()];
    approve(
        &mut contract,
        &[
            (minters[0].clone(), "MinterSetPriceV1"),
            (minters[1].clone(), "MinterDAExpV1"),
            (minters[2].clone(), "MinterRankedAuctionV1"),
        ],
    );

    let mut rng = Lcg(42);
    for _ in 0..300 {
        // Promises scheduled by a call count against its context's gas.
        testing_env!(context_with_deposit(owner(), 1).build());
        let project_id = projects[rng.next(projects.len() as u64) as usize];
        match rng.next(3) {
            0 => {
                let minter = minters[rng.next(minters.len() as u64) as usize].clone();
                contract.set_minter_for_project(project_id, minter).unwrap();
            }
            1 => {
                let _ = contract.remove_minter_for_project(project_id);
            }
            _ => {
                let other = projects[rng.next(projects.len() as u64) as usize];
                let _ = contract.remove_minters_for_projects(vec![project_id, other]);
            }
        }
        assert_usage_matches(&contract, &minters);
    }
}
