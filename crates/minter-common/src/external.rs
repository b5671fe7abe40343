use near_sdk::json_types::U64;
use near_sdk::{AccountId, Gas, ext_contract, near};

use crate::ProjectId;

pub const GAS_FOR_CORE_MINT: Gas = Gas::from_tgas(20);
pub const GAS_FOR_CORE_MINT_CALLBACK: Gas = Gas::from_tgas(5);
/// Filter hop plus the core mint it forwards and the filter's callback.
pub const GAS_FOR_FILTER_MINT: Gas = Gas::from_tgas(45);
pub const GAS_FOR_MINT_CALLBACK: Gas = Gas::from_tgas(15);
pub const GAS_FOR_PROJECT_SYNC: Gas = Gas::from_tgas(10);
pub const GAS_FOR_MINTER_TYPE: Gas = Gas::from_tgas(5);
pub const GAS_FOR_MINTER_TYPE_CALLBACK: Gas = Gas::from_tgas(10);
pub const GAS_FOR_REFUND_CALLBACK: Gas = Gas::from_tgas(10);

pub const MAX_MINT_RESULT_LEN: usize = 64;
pub const MAX_MINTER_TYPE_LEN: usize = 128;

/// Core's view of a project, pushed to the filter and on to the assigned minter.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectInfo {
    pub artist_id: AccountId,
    pub max_invocations: u32,
    // Tokens Core has minted for the project so far.
    pub invocations: u32,
}

#[ext_contract(ext_core)]
pub trait Core {
    fn mint(&mut self, to: AccountId, project_id: ProjectId, sender: AccountId) -> U64;
}

#[ext_contract(ext_minter_filter)]
pub trait MinterFilter {
    fn mint(&mut self, to: AccountId, project_id: ProjectId, sender: AccountId) -> U64;
}

#[ext_contract(ext_filtered_minter)]
pub trait FilteredMinter {
    fn minter_type(&self) -> String;
    fn on_project_assigned(&mut self, project_id: ProjectId, info: ProjectInfo);
    fn on_project_unassigned(&mut self, project_id: ProjectId);
    fn on_project_updated(&mut self, project_id: ProjectId, info: ProjectInfo);
}
