use near_sdk::json_types::U64;
use near_sdk::store::{IterableMap, LookupMap};
use near_sdk::{AccountId, PanicOnDefault, Promise, env, near};

use minter_common::external::{
    GAS_FOR_CORE_MINT, GAS_FOR_CORE_MINT_CALLBACK, GAS_FOR_MINTER_TYPE,
    GAS_FOR_MINTER_TYPE_CALLBACK, GAS_FOR_PROJECT_SYNC, MAX_MINTER_TYPE_LEN, ext_core,
    ext_filtered_minter,
};
use minter_common::sale::mint_outcome;
use minter_common::{
    AuthContext, MinterError, ProjectId, ProjectInfo, check_one_yocto, require_predecessor,
};

pub mod constants;
mod storage;

mod events;

mod admin;
mod mint;
mod projects;
mod registry;
mod views;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use storage::StorageKey;
pub use views::{ApprovedMinter, ProjectMinter};

/// Registry of approved minters and the single minter assigned to each project.
/// It is also the only account Core accepts mint calls from.
#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/genart-minters/minter-suite",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    pub core_contract_id: AccountId,

    // Mirror of Core's project records, pushed by Core.
    pub projects: LookupMap<ProjectId, ProjectInfo>,
    // minter -> minter type reported at approval time.
    pub approved_minters: IterableMap<AccountId, String>,
    pub project_minters: IterableMap<ProjectId, AccountId>,
    // Invariant: equals the number of project_minters entries naming the minter; absent at zero.
    pub(crate) minter_usage: LookupMap<AccountId, u32>,
}
