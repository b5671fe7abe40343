use near_sdk::json_types::{U64, U128};
use near_sdk::store::LookupMap;
use near_sdk::{AccountId, PanicOnDefault, Promise, env, near};

use minter_common::external::GAS_FOR_MINT_CALLBACK;
use minter_common::sale::{
    attached_deposit, finish_purchase, mint_outcome, mint_via_filter, require_deposit, transfer,
};
use minter_common::{MinterError, PriceInfo, ProjectId, ProjectSaleState, ProjectSaleView};
use minter_math::Hash32;

pub mod constants;
mod events;
mod storage;

mod admin;
mod allowlist;
mod config;
mod purchase;
mod views;


pub use constants::*;
pub use storage::StorageKey;

/// Fixed-price minter restricted to accounts in a per-project Merkle allowlist.
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
    pub minter_filter_id: AccountId,

    pub projects: LookupMap<ProjectId, ProjectSaleState>,
    pub prices: LookupMap<ProjectId, u128>,
    pub merkle_roots: LookupMap<ProjectId, Hash32>,
    // Absent means DEFAULT_INVOCATIONS_PER_ADDRESS; zero means unlimited.
    pub invocations_per_address: LookupMap<ProjectId, u32>,
    // Includes mints still awaiting their callback.
    pub(crate) user_mint_invocations: LookupMap<(ProjectId, AccountId), u32>,
}

minter_common::impl_filtered_minter!(Contract);
minter_common::impl_manual_invocation_limit!(Contract);
