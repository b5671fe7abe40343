use near_sdk::json_types::{U64, U128};
use near_sdk::store::LookupMap;
use near_sdk::{AccountId, PanicOnDefault, Promise, env, near};

use minter_common::external::GAS_FOR_MINT_CALLBACK;
use minter_common::sale::{
    attached_deposit, finish_purchase, mint_outcome, mint_via_filter, require_deposit, transfer,
};
use minter_common::{MinterError, PriceInfo, ProjectId, ProjectSaleState, ProjectSaleView};

mod events;
mod storage;

mod admin;
mod config;
mod purchase;
mod views;


pub use storage::StorageKey;

pub const MINTER_TYPE: &str = "MinterSetPriceV1";

/// Fixed-price minter: the artist sets one price per project.
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
}

minter_common::impl_filtered_minter!(Contract);
minter_common::impl_manual_invocation_limit!(Contract);
