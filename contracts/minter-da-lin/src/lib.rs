use near_sdk::json_types::{U64, U128};
use near_sdk::store::LookupMap;
use near_sdk::{AccountId, PanicOnDefault, Promise, env, near};

use minter_common::external::GAS_FOR_MINT_CALLBACK;
use minter_common::sale::{
    attached_deposit, finish_purchase, mint_outcome, mint_via_filter, now_seconds,
    require_deposit, transfer,
};
use minter_common::{
    AuthContext, MinterError, PriceInfo, ProjectId, ProjectSaleState, ProjectSaleView, check_one_yocto,
};
use minter_math::{DurationRange, LinearDecay};

pub mod constants;
mod events;
mod storage;

mod admin;
mod auction;
mod config;
mod purchase;
mod views;


pub use auction::{AuctionParametersView, DurationRangeView, LinAuction};
pub use constants::*;
pub use storage::StorageKey;

/// Linear Dutch auction minter: the price falls in a straight line from the
/// start price to the base price over the auction duration.
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
    pub auctions: LookupMap<ProjectId, LinAuction>,

    // Bounds artists must respect when configuring an auction.
    pub minimum_auction_duration_seconds: u64,
    pub maximum_auction_duration_seconds: u64,
}

minter_common::impl_filtered_minter!(Contract);
minter_common::impl_manual_invocation_limit!(Contract);
