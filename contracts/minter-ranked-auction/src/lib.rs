use near_sdk::json_types::{U64, U128};
use near_sdk::store::LookupMap;
use near_sdk::{AccountId, NearToken, PanicOnDefault, Promise, env, near};

use minter_common::external::{GAS_FOR_MINT_CALLBACK, GAS_FOR_REFUND_CALLBACK};
use minter_common::sale::{
    attached_deposit, mint_outcome, mint_via_filter, now_seconds, promise_succeeded, transfer,
};
use minter_common::{
    AuthContext, MinterError, PriceInfo, ProjectId, ProjectSaleState, ProjectSaleView, check_one_yocto,
};
use minter_math::{BidHeap, BidQueue, FlatBidList, Offer};

pub mod constants;
mod events;
mod storage;

mod admin;
mod auction;
mod bidding;
mod bids;
mod config;
mod refunds;
mod settlement;
mod views;


pub use auction::{AuctionPhase, AuctionView, MinimumBid, RankedAuction};
pub use bids::Bid;
pub use constants::*;
pub use storage::StorageKey;

/// Ranked auction minter: the top `capacity` bids win and all winners pay the
/// same clearing price once the auction ends.
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
    pub auctions: LookupMap<ProjectId, RankedAuction>,
    // Queue slots per project; the auction's num_bids is the slot count.
    pub(crate) bids: LookupMap<(ProjectId, u32), Bid>,
    pub next_bid_id: u64,

    // Escrowed refunds, withdrawn with claim_refunds.
    pub(crate) refund_balances: LookupMap<AccountId, u128>,

    // Auctions with a capacity above this use the heap; smaller ones the flat list.
    pub heap_crossover_capacity: u32,
}

minter_common::impl_filtered_minter!(Contract);
