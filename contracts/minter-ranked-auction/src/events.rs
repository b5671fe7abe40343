use minter_common::MinterError;
use minter_common::events::{BID, EventBuilder, MINTER_CONFIG};
use near_sdk::AccountId;

use crate::{Bid, ProjectId, RankedAuction};

pub(crate) fn emit_set_auction_details(
    actor: &AccountId,
    project_id: ProjectId,
    auction: &RankedAuction,
) {
    EventBuilder::new(MINTER_CONFIG, "set_auction_details", actor)
        .field("project_id", project_id)
        .field("timestamp_start", auction.timestamp_start)
        .field("timestamp_end", auction.timestamp_end)
        .field("base_price", auction.base_price)
        .field("bid_increment", auction.bid_increment)
        .field("capacity", auction.capacity)
        .field("uses_heap", auction.uses_heap)
        .emit();
}

pub(crate) fn emit_reset_auction_details(actor: &AccountId, project_id: ProjectId) {
    EventBuilder::new(MINTER_CONFIG, "reset_auction_details", actor)
        .field("project_id", project_id)
        .emit();
}

pub(crate) fn emit_heap_crossover_updated(actor: &AccountId, capacity: u32) {
    EventBuilder::new(MINTER_CONFIG, "heap_crossover_updated", actor)
        .field("heap_crossover_capacity", capacity)
        .emit();
}

pub(crate) fn emit_bid_created(project_id: ProjectId, bid: &Bid) {
    EventBuilder::new(BID, "bid_created", &bid.bidder)
        .field("project_id", project_id)
        .field("bid_id", bid.bid_id)
        .field("slot_index", bid.slot_index)
        .field("value", bid.value)
        .emit();
}

pub(crate) fn emit_bid_removed(project_id: ProjectId, bid: &Bid) {
    EventBuilder::new(BID, "bid_removed", &bid.bidder)
        .field("project_id", project_id)
        .field("bid_id", bid.bid_id)
        .field("value", bid.value)
        .emit();
}

pub(crate) fn emit_bid_settled(
    project_id: ProjectId,
    bid_id: u64,
    bidder: &AccountId,
    token_id: u64,
    price: u128,
) {
    EventBuilder::new(BID, "bid_settled", bidder)
        .field("project_id", project_id)
        .field("bid_id", bid_id)
        .field("token_id", token_id)
        .field("price", price)
        .emit();
}

pub(crate) fn emit_bid_settlement_failed(project_id: ProjectId, bid_id: u64, bidder: &AccountId) {
    EventBuilder::new(BID, "bid_settlement_failed", bidder)
        .field("project_id", project_id)
        .field("bid_id", bid_id)
        .field("reason", MinterError::MintFailed(project_id).to_string())
        .emit();
}

pub(crate) fn emit_refund_credited(account: &AccountId, amount: u128, balance: u128) {
    EventBuilder::new(BID, "refund_credited", account)
        .field("amount", amount)
        .field("balance", balance)
        .emit();
}

pub(crate) fn emit_refund_claimed(account: &AccountId, amount: u128) {
    EventBuilder::new(BID, "refund_claimed", account)
        .field("amount", amount)
        .emit();
}

pub(crate) fn emit_refund_claim_failed(account: &AccountId, amount: u128) {
    EventBuilder::new(BID, "refund_claim_failed", account)
        .field("amount", amount)
        .field("reason", MinterError::RefundFailed(account.clone()).to_string())
        .emit();
}
