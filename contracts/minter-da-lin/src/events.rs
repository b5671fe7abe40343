use minter_common::events::{EventBuilder, MINTER_CONFIG};
use near_sdk::AccountId;

use crate::{LinAuction, ProjectId};

pub(crate) fn emit_set_auction_details(
    actor: &AccountId,
    project_id: ProjectId,
    auction: &LinAuction,
) {
    EventBuilder::new(MINTER_CONFIG, "set_auction_details", actor)
        .field("project_id", project_id)
        .field("timestamp_start", auction.timestamp_start)
        .field("auction_duration_seconds", auction.duration_seconds)
        .field("start_price", auction.start_price)
        .field("base_price", auction.base_price)
        .emit();
}

pub(crate) fn emit_reset_auction_details(actor: &AccountId, project_id: ProjectId) {
    EventBuilder::new(MINTER_CONFIG, "reset_auction_details", actor)
        .field("project_id", project_id)
        .emit();
}

pub(crate) fn emit_duration_range_updated(actor: &AccountId, minimum: u64, maximum: u64) {
    EventBuilder::new(MINTER_CONFIG, "auction_duration_range_updated", actor)
        .field("minimum_seconds", minimum)
        .field("maximum_seconds", maximum)
        .emit();
}
