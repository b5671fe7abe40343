use near_sdk::AccountId;

use super::{EventBuilder, MINTER_CONFIG, SALE};
use crate::ProjectId;

// Events every contract in the suite emits in the same shape.

pub fn emit_owner_transferred(event_type: &'static str, old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(event_type, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_project_max_invocations_limited(
    actor: &AccountId,
    project_id: ProjectId,
    max_invocations: u32,
) {
    EventBuilder::new(MINTER_CONFIG, "project_max_invocations_limited", actor)
        .field("project_id", project_id)
        .field("max_invocations", max_invocations)
        .emit();
}

pub fn emit_purchase(
    buyer: &AccountId,
    project_id: ProjectId,
    token_id: u64,
    price: u128,
) {
    EventBuilder::new(SALE, "purchase", buyer)
        .field("project_id", project_id)
        .field("token_id", token_id)
        .field("price", price)
        .emit();
}

pub fn emit_purchase_failed(buyer: &AccountId, project_id: ProjectId, refunded: u128) {
    EventBuilder::new(SALE, "purchase_failed", buyer)
        .field("project_id", project_id)
        .field("refunded", refunded)
        .emit();
}
