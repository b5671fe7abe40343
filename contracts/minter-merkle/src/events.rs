use minter_common::events::{EventBuilder, MINTER_CONFIG};
use near_sdk::AccountId;

use crate::ProjectId;

pub(crate) fn emit_price_per_token_updated(actor: &AccountId, project_id: ProjectId, price: u128) {
    EventBuilder::new(MINTER_CONFIG, "price_per_token_updated", actor)
        .field("project_id", project_id)
        .field("price_per_token", price)
        .emit();
}

pub(crate) fn emit_merkle_root_updated(actor: &AccountId, project_id: ProjectId, root: String) {
    EventBuilder::new(MINTER_CONFIG, "merkle_root_updated", actor)
        .field("project_id", project_id)
        .field("root", root)
        .emit();
}

pub(crate) fn emit_invocations_per_address_updated(
    actor: &AccountId,
    project_id: ProjectId,
    max_invocations_per_address: u32,
) {
    EventBuilder::new(MINTER_CONFIG, "invocations_per_address_updated", actor)
        .field("project_id", project_id)
        .field("max_invocations_per_address", max_invocations_per_address)
        .emit();
}
