use minter_common::events::{EventBuilder, MINTER_CONFIG};
use near_sdk::AccountId;

use crate::ProjectId;

pub(crate) fn emit_price_per_token_updated(actor: &AccountId, project_id: ProjectId, price: u128) {
    EventBuilder::new(MINTER_CONFIG, "price_per_token_updated", actor)
        .field("project_id", project_id)
        .field("price_per_token", price)
        .emit();
}
