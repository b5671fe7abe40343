use minter_common::events::{EventBuilder, MINTER_FILTER};
use near_sdk::AccountId;

use crate::{ProjectId, ProjectInfo};

pub(crate) fn emit_minter_approved(actor: &AccountId, minter: &AccountId, minter_type: &str) {
    EventBuilder::new(MINTER_FILTER, "minter_approved", actor)
        .field("minter_id", minter)
        .field("minter_type", minter_type)
        .emit();
}

pub(crate) fn emit_minter_approval_failed(actor: &AccountId, minter: &AccountId) {
    EventBuilder::new(MINTER_FILTER, "minter_approval_failed", actor)
        .field("minter_id", minter)
        .emit();
}

pub(crate) fn emit_minter_revoked(actor: &AccountId, minter: &AccountId) {
    EventBuilder::new(MINTER_FILTER, "minter_revoked", actor)
        .field("minter_id", minter)
        .emit();
}

pub(crate) fn emit_project_minter_registered(
    actor: &AccountId,
    project_id: ProjectId,
    minter: &AccountId,
    minter_type: &str,
) {
    EventBuilder::new(MINTER_FILTER, "project_minter_registered", actor)
        .field("project_id", project_id)
        .field("minter_id", minter)
        .field("minter_type", minter_type)
        .emit();
}

pub(crate) fn emit_project_minter_removed(
    actor: &AccountId,
    project_id: ProjectId,
    minter: &AccountId,
) {
    EventBuilder::new(MINTER_FILTER, "project_minter_removed", actor)
        .field("project_id", project_id)
        .field("minter_id", minter)
        .emit();
}

pub(crate) fn emit_project_registered(actor: &AccountId, project_id: ProjectId, info: &ProjectInfo) {
    EventBuilder::new(MINTER_FILTER, "project_registered", actor)
        .field("project_id", project_id)
        .field("artist_id", &info.artist_id)
        .field("max_invocations", info.max_invocations)
        .field("invocations", info.invocations)
        .emit();
}

pub(crate) fn emit_project_updated(actor: &AccountId, project_id: ProjectId, info: &ProjectInfo) {
    EventBuilder::new(MINTER_FILTER, "project_updated", actor)
        .field("project_id", project_id)
        .field("artist_id", &info.artist_id)
        .field("max_invocations", info.max_invocations)
        .field("invocations", info.invocations)
        .emit();
}
