use near_sdk::json_types::U64;
use near_sdk::{AccountId, NearToken, Promise, env, serde_json};

use crate::events::{emit_purchase, emit_purchase_failed};
use crate::external::{GAS_FOR_FILTER_MINT, MAX_MINT_RESULT_LEN, ext_minter_filter};
use crate::{MinterError, ProjectId, ProjectSaleState};

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Block time in whole seconds; auction parameters are expressed in seconds.
pub fn now_seconds() -> u64 {
    env::block_timestamp() / NANOS_PER_SECOND
}

pub fn attached_deposit() -> u128 {
    env::attached_deposit().as_yoctonear()
}

pub fn require_deposit(required: u128, attached: u128) -> Result<(), MinterError> {
    if attached < required {
        return Err(MinterError::InsufficientDeposit {
            required: required.into(),
            attached: attached.into(),
        });
    }
    Ok(())
}

/// Asks the filter to mint on this minter's behalf. The filter rejects the
/// call unless this contract is the project's assigned minter.
pub fn mint_via_filter(
    minter_filter_id: &AccountId,
    to: AccountId,
    project_id: ProjectId,
    sender: AccountId,
) -> Promise {
    ext_minter_filter::ext(minter_filter_id.clone())
        .with_static_gas(GAS_FOR_FILTER_MINT)
        .mint(to, project_id, sender)
}

/// Token id returned by the mint chain, or `None` if any hop failed.
pub fn mint_outcome() -> Option<U64> {
    if env::promise_results_count() != 1 {
        return None;
    }
    env::promise_result_checked(0, MAX_MINT_RESULT_LEN)
        .ok()
        .and_then(|bytes| serde_json::from_slice::<U64>(&bytes).ok())
}

/// True when the single awaited promise succeeded.
pub fn promise_succeeded() -> bool {
    env::promise_results_count() == 1 && env::promise_result_checked(0, MAX_MINT_RESULT_LEN).is_ok()
}

pub fn transfer(to: &AccountId, amount: u128) {
    if amount > 0 {
        let _ = Promise::new(to.clone()).transfer(NearToken::from_yoctonear(amount));
    }
}

pub fn refund_excess(buyer: &AccountId, deposit: u128, price: u128) {
    transfer(buyer, deposit.saturating_sub(price));
}

/// Completes a fixed-price purchase once the mint chain has answered: pays the
/// artist and refunds the excess, or undoes the committed mint and refunds the
/// whole deposit.
pub fn finish_purchase(
    state: &mut ProjectSaleState,
    project_id: ProjectId,
    buyer: &AccountId,
    deposit: u128,
    price: u128,
    token_id: Option<U64>,
) -> Option<U64> {
    match token_id {
        Some(token_id) => {
            transfer(&state.artist_id, price);
            refund_excess(buyer, deposit, price);
            emit_purchase(buyer, project_id, token_id.0, price);
            Some(token_id)
        }
        None => {
            state.rollback_mint();
            transfer(buyer, deposit);
            emit_purchase_failed(buyer, project_id, deposit);
            None
        }
    }
}
