use crate::*;

#[near]
impl Contract {
    /// Withdraws the caller's whole refund balance. A failed transfer puts
    /// the balance back.
    #[handle_result]
    pub fn claim_refunds(&mut self) -> Result<Promise, MinterError> {
        let account = env::predecessor_account_id();
        let amount = self.refund_balances.remove(&account).unwrap_or(0);
        if amount == 0 {
            return Err(MinterError::InvalidState(format!(
                "No refunds to claim for {}",
                account
            )));
        }
        Ok(Promise::new(account.clone())
            .transfer(NearToken::from_yoctonear(amount))
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(GAS_FOR_REFUND_CALLBACK)
                    .on_refund_claimed(account, U128(amount)),
            ))
    }

    #[private]
    pub fn on_refund_claimed(&mut self, account: AccountId, amount: U128) -> bool {
        self.resolve_refund_claim(&account, amount.0, promise_succeeded())
    }

    pub fn get_refund_balance(&self, account: AccountId) -> U128 {
        U128(self.refund_balance(&account))
    }
}

impl Contract {
    pub(crate) fn refund_balance(&self, account: &AccountId) -> u128 {
        self.refund_balances.get(account).copied().unwrap_or(0)
    }

    pub(crate) fn credit_refund(&mut self, account: &AccountId, amount: u128) {
        if amount == 0 {
            return;
        }
        let balance = self.refund_balance(account).saturating_add(amount);
        self.refund_balances.insert(account.clone(), balance);
        events::emit_refund_credited(account, amount, balance);
    }

    pub(crate) fn resolve_refund_claim(
        &mut self,
        account: &AccountId,
        amount: u128,
        succeeded: bool,
    ) -> bool {
        if succeeded {
            events::emit_refund_claimed(account, amount);
            return true;
        }
        events::emit_refund_claim_failed(account, amount);
        self.credit_refund(account, amount);
        false
    }
}
