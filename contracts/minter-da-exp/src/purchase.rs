use crate::*;

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn purchase(&mut self, project_id: ProjectId) -> Result<Promise, MinterError> {
        self.purchase_to(env::predecessor_account_id(), project_id)
    }

    /// Mints to `to` at the current auction price, paid for by the caller.
    /// The price is fixed when the call is processed; the excess is refunded.
    #[payable]
    #[handle_result]
    pub fn purchase_to(
        &mut self,
        to: AccountId,
        project_id: ProjectId,
    ) -> Result<Promise, MinterError> {
        let buyer = env::predecessor_account_id();
        let deposit = attached_deposit();
        let state = self
            .projects
            .get_mut(&project_id)
            .ok_or(MinterError::NotAssigned(project_id))?;
        state.check_mintable(project_id)?;
        let price = self
            .auctions
            .get(&project_id)
            .ok_or(MinterError::NotConfigured(project_id))?
            .decay()
            .price_at(now_seconds())
            .map_err(|e| MinterError::from_pricing(project_id, e))?;
        require_deposit(price, deposit)?;
        state.record_mint();

        Ok(
            mint_via_filter(&self.minter_filter_id, to, project_id, buyer.clone()).then(
                Self::ext(env::current_account_id())
                    .with_static_gas(GAS_FOR_MINT_CALLBACK)
                    .on_purchase_minted(project_id, buyer, U128(deposit), U128(price)),
            ),
        )
    }

    #[private]
    pub fn on_purchase_minted(
        &mut self,
        project_id: ProjectId,
        buyer: AccountId,
        deposit: U128,
        price: U128,
    ) -> Option<U64> {
        self.resolve_purchase(project_id, &buyer, deposit.0, price.0, mint_outcome())
    }
}

impl Contract {
    pub(crate) fn resolve_purchase(
        &mut self,
        project_id: ProjectId,
        buyer: &AccountId,
        deposit: u128,
        price: u128,
        token_id: Option<U64>,
    ) -> Option<U64> {
        match self.projects.get_mut(&project_id) {
            Some(state) => finish_purchase(state, project_id, buyer, deposit, price, token_id),
            None => {
                transfer(buyer, deposit);
                None
            }
        }
    }
}
