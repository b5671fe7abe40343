use crate::allowlist::parse_proof;
use crate::*;

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn purchase(
        &mut self,
        project_id: ProjectId,
        proof: Vec<String>,
    ) -> Result<Promise, MinterError> {
        self.purchase_to(env::predecessor_account_id(), project_id, proof)
    }

    /// The caller, not `to`, must be on the allowlist and is the one whose
    /// per-address count is charged.
    #[payable]
    #[handle_result]
    pub fn purchase_to(
        &mut self,
        to: AccountId,
        project_id: ProjectId,
        proof: Vec<String>,
    ) -> Result<Promise, MinterError> {
        let buyer = env::predecessor_account_id();
        let deposit = attached_deposit();
        self.sale_state(project_id)?.check_mintable(project_id)?;
        let price = *self
            .prices
            .get(&project_id)
            .ok_or(MinterError::NotConfigured(project_id))?;
        let proof = parse_proof(&proof)?;
        if !self.verify_account(project_id, &buyer, &proof)? {
            return Err(MinterError::InvalidProof(project_id));
        }
        self.check_address_limit(project_id, &buyer)?;
        require_deposit(price, deposit)?;

        self.record_user_mint(project_id, &buyer);
        if let Some(state) = self.projects.get_mut(&project_id) {
            state.record_mint();
        }

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
        if token_id.is_none() {
            self.rollback_user_mint(project_id, buyer);
        }
        match self.projects.get_mut(&project_id) {
            Some(state) => finish_purchase(state, project_id, buyer, deposit, price, token_id),
            None => {
                transfer(buyer, deposit);
                None
            }
        }
    }
}
