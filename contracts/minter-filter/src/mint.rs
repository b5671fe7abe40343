use crate::*;

#[near]
impl Contract {
    /// Forwards a mint to Core. Only the project's assigned minter may call
    /// this, which is what keeps unassigned minters from minting.
    #[handle_result]
    pub fn mint(
        &mut self,
        to: AccountId,
        project_id: ProjectId,
        sender: AccountId,
    ) -> Result<Promise, MinterError> {
        self.check_assigned_minter(&env::predecessor_account_id(), project_id)?;
        Ok(ext_core::ext(self.core_contract_id.clone())
            .with_static_gas(GAS_FOR_CORE_MINT)
            .mint(to, project_id, sender)
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(GAS_FOR_CORE_MINT_CALLBACK)
                    .on_core_minted(project_id),
            ))
    }

    /// Passes Core's token id back to the minter, or `None` if the mint failed.
    #[private]
    pub fn on_core_minted(&mut self, project_id: ProjectId) -> Option<U64> {
        self.resolve_core_mint(project_id, mint_outcome())
    }
}

impl Contract {
    /// Keeps the mirrored invocation count current so a newly assigned
    /// minter starts from what has actually been minted.
    pub(crate) fn resolve_core_mint(
        &mut self,
        project_id: ProjectId,
        token_id: Option<U64>,
    ) -> Option<U64> {
        if token_id.is_some() {
            if let Some(info) = self.projects.get_mut(&project_id) {
                info.invocations = info.invocations.saturating_add(1);
            }
        }
        token_id
    }

    pub(crate) fn check_assigned_minter(
        &self,
        caller: &AccountId,
        project_id: ProjectId,
    ) -> Result<(), MinterError> {
        match self.project_minters.get(&project_id) {
            None => Err(MinterError::NotAssigned(project_id)),
            Some(minter) if minter != caller => {
                Err(MinterError::only("the project's assigned minter"))
            }
            Some(_) => Ok(()),
        }
    }
}
