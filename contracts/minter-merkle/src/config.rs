use crate::allowlist::parse_hash;
use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn update_price_per_token(
        &mut self,
        project_id: ProjectId,
        price_per_token: U128,
    ) -> Result<(), MinterError> {
        let caller = env::predecessor_account_id();
        self.auth(&caller, project_id)?.require_artist()?;
        self.prices.insert(project_id, price_per_token.0);
        events::emit_price_per_token_updated(&caller, project_id, price_per_token.0);
        Ok(())
    }

    /// Takes effect immediately: proofs against the previous root stop verifying.
    #[handle_result]
    pub fn update_merkle_root(&mut self, project_id: ProjectId, root: String) -> Result<(), MinterError> {
        let caller = env::predecessor_account_id();
        self.auth(&caller, project_id)?.require_admin_or_artist()?;
        let root = parse_hash(&root)?;
        self.merkle_roots.insert(project_id, root);
        events::emit_merkle_root_updated(&caller, project_id, hex::encode(root));
        Ok(())
    }

    /// Zero lifts the per-address cap.
    #[handle_result]
    pub fn set_project_invocations_per_address(
        &mut self,
        project_id: ProjectId,
        max_invocations_per_address: u32,
    ) -> Result<(), MinterError> {
        let caller = env::predecessor_account_id();
        self.auth(&caller, project_id)?.require_artist()?;
        self.invocations_per_address
            .insert(project_id, max_invocations_per_address);
        events::emit_invocations_per_address_updated(&caller, project_id, max_invocations_per_address);
        Ok(())
    }
}
