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
}
