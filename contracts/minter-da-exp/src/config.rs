use crate::*;

#[near]
impl Contract {
    /// Artist-only. The start must be in the future and the half-life within
    /// the allowed range. Once the auction starts it can only be reset by the admin.
    #[handle_result]
    pub fn set_auction_details(
        &mut self,
        project_id: ProjectId,
        auction_timestamp_start: u64,
        price_decay_half_life_seconds: u64,
        start_price: U128,
        base_price: U128,
    ) -> Result<(), MinterError> {
        let caller = env::predecessor_account_id();
        self.auth(&caller, project_id)?.require_artist()?;
        let now = now_seconds();
        if self
            .auctions
            .get(&project_id)
            .is_some_and(|auction| auction.has_started(now))
        {
            return Err(MinterError::AuctionAlreadyStarted(project_id));
        }

        let auction = ExpAuction {
            timestamp_start: auction_timestamp_start,
            half_life_seconds: price_decay_half_life_seconds,
            start_price: start_price.0,
            base_price: base_price.0,
        };
        auction
            .decay()
            .validate(now, self.half_life_range())
            .map_err(|e| MinterError::from_pricing(project_id, e))?;

        events::emit_set_auction_details(&caller, project_id, &auction);
        self.auctions.insert(project_id, auction);
        Ok(())
    }
}
