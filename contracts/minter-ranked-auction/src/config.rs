use crate::*;

#[near]
impl Contract {
    /// Artist-only. Capacity is the project's remaining invocations at this
    /// moment. Details can be replaced until the auction starts, and again
    /// once a finished auction is fully settled.
    #[handle_result]
    pub fn set_auction_details(
        &mut self,
        project_id: ProjectId,
        timestamp_start: u64,
        timestamp_end: u64,
        base_price: U128,
        bid_increment: U128,
    ) -> Result<(), MinterError> {
        let caller = env::predecessor_account_id();
        self.auth(&caller, project_id)?.require_artist()?;
        let now = now_seconds();
        if self.auctions.get(&project_id).is_some_and(|existing| {
            matches!(
                existing.phase(now),
                AuctionPhase::Active | AuctionPhase::Settling
            )
        }) {
            return Err(MinterError::AuctionAlreadyStarted(project_id));
        }
        if timestamp_start <= now {
            return Err(MinterError::AuctionStartInPast);
        }
        if timestamp_end <= timestamp_start {
            return Err(MinterError::InvalidInput(
                "Auction end must be after its start".to_string(),
            ));
        }
        if base_price.0 == 0 || bid_increment.0 == 0 {
            return Err(MinterError::InvalidInput(
                "Base price and bid increment must be positive".to_string(),
            ));
        }

        let state = self.sale_state(project_id)?;
        let capacity = state.max_invocations().saturating_sub(state.invocations);
        if capacity == 0 {
            return Err(MinterError::MaxInvocationsReached(project_id));
        }
        if capacity > MAX_AUCTION_CAPACITY {
            return Err(MinterError::OutOfRange(format!(
                "Auction capacity {} exceeds maximum {}",
                capacity, MAX_AUCTION_CAPACITY
            )));
        }

        let auction = RankedAuction {
            timestamp_start,
            timestamp_end,
            base_price: base_price.0,
            bid_increment: bid_increment.0,
            capacity,
            uses_heap: capacity > self.heap_crossover_capacity,
            num_bids: 0,
            settlement_started: false,
            clearing_price: None,
        };
        events::emit_set_auction_details(&caller, project_id, &auction);
        self.auctions.insert(project_id, auction);
        Ok(())
    }

    /// Artist-only. While an auction is running or settling the cap cannot
    /// drop below the tokens its bids are still owed.
    #[handle_result]
    pub fn manually_limit_project_max_invocations(
        &mut self,
        project_id: ProjectId,
        max_invocations: u32,
    ) -> Result<(), MinterError> {
        let invocations = self.sale_state(project_id)?.invocations;
        if let Some(auction) = self.auctions.get(&project_id) {
            let owed = match auction.phase(now_seconds()) {
                AuctionPhase::Active => auction.capacity,
                AuctionPhase::Settling => {
                    auction.num_bids.min(self.remaining_supply(project_id))
                }
                _ => 0,
            };
            if max_invocations < invocations.saturating_add(owed) {
                return Err(MinterError::OutOfRange(format!(
                    "Auction for project {} still owes {} tokens",
                    project_id, owed
                )));
            }
        }
        self.limit_project_max_invocations(project_id, max_invocations)
    }
}
