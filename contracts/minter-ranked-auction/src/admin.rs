use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, minter_filter_id: AccountId) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            minter_filter_id,
            projects: LookupMap::new(StorageKey::Projects),
            auctions: LookupMap::new(StorageKey::Auctions),
            bids: LookupMap::new(StorageKey::Bids),
            next_bid_id: 0,
            refund_balances: LookupMap::new(StorageKey::RefundBalances),
            heap_crossover_capacity: DEFAULT_HEAP_CROSSOVER_CAPACITY,
        }
    }

    /// Affects auctions configured afterwards.
    #[payable]
    #[handle_result]
    pub fn set_heap_crossover_capacity(&mut self, capacity: u32) -> Result<(), MinterError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        AuthContext::new(&caller, &self.owner_id).require_admin()?;
        self.heap_crossover_capacity = capacity;
        events::emit_heap_crossover_updated(&caller, capacity);
        Ok(())
    }

    /// Only while the auction holds no bids; escrowed bids are never discarded.
    #[payable]
    #[handle_result]
    pub fn reset_auction_details(&mut self, project_id: ProjectId) -> Result<(), MinterError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        AuthContext::new(&caller, &self.owner_id).require_admin()?;
        let auction = self.auction(project_id)?;
        if auction.num_bids > 0 {
            return Err(MinterError::InvalidState(format!(
                "Auction for project {} holds {} bids",
                project_id, auction.num_bids
            )));
        }
        self.auctions.remove(&project_id);
        events::emit_reset_auction_details(&caller, project_id);
        Ok(())
    }
}

impl Contract {
    pub(crate) fn auction(&self, project_id: ProjectId) -> Result<&RankedAuction, MinterError> {
        self.auctions
            .get(&project_id)
            .ok_or(MinterError::NotConfigured(project_id))
    }
}
