use crate::bids::ProjectBidsView;
use minter_math::BidSlots;

use crate::*;

#[near]
impl Contract {
    pub fn minter_type(&self) -> String {
        MINTER_TYPE.to_string()
    }

    pub fn minter_version(&self) -> String {
        self.version.clone()
    }

    pub fn minter_filter_id(&self) -> &AccountId {
        &self.minter_filter_id
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_heap_crossover_capacity(&self) -> u32 {
        self.heap_crossover_capacity
    }

    /// For a ranked auction the token price is the smallest bid that would
    /// currently be accepted.
    pub fn get_price_info(&self, project_id: ProjectId) -> PriceInfo {
        self.auctions
            .get(&project_id)
            .map_or_else(PriceInfo::unconfigured, |auction| {
                PriceInfo::configured(self.minimum_next_bid(project_id, auction).value.0)
            })
    }

    #[handle_result]
    pub fn get_minimum_next_bid(&self, project_id: ProjectId) -> Result<MinimumBid, MinterError> {
        let auction = self.auction(project_id)?;
        Ok(self.minimum_next_bid(project_id, auction))
    }

    pub fn get_lowest_bid(&self, project_id: ProjectId) -> Option<Bid> {
        let auction = self.auctions.get(&project_id)?;
        self.lowest_bid(project_id, auction)
    }

    /// Active bids in queue slot order, which is not rank order.
    pub fn get_bids(
        &self,
        project_id: ProjectId,
        from_index: Option<u32>,
        limit: Option<u32>,
    ) -> Vec<Bid> {
        let Some(auction) = self.auctions.get(&project_id) else {
            return Vec::new();
        };
        let slots = ProjectBidsView::new(&self.bids, project_id, auction.num_bids);
        let start = from_index.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT);
        (start..slots.len())
            .take(limit as usize)
            .filter_map(|index| slots.get(index))
            .collect()
    }

    pub fn get_auction(&self, project_id: ProjectId) -> Option<AuctionView> {
        self.auctions
            .get(&project_id)
            .map(|auction| AuctionView::new(project_id, auction, now_seconds()))
    }

    pub fn get_auction_phase(&self, project_id: ProjectId) -> AuctionPhase {
        self.auctions
            .get(&project_id)
            .map_or(AuctionPhase::Unconfigured, |auction| auction.phase(now_seconds()))
    }

    pub fn get_project_sale_state(&self, project_id: ProjectId) -> Option<ProjectSaleView> {
        self.projects
            .get(&project_id)
            .map(|state| ProjectSaleView::new(project_id, state))
    }
}
