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

    pub fn get_price_info(&self, project_id: ProjectId) -> PriceInfo {
        self.auctions
            .get(&project_id)
            .map_or_else(PriceInfo::unconfigured, |auction| {
                PriceInfo::configured(auction.display_price(now_seconds()))
            })
    }

    pub fn get_project_auction_parameters(
        &self,
        project_id: ProjectId,
    ) -> Option<AuctionParametersView> {
        self.auctions.get(&project_id).map(AuctionParametersView::from)
    }

    pub fn get_allowable_auction_duration_seconds(&self) -> DurationRangeView {
        DurationRangeView {
            minimum_seconds: self.minimum_auction_duration_seconds,
            maximum_seconds: self.maximum_auction_duration_seconds,
        }
    }

    pub fn get_project_sale_state(&self, project_id: ProjectId) -> Option<ProjectSaleView> {
        self.projects
            .get(&project_id)
            .map(|state| ProjectSaleView::new(project_id, state))
    }
}
