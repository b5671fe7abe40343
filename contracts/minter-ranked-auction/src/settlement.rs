use crate::bids::{ProjectBids, open_queue};
use crate::*;

#[near]
impl Contract {
    /// Settles the queue lowest bid first once the auction has ended, minting
    /// to at most `max_mints` winners per call. Anyone may call it, repeatedly,
    /// until the queue is empty. Returns the number of bids settled.
    ///
    /// Winners are the highest bids that fit the project's remaining supply;
    /// lower bids are refunded in full. Every winner pays the same clearing
    /// price: the lowest winning bid if demand met supply, the base price
    /// otherwise. The part of each bid above it is credited back to the bidder.
    #[handle_result]
    pub fn settle_auction(
        &mut self,
        project_id: ProjectId,
        max_mints: Option<u32>,
    ) -> Result<u32, MinterError> {
        let mut auction = self.auction(project_id)?.clone();
        match auction.phase(now_seconds()) {
            AuctionPhase::Settling => {}
            AuctionPhase::Settled => {
                return Err(MinterError::InvalidState(format!(
                    "Auction for project {} is fully settled",
                    project_id
                )));
            }
            _ => return Err(MinterError::AuctionNotEnded(project_id)),
        }
        let max_mints = max_mints
            .unwrap_or(MAX_SETTLEMENTS_PER_CALL)
            .clamp(1, MAX_SETTLEMENTS_PER_CALL);
        let supply = self.remaining_supply(project_id);

        if !auction.settlement_started {
            auction.settlement_started = true;
            // Otherwise the lowest winning bid sets the price once it is reached.
            if !auction.is_full() && auction.num_bids <= supply {
                auction.clearing_price = Some(auction.base_price);
            }
        }

        let (losers, winners) = {
            let mut queue = open_queue(
                ProjectBids::new(&mut self.bids, project_id, auction.num_bids),
                &auction,
            );
            let mut losers = Vec::new();
            let mut winners = Vec::with_capacity(max_mints as usize);
            while winners.len() < max_mints as usize
                && losers.len() < MAX_LOSER_REFUNDS_PER_CALL as usize
            {
                // The minimum loses while more bids remain than tokens left to mint.
                let loses = queue.len() > supply.saturating_sub(winners.len() as u32);
                match queue.pop_min() {
                    Some(bid) if loses => losers.push(bid),
                    Some(bid) => winners.push(bid),
                    None => break,
                }
            }
            auction.num_bids = queue.len();
            (losers, winners)
        };
        if auction.clearing_price.is_none() {
            auction.clearing_price = winners.first().map(|lowest| lowest.value.0);
        }
        let clearing_price = auction.clearing_price.unwrap_or(auction.base_price);
        self.auctions.insert(project_id, auction);

        for bid in &losers {
            events::emit_bid_removed(project_id, bid);
            self.credit_refund(&bid.bidder, bid.value.0);
        }
        for bid in &winners {
            self.settle_bid(project_id, bid, clearing_price);
        }
        Ok((losers.len() + winners.len()) as u32)
    }

    #[private]
    pub fn on_bid_settled(
        &mut self,
        project_id: ProjectId,
        bid_id: U64,
        bidder: AccountId,
        clearing_price: U128,
    ) -> Option<U64> {
        self.resolve_settlement(project_id, bid_id.0, &bidder, clearing_price.0, mint_outcome())
    }
}

impl Contract {
    /// Tokens the project can still mint through this minter.
    pub(crate) fn remaining_supply(&self, project_id: ProjectId) -> u32 {
        self.projects
            .get(&project_id)
            .filter(|state| state.assigned)
            .map_or(0, |state| state.max_invocations().saturating_sub(state.invocations))
    }

    fn settle_bid(&mut self, project_id: ProjectId, bid: &Bid, clearing_price: u128) {
        self.credit_refund(&bid.bidder, bid.value.0.saturating_sub(clearing_price));
        let mintable = match self.projects.get_mut(&project_id) {
            Some(state) if state.check_mintable(project_id).is_ok() => {
                state.record_mint();
                true
            }
            _ => false,
        };
        if !mintable {
            events::emit_bid_settlement_failed(project_id, bid.bid_id, &bid.bidder);
            self.credit_refund(&bid.bidder, clearing_price);
            return;
        }
        let _ = mint_via_filter(
            &self.minter_filter_id,
            bid.bidder.clone(),
            project_id,
            bid.bidder.clone(),
        )
        .then(
            Self::ext(env::current_account_id())
                .with_static_gas(GAS_FOR_MINT_CALLBACK)
                .on_bid_settled(project_id, U64(bid.bid_id), bid.bidder.clone(), U128(clearing_price)),
        );
    }

    pub(crate) fn resolve_settlement(
        &mut self,
        project_id: ProjectId,
        bid_id: u64,
        bidder: &AccountId,
        clearing_price: u128,
        token_id: Option<U64>,
    ) -> Option<U64> {
        match token_id {
            Some(token_id) => {
                if let Some(state) = self.projects.get(&project_id) {
                    transfer(&state.artist_id, clearing_price);
                }
                events::emit_bid_settled(project_id, bid_id, bidder, token_id.0, clearing_price);
                Some(token_id)
            }
            None => {
                if let Some(state) = self.projects.get_mut(&project_id) {
                    state.rollback_mint();
                }
                events::emit_bid_settlement_failed(project_id, bid_id, bidder);
                self.credit_refund(bidder, clearing_price);
                None
            }
        }
    }
}
