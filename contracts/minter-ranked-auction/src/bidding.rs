use crate::bids::{ProjectBids, open_queue};
use crate::*;

#[near]
impl Contract {
    /// Places a bid worth the attached deposit rounded down to a whole bid
    /// increment; the rounding remainder goes to the bidder's refund balance.
    /// Once the queue is full a bid must beat the lowest bid, which is evicted
    /// and refunded. Returns the new bid id.
    #[payable]
    #[handle_result]
    pub fn create_bid(&mut self, project_id: ProjectId) -> Result<U64, MinterError> {
        let bidder = env::predecessor_account_id();
        let deposit = attached_deposit();
        if !self.sale_state(project_id)?.assigned {
            return Err(MinterError::NotAssigned(project_id));
        }
        let mut auction = self.auction(project_id)?.clone();
        match auction.phase(now_seconds()) {
            AuctionPhase::Active => {}
            AuctionPhase::Unconfigured | AuctionPhase::Configured => {
                return Err(MinterError::AuctionNotStarted(project_id));
            }
            AuctionPhase::Settling | AuctionPhase::Settled => {
                return Err(MinterError::AuctionEnded(project_id));
            }
        }

        let minimum = self.minimum_next_bid(project_id, &auction);
        let (slot_index, value) = auction
            .quantize(deposit)
            .filter(|(_, value)| *value >= minimum.value.0)
            .ok_or(MinterError::InsufficientBidValue {
                minimum: minimum.value,
            })?;
        let bid = Bid {
            bid_id: self.next_bid_id,
            bidder: bidder.clone(),
            slot_index: U128(slot_index),
            value: U128(value),
        };

        let offer = {
            let mut queue = open_queue(
                ProjectBids::new(&mut self.bids, project_id, auction.num_bids),
                &auction,
            );
            let offer = queue.offer(bid.clone());
            auction.num_bids = queue.len();
            offer
        };
        match offer {
            Offer::Inserted => {}
            Offer::Evicted(evicted) => {
                events::emit_bid_removed(project_id, &evicted);
                self.credit_refund(&evicted.bidder, evicted.value.0);
            }
            Offer::Rejected(_) => {
                return Err(MinterError::InsufficientBidValue {
                    minimum: minimum.value,
                });
            }
        }

        self.next_bid_id += 1;
        self.auctions.insert(project_id, auction);
        events::emit_bid_created(project_id, &bid);
        self.credit_refund(&bidder, deposit - value);
        Ok(U64(bid.bid_id))
    }
}
