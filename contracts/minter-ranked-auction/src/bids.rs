use minter_math::{BidSlots, BidSlotsMut, RankedBid};

use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    pub bid_id: u64,
    pub bidder: AccountId,
    pub slot_index: U128,
    pub value: U128,
}

impl RankedBid for Bid {
    fn value(&self) -> u128 {
        self.value.0
    }

    fn sequence(&self) -> u64 {
        self.bid_id
    }
}

pub(crate) type BidStore = LookupMap<(ProjectId, u32), Bid>;

/// One project's queue slots, read and written in place.
pub(crate) struct ProjectBids<'a> {
    store: &'a mut BidStore,
    project_id: ProjectId,
    len: u32,
}

impl<'a> ProjectBids<'a> {
    pub(crate) fn new(store: &'a mut BidStore, project_id: ProjectId, len: u32) -> Self {
        Self {
            store,
            project_id,
            len,
        }
    }
}

impl BidSlots for ProjectBids<'_> {
    type Bid = Bid;

    fn len(&self) -> u32 {
        self.len
    }

    fn get(&self, index: u32) -> Option<Bid> {
        if index >= self.len {
            return None;
        }
        self.store.get(&(self.project_id, index)).cloned()
    }
}

impl BidSlotsMut for ProjectBids<'_> {
    fn set(&mut self, index: u32, bid: Bid) {
        self.store.insert((self.project_id, index), bid);
    }

    fn push(&mut self, bid: Bid) {
        self.store.insert((self.project_id, self.len), bid);
        self.len += 1;
    }

    fn pop(&mut self) -> Option<Bid> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.store.remove(&(self.project_id, self.len))
    }
}

/// Read-only counterpart of [`ProjectBids`] for views.
pub(crate) struct ProjectBidsView<'a> {
    store: &'a BidStore,
    project_id: ProjectId,
    len: u32,
}

impl<'a> ProjectBidsView<'a> {
    pub(crate) fn new(store: &'a BidStore, project_id: ProjectId, len: u32) -> Self {
        Self {
            store,
            project_id,
            len,
        }
    }
}

impl BidSlots for ProjectBidsView<'_> {
    type Bid = Bid;

    fn len(&self) -> u32 {
        self.len
    }

    fn get(&self, index: u32) -> Option<Bid> {
        if index >= self.len {
            return None;
        }
        self.store.get(&(self.project_id, index)).cloned()
    }
}

pub(crate) fn open_queue<'a>(
    slots: ProjectBids<'a>,
    auction: &RankedAuction,
) -> Box<dyn BidQueue<Bid = Bid> + 'a> {
    if auction.uses_heap {
        Box::new(BidHeap::new(slots, auction.capacity))
    } else {
        Box::new(FlatBidList::new(slots, auction.capacity))
    }
}

pub(crate) fn lowest_bid(slots: ProjectBidsView<'_>, auction: &RankedAuction) -> Option<Bid> {
    if auction.uses_heap {
        BidHeap::new(slots, auction.capacity).peek_min()
    } else {
        FlatBidList::new(slots, auction.capacity).peek_min()
    }
}

impl Contract {
    pub(crate) fn lowest_bid(&self, project_id: ProjectId, auction: &RankedAuction) -> Option<Bid> {
        lowest_bid(
            ProjectBidsView::new(&self.bids, project_id, auction.num_bids),
            auction,
        )
    }

    /// Smallest bid that would currently enter the queue.
    pub(crate) fn minimum_next_bid(&self, project_id: ProjectId, auction: &RankedAuction) -> MinimumBid {
        let slot_index = match self.lowest_bid(project_id, auction) {
            Some(lowest) if auction.is_full() => lowest.slot_index.0.saturating_add(1),
            _ => 0,
        };
        MinimumBid {
            slot_index: U128(slot_index),
            value: U128(auction.slot_value(slot_index)),
        }
    }
}
