use crate::*;

#[near(serializers = [borsh])]
#[derive(Clone, Debug, PartialEq)]
pub struct RankedAuction {
    pub timestamp_start: u64,
    pub timestamp_end: u64,
    pub base_price: u128,
    pub bid_increment: u128,
    pub capacity: u32,
    // Queue layout is fixed when the auction is configured.
    pub uses_heap: bool,
    pub num_bids: u32,
    pub settlement_started: bool,
    // Fixed during settlement, before the first winner is minted.
    pub clearing_price: Option<u128>,
}

#[near(serializers = [json])]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuctionPhase {
    Unconfigured,
    Configured,
    Active,
    Settling,
    Settled,
}

impl RankedAuction {
    pub fn phase(&self, now: u64) -> AuctionPhase {
        if now < self.timestamp_start {
            AuctionPhase::Configured
        } else if now < self.timestamp_end {
            AuctionPhase::Active
        } else if self.num_bids > 0 {
            AuctionPhase::Settling
        } else {
            AuctionPhase::Settled
        }
    }

    pub fn is_full(&self) -> bool {
        self.num_bids >= self.capacity
    }

    pub fn slot_value(&self, slot_index: u128) -> u128 {
        self.base_price
            .saturating_add(slot_index.saturating_mul(self.bid_increment))
    }

    /// Highest slot a deposit pays for, with that slot's value.
    /// `None` if the deposit is below the base price.
    pub fn quantize(&self, deposit: u128) -> Option<(u128, u128)> {
        let above_base = deposit.checked_sub(self.base_price)?;
        let slot_index = above_base / self.bid_increment;
        Some((slot_index, self.slot_value(slot_index)))
    }
}

#[near(serializers = [json])]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimumBid {
    pub slot_index: U128,
    pub value: U128,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct AuctionView {
    pub project_id: ProjectId,
    pub phase: AuctionPhase,
    pub timestamp_start: u64,
    pub timestamp_end: u64,
    pub base_price: U128,
    pub bid_increment: U128,
    pub capacity: u32,
    pub num_bids: u32,
    pub uses_heap: bool,
    pub clearing_price: Option<U128>,
}

impl AuctionView {
    pub fn new(project_id: ProjectId, auction: &RankedAuction, now: u64) -> Self {
        Self {
            project_id,
            phase: auction.phase(now),
            timestamp_start: auction.timestamp_start,
            timestamp_end: auction.timestamp_end,
            base_price: U128(auction.base_price),
            bid_increment: U128(auction.bid_increment),
            capacity: auction.capacity,
            num_bids: auction.num_bids,
            uses_heap: auction.uses_heap,
            clearing_price: auction.clearing_price.map(U128),
        }
    }
}
