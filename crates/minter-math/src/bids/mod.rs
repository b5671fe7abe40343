//! Bounded-capacity bid queues for ranked auctions.
//!
//! A queue keeps at most `capacity` bids and always exposes the lowest-ranked
//! one, which is the bid evicted when a better bid arrives on a full queue.
//! Bids live in a slot store addressed by position so that on-chain storage
//! can keep one record per slot and only touch the slots an operation moves.

mod flat;
mod heap;

pub use flat::FlatBidList;
pub use heap::BidHeap;

/// Ordering contract for bids held in a queue.
///
/// Lower value ranks lower. At equal value the later bid (higher sequence)
/// ranks lower, so the earlier bidder keeps their place.
pub trait RankedBid {
    fn value(&self) -> u128;
    fn sequence(&self) -> u64;

    fn ranks_below(&self, other: &Self) -> bool {
        self.value() < other.value()
            || (self.value() == other.value() && self.sequence() > other.sequence())
    }
}

/// Read access to a position-addressed bid store.
pub trait BidSlots {
    type Bid: RankedBid + Clone;

    fn len(&self) -> u32;
    fn get(&self, index: u32) -> Option<Self::Bid>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Write access to a position-addressed bid store.
pub trait BidSlotsMut: BidSlots {
    /// Overwrites an occupied slot.
    fn set(&mut self, index: u32, bid: Self::Bid);
    fn push(&mut self, bid: Self::Bid);
    fn pop(&mut self) -> Option<Self::Bid>;
}

impl<B: RankedBid + Clone> BidSlots for Vec<B> {
    type Bid = B;

    fn len(&self) -> u32 {
        Vec::len(self) as u32
    }

    fn get(&self, index: u32) -> Option<B> {
        self.as_slice().get(index as usize).cloned()
    }
}

impl<B: RankedBid + Clone> BidSlotsMut for Vec<B> {
    fn set(&mut self, index: u32, bid: B) {
        self[index as usize] = bid;
    }

    fn push(&mut self, bid: B) {
        Vec::push(self, bid);
    }

    fn pop(&mut self) -> Option<B> {
        Vec::pop(self)
    }
}

/// Outcome of offering a bid to a full or non-full queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Offer<B> {
    /// The queue had room; nothing was evicted.
    Inserted,
    /// The queue was full; the returned bid was evicted to make room.
    Evicted(B),
    /// The queue was full and the bid did not beat the current minimum.
    Rejected(B),
}

/// Pluggable priority structure shared by the heap and the flat-array baseline.
pub trait BidQueue {
    type Bid: RankedBid + Clone;

    fn len(&self) -> u32;
    fn capacity(&self) -> u32;
    fn peek_min(&self) -> Option<Self::Bid>;
    /// Inserts into a queue that is not full. Returns the bid back when full.
    fn insert(&mut self, bid: Self::Bid) -> Result<(), Self::Bid>;
    fn pop_min(&mut self) -> Option<Self::Bid>;
    /// Replaces the minimum with `bid`, returning the evicted minimum.
    fn replace_min(&mut self, bid: Self::Bid) -> Option<Self::Bid>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Inserts while there is room; once full, only a bid whose value strictly
    /// exceeds the current minimum is accepted, evicting that minimum.
    fn offer(&mut self, bid: Self::Bid) -> Offer<Self::Bid> {
        if !self.is_full() {
            return match self.insert(bid) {
                Ok(()) => Offer::Inserted,
                Err(bid) => Offer::Rejected(bid),
            };
        }
        match self.peek_min() {
            Some(min) if bid.value() > min.value() => match self.replace_min(bid) {
                Some(evicted) => Offer::Evicted(evicted),
                None => Offer::Inserted,
            },
            _ => Offer::Rejected(bid),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_bid {
    use super::RankedBid;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct TestBid {
        pub seq: u64,
        pub value: u128,
    }

    impl RankedBid for TestBid {
        fn value(&self) -> u128 {
            self.value
        }

        fn sequence(&self) -> u64 {
            self.seq
        }
    }

    /// Deterministic pseudo-random values for sequence tests.
    pub struct Lcg(pub u64);

    impl Lcg {
        pub fn next_value(&mut self, modulo: u128) -> u128 {
            self.0 = self
                .0
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            ((self.0 >> 33) as u128) % modulo
        }
    }
}
