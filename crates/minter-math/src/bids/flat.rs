use super::{BidQueue, BidSlots, BidSlotsMut, RankedBid};

/// Unordered flat-array baseline.
///
/// Finding the minimum scans every slot, but a replacement writes a single
/// slot. Cheaper than the heap when the capacity is small and writes dominate.
pub struct FlatBidList<S> {
    slots: S,
    capacity: u32,
}

impl<S: BidSlots> FlatBidList<S> {
    pub fn new(slots: S, capacity: u32) -> Self {
        Self { slots, capacity }
    }

    pub fn len(&self) -> u32 {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn into_slots(self) -> S {
        self.slots
    }

    fn min_slot(&self) -> Option<(u32, S::Bid)> {
        let mut best: Option<(u32, S::Bid)> = None;
        for index in 0..self.slots.len() {
            let Some(candidate) = self.slots.get(index) else {
                continue;
            };
            match &best {
                Some((_, current)) if !candidate.ranks_below(current) => {}
                _ => best = Some((index, candidate)),
            }
        }
        best
    }

    pub fn peek_min(&self) -> Option<S::Bid> {
        self.min_slot().map(|(_, bid)| bid)
    }
}

impl<S: BidSlotsMut> BidQueue for FlatBidList<S> {
    type Bid = S::Bid;

    fn len(&self) -> u32 {
        self.slots.len()
    }

    fn capacity(&self) -> u32 {
        self.capacity
    }

    fn peek_min(&self) -> Option<S::Bid> {
        self.min_slot().map(|(_, bid)| bid)
    }

    fn insert(&mut self, bid: S::Bid) -> Result<(), S::Bid> {
        if self.slots.len() >= self.capacity {
            return Err(bid);
        }
        self.slots.push(bid);
        Ok(())
    }

    fn pop_min(&mut self) -> Option<S::Bid> {
        let (index, min) = self.min_slot()?;
        let last = self.slots.pop()?;
        if index < self.slots.len() {
            self.slots.set(index, last);
        }
        Some(min)
    }

    fn replace_min(&mut self, bid: S::Bid) -> Option<S::Bid> {
        let Some((index, min)) = self.min_slot() else {
            self.slots.push(bid);
            return None;
        };
        self.slots.set(index, bid);
        Some(min)
    }
}
