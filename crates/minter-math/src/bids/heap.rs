use super::{BidQueue, BidSlots, BidSlotsMut, RankedBid};

/// Slot-addressed binary min-heap.
///
/// Slot 0 holds the lowest-ranked bid. Sifts move a "hole" instead of
/// swapping, so each displaced slot is written exactly once.
pub struct BidHeap<S> {
    slots: S,
    capacity: u32,
}

impl<S: BidSlots> BidHeap<S> {
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

    pub fn peek_min(&self) -> Option<S::Bid> {
        self.slots.get(0)
    }

    pub fn into_slots(self) -> S {
        self.slots
    }

    /// True when every parent ranks at or below both of its children.
    pub fn is_valid(&self) -> bool {
        (1..self.slots.len()).all(|i| match (self.slots.get((i - 1) / 2), self.slots.get(i)) {
            (Some(parent), Some(child)) => !child.ranks_below(&parent),
            _ => false,
        })
    }
}

impl<S: BidSlotsMut> BidHeap<S> {
    fn sift_up(&mut self, mut index: u32, bid: S::Bid) {
        while index > 0 {
            let parent_index = (index - 1) / 2;
            let Some(parent) = self.slots.get(parent_index) else {
                break;
            };
            if !bid.ranks_below(&parent) {
                break;
            }
            self.slots.set(index, parent);
            index = parent_index;
        }
        self.slots.set(index, bid);
    }

    fn sift_down(&mut self, mut index: u32, bid: S::Bid) {
        let len = self.slots.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let Some(mut child) = self.slots.get(left) else {
                break;
            };
            let mut child_index = left;
            if right < len {
                if let Some(right_child) = self.slots.get(right) {
                    if right_child.ranks_below(&child) {
                        child = right_child;
                        child_index = right;
                    }
                }
            }
            if !child.ranks_below(&bid) {
                break;
            }
            self.slots.set(index, child);
            index = child_index;
        }
        self.slots.set(index, bid);
    }
}

impl<S: BidSlotsMut> BidQueue for BidHeap<S> {
    type Bid = S::Bid;

    fn len(&self) -> u32 {
        self.slots.len()
    }

    fn capacity(&self) -> u32 {
        self.capacity
    }

    fn peek_min(&self) -> Option<S::Bid> {
        self.slots.get(0)
    }

    fn insert(&mut self, bid: S::Bid) -> Result<(), S::Bid> {
        if self.slots.len() >= self.capacity {
            return Err(bid);
        }
        let index = self.slots.len();
        self.slots.push(bid.clone());
        self.sift_up(index, bid);
        Ok(())
    }

    fn pop_min(&mut self) -> Option<S::Bid> {
        let min = self.slots.get(0)?;
        let last = self.slots.pop()?;
        if !self.slots.is_empty() {
            self.sift_down(0, last);
        }
        Some(min)
    }

    fn replace_min(&mut self, bid: S::Bid) -> Option<S::Bid> {
        let Some(min) = self.slots.get(0) else {
            self.slots.push(bid);
            return None;
        };
        self.sift_down(0, bid);
        Some(min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bids::Offer;
    use crate::bids::test_bid::{Lcg, TestBid};

    fn bid(seq: u64, value: u128) -> TestBid {
        TestBid { seq, value }
    }

    #[test]
    fn fills_then_evicts_minimum() {
        let mut heap = BidHeap::new(Vec::new(), 3);
        assert_eq!(heap.offer(bid(0, 10)), Offer::Inserted);
        assert_eq!(heap.offer(bid(1, 20)), Offer::Inserted);
        assert_eq!(heap.offer(bid(2, 15)), Offer::Inserted);
        assert_eq!(heap.peek_min().unwrap().value, 10);

        assert_eq!(heap.offer(bid(3, 10)), Offer::Rejected(bid(3, 10)));
        assert_eq!(heap.offer(bid(4, 25)), Offer::Evicted(bid(0, 10)));
        assert_eq!(heap.peek_min().unwrap().value, 15);
        assert_eq!(BidQueue::len(&heap), 3);
        assert!(heap.is_valid());
    }

    #[test]
    fn insert_on_full_heap_returns_bid() {
        let mut heap = BidHeap::new(Vec::new(), 1);
        heap.insert(bid(0, 5)).unwrap();
        assert_eq!(heap.insert(bid(1, 9)), Err(bid(1, 9)));
    }

    #[test]
    fn pop_min_drains_in_rank_order() {
        let mut heap = BidHeap::new(Vec::new(), 64);
        let mut rng = Lcg(3);
        for seq in 0..64u64 {
            heap.insert(bid(seq, rng.next_value(20))).unwrap();
            assert!(heap.is_valid());
        }
        let mut last: Option<TestBid> = None;
        while let Some(next) = heap.pop_min() {
            if let Some(prev) = &last {
                assert!(!next.ranks_below(prev));
            }
            assert!(heap.is_valid());
            last = Some(next);
        }
        assert!(heap.is_empty());
    }

    #[test]
    fn root_is_minimum_and_size_bounded_under_pressure() {
        let mut heap = BidHeap::new(Vec::new(), 9);
        let mut rng = Lcg(11);
        for seq in 0..500u64 {
            heap.offer(bid(seq, rng.next_value(1_000)));
            assert!(BidQueue::len(&heap) <= 9);
            assert!(heap.is_valid());
            let slots = heap.slots.clone();
            let min = slots
                .iter()
                .fold(None::<&TestBid>, |acc, b| match acc {
                    Some(a) if !b.ranks_below(a) => Some(a),
                    _ => Some(b),
                })
                .cloned();
            assert_eq!(heap.peek_min(), min);
        }
    }

    #[test]
    fn replace_min_on_empty_heap_inserts() {
        let mut heap = BidHeap::new(Vec::new(), 2);
        assert_eq!(heap.replace_min(bid(0, 1)), None);
        assert_eq!(heap.peek_min(), Some(bid(0, 1)));
    }
}
