use crate::*;

#[near(serializers = [borsh])]
#[derive(Clone, Debug, PartialEq)]
pub struct ExpAuction {
    pub timestamp_start: u64,
    pub half_life_seconds: u64,
    pub start_price: u128,
    pub base_price: u128,
}

impl ExpAuction {
    pub fn decay(&self) -> ExponentialDecay {
        ExponentialDecay {
            timestamp_start: self.timestamp_start,
            half_life_seconds: self.half_life_seconds,
            start_price: self.start_price,
            base_price: self.base_price,
        }
    }

    pub fn has_started(&self, now: u64) -> bool {
        now >= self.timestamp_start
    }

    /// Price shown to callers; before the start this is the start price.
    pub fn display_price(&self, now: u64) -> u128 {
        self.decay().price_at(now).unwrap_or(self.start_price)
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct AuctionParametersView {
    pub timestamp_start: u64,
    pub price_decay_half_life_seconds: u64,
    pub start_price: U128,
    pub base_price: U128,
    pub fully_decayed_at: u64,
}

impl From<&ExpAuction> for AuctionParametersView {
    fn from(auction: &ExpAuction) -> Self {
        Self {
            timestamp_start: auction.timestamp_start,
            price_decay_half_life_seconds: auction.half_life_seconds,
            start_price: U128(auction.start_price),
            base_price: U128(auction.base_price),
            fully_decayed_at: auction.decay().fully_decayed_at(),
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct HalfLifeRangeView {
    pub minimum_seconds: u64,
    pub maximum_seconds: u64,
}
