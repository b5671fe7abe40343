use crate::*;

#[near(serializers = [borsh])]
#[derive(Clone, Debug, PartialEq)]
pub struct LinAuction {
    pub timestamp_start: u64,
    pub duration_seconds: u64,
    pub start_price: u128,
    pub base_price: u128,
}

impl LinAuction {
    pub fn decay(&self) -> LinearDecay {
        LinearDecay {
            timestamp_start: self.timestamp_start,
            duration_seconds: self.duration_seconds,
            start_price: self.start_price,
            base_price: self.base_price,
        }
    }

    pub fn has_started(&self, now: u64) -> bool {
        now >= self.timestamp_start
    }

    pub fn display_price(&self, now: u64) -> u128 {
        self.decay().price_at(now).unwrap_or(self.start_price)
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct AuctionParametersView {
    pub timestamp_start: u64,
    pub timestamp_end: u64,
    pub auction_duration_seconds: u64,
    pub start_price: U128,
    pub base_price: U128,
}

impl From<&LinAuction> for AuctionParametersView {
    fn from(auction: &LinAuction) -> Self {
        Self {
            timestamp_start: auction.timestamp_start,
            timestamp_end: auction.decay().timestamp_end(),
            auction_duration_seconds: auction.duration_seconds,
            start_price: U128(auction.start_price),
            base_price: U128(auction.base_price),
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct DurationRangeView {
    pub minimum_seconds: u64,
    pub maximum_seconds: u64,
}
