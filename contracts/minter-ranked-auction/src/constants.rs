pub const MINTER_TYPE: &str = "MinterRankedAuctionV1";

pub const MAX_AUCTION_CAPACITY: u32 = 1_024;
pub const DEFAULT_HEAP_CROSSOVER_CAPACITY: u32 = 8;

/// Each settled bid schedules a filter mint plus its callback.
pub const MAX_SETTLEMENTS_PER_CALL: u32 = 4;
pub const MAX_LOSER_REFUNDS_PER_CALL: u32 = 32;

pub const DEFAULT_PAGE_LIMIT: u32 = 50;
pub const MAX_PAGE_LIMIT: u32 = 100;
