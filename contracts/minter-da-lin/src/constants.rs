pub const MINTER_TYPE: &str = "MinterDALinV1";

pub const DEFAULT_MIN_AUCTION_DURATION_SECONDS: u64 = 3_600;
pub const DEFAULT_MAX_AUCTION_DURATION_SECONDS: u64 = 30 * 24 * 3_600;
