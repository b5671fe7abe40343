pub const MINTER_TYPE: &str = "MinterDAExpV1";

pub const DEFAULT_MIN_HALF_LIFE_SECONDS: u64 = 300;
pub const DEFAULT_MAX_HALF_LIFE_SECONDS: u64 = 3_600;
