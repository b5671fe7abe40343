pub const MINTER_TYPE: &str = "MinterMerkleV1";

pub const DEFAULT_INVOCATIONS_PER_ADDRESS: u32 = 1;

/// Deep enough for 2^32 allowlisted accounts.
pub const MAX_PROOF_DEPTH: usize = 32;
