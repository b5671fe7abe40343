use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, minter_filter_id: AccountId) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            minter_filter_id,
            projects: LookupMap::new(StorageKey::Projects),
            prices: LookupMap::new(StorageKey::Prices),
            merkle_roots: LookupMap::new(StorageKey::MerkleRoots),
            invocations_per_address: LookupMap::new(StorageKey::InvocationsPerAddress),
            user_mint_invocations: LookupMap::new(StorageKey::UserMintInvocations),
        }
    }
}
