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
            auctions: LookupMap::new(StorageKey::Auctions),
            minimum_auction_duration_seconds: DEFAULT_MIN_AUCTION_DURATION_SECONDS,
            maximum_auction_duration_seconds: DEFAULT_MAX_AUCTION_DURATION_SECONDS,
        }
    }

    /// Applies to auctions configured afterwards.
    #[payable]
    #[handle_result]
    pub fn set_allowable_auction_duration_seconds(
        &mut self,
        minimum_seconds: u64,
        maximum_seconds: u64,
    ) -> Result<(), MinterError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        AuthContext::new(&caller, &self.owner_id).require_admin()?;
        let range = DurationRange::new(minimum_seconds, maximum_seconds)
            .map_err(|e| MinterError::OutOfRange(e.to_string()))?;
        self.minimum_auction_duration_seconds = range.min;
        self.maximum_auction_duration_seconds = range.max;
        events::emit_duration_range_updated(&caller, range.min, range.max);
        Ok(())
    }

    /// Admin-only, allowed at any time. Purchases fail `NotConfigured` until
    /// the artist sets new details.
    #[payable]
    #[handle_result]
    pub fn reset_auction_details(&mut self, project_id: ProjectId) -> Result<(), MinterError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        AuthContext::new(&caller, &self.owner_id).require_admin()?;
        if self.auctions.remove(&project_id).is_none() {
            return Err(MinterError::NotConfigured(project_id));
        }
        events::emit_reset_auction_details(&caller, project_id);
        Ok(())
    }
}

impl Contract {
    pub(crate) fn duration_range(&self) -> DurationRange {
        DurationRange {
            min: self.minimum_auction_duration_seconds,
            max: self.maximum_auction_duration_seconds,
        }
    }
}
