use near_sdk::AccountId;
use near_sdk::json_types::U128;
use near_sdk::near;

use crate::{MinterError, ProjectId, ProjectInfo};

pub const CURRENCY_SYMBOL: &str = "NEAR";

/// Per-project bookkeeping every minter keeps about the projects the filter
/// has assigned to it.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectSaleState {
    pub artist_id: AccountId,
    pub assigned: bool,
    pub core_max_invocations: u32,
    pub manual_max_invocations: Option<u32>,
    // Includes mints still awaiting their callback.
    pub invocations: u32,
}

impl ProjectSaleState {
    pub fn new(info: ProjectInfo) -> Self {
        Self {
            artist_id: info.artist_id,
            assigned: true,
            core_max_invocations: info.max_invocations,
            manual_max_invocations: None,
            invocations: info.invocations,
        }
    }

    /// Core's count never lowers the local one, which also holds mints still
    /// awaiting their callback.
    pub fn sync(&mut self, info: ProjectInfo) {
        self.artist_id = info.artist_id;
        self.core_max_invocations = info.max_invocations;
        self.invocations = self.invocations.max(info.invocations);
    }

    /// Re-assignment keeps the mint count and any manual limit.
    pub fn assign(&mut self, info: ProjectInfo) {
        self.sync(info);
        self.assigned = true;
    }

    pub fn max_invocations(&self) -> u32 {
        self.manual_max_invocations
            .map_or(self.core_max_invocations, |manual| {
                manual.min(self.core_max_invocations)
            })
    }

    pub fn max_has_been_invoked(&self) -> bool {
        self.invocations >= self.max_invocations()
    }

    pub fn check_mintable(&self, project_id: ProjectId) -> Result<(), MinterError> {
        if !self.assigned {
            return Err(MinterError::NotAssigned(project_id));
        }
        if self.max_has_been_invoked() {
            return Err(MinterError::MaxInvocationsReached(project_id));
        }
        Ok(())
    }

    pub fn record_mint(&mut self) {
        self.invocations += 1;
    }

    pub fn rollback_mint(&mut self) {
        self.invocations = self.invocations.saturating_sub(1);
    }

    /// Artist-imposed cap below Core's maximum. Never below what has been minted.
    pub fn limit_max_invocations(
        &mut self,
        project_id: ProjectId,
        max_invocations: u32,
    ) -> Result<(), MinterError> {
        if max_invocations > self.core_max_invocations {
            return Err(MinterError::OutOfRange(format!(
                "Project {} max invocations {} exceeds core maximum {}",
                project_id, max_invocations, self.core_max_invocations
            )));
        }
        if max_invocations < self.invocations {
            return Err(MinterError::OutOfRange(format!(
                "Project {} max invocations {} is below minted count {}",
                project_id, max_invocations, self.invocations
            )));
        }
        self.manual_max_invocations = Some(max_invocations);
        Ok(())
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct PriceInfo {
    pub is_configured: bool,
    pub token_price: U128,
    pub currency_symbol: String,
}

impl PriceInfo {
    pub fn configured(price: u128) -> Self {
        Self {
            is_configured: true,
            token_price: U128(price),
            currency_symbol: CURRENCY_SYMBOL.to_string(),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            is_configured: false,
            token_price: U128(0),
            currency_symbol: CURRENCY_SYMBOL.to_string(),
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectSaleView {
    pub project_id: ProjectId,
    pub artist_id: AccountId,
    pub assigned: bool,
    pub max_invocations: u32,
    pub invocations: u32,
    pub max_has_been_invoked: bool,
}

impl ProjectSaleView {
    pub fn new(project_id: ProjectId, state: &ProjectSaleState) -> Self {
        Self {
            project_id,
            artist_id: state.artist_id.clone(),
            assigned: state.assigned,
            max_invocations: state.max_invocations(),
            invocations: state.invocations,
            max_has_been_invoked: state.max_has_been_invoked(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(artist: &str, max: u32, invocations: u32) -> ProjectInfo {
        ProjectInfo {
            artist_id: artist.parse().unwrap(),
            max_invocations: max,
            invocations,
        }
    }

    fn state(max: u32) -> ProjectSaleState {
        ProjectSaleState::new(info("artist.near", max, 0))
    }

    #[test]
    fn mintable_until_max_then_rollback_reopens() {
        let mut s = state(2);
        s.record_mint();
        s.record_mint();
        assert_eq!(s.check_mintable(1), Err(MinterError::MaxInvocationsReached(1)));
        s.rollback_mint();
        assert!(s.check_mintable(1).is_ok());
    }

    #[test]
    fn unassigned_is_not_mintable() {
        let mut s = state(2);
        s.assigned = false;
        assert_eq!(s.check_mintable(4), Err(MinterError::NotAssigned(4)));
    }

    #[test]
    fn reassignment_keeps_counters() {
        let mut s = state(5);
        s.record_mint();
        s.limit_max_invocations(1, 4).unwrap();
        s.assigned = false;
        s.assign(info("other.near", 6, 0));
        assert!(s.assigned);
        assert_eq!(s.invocations, 1);
        assert_eq!(s.max_invocations(), 4);
        assert_eq!(s.artist_id.as_str(), "other.near");
    }

    #[test]
    fn manual_limit_bounds() {
        let mut s = state(10);
        s.record_mint();
        s.record_mint();
        assert!(s.limit_max_invocations(1, 11).is_err());
        assert!(s.limit_max_invocations(1, 1).is_err());
        s.limit_max_invocations(1, 5).unwrap();
        assert_eq!(s.max_invocations(), 5);

        // Core lowering its maximum below the manual limit wins.
        s.sync(info("artist.near", 3, 0));
        assert_eq!(s.max_invocations(), 3);
    }

    #[test]
    fn starts_from_core_invocations() {
        let s = ProjectSaleState::new(info("artist.near", 5, 4));
        assert_eq!(s.invocations, 4);
        assert_eq!(ProjectSaleView::new(1, &s).max_invocations, 5);
        assert!(s.check_mintable(1).is_ok());

        let s = ProjectSaleState::new(info("artist.near", 5, 5));
        assert!(s.max_has_been_invoked());
        assert_eq!(s.check_mintable(1), Err(MinterError::MaxInvocationsReached(1)));
    }

    #[test]
    fn reassignment_adopts_mints_made_elsewhere() {
        let mut s = state(10);
        s.record_mint();
        s.assigned = false;
        s.assign(info("artist.near", 10, 7));
        assert_eq!(s.invocations, 7);

        // A pending local mint is not erased by a stale Core count.
        s.record_mint();
        s.sync(info("artist.near", 10, 7));
        assert_eq!(s.invocations, 8);
    }
}
