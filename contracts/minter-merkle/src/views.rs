use crate::allowlist::{hash_account, parse_proof};
use crate::*;

#[near]
impl Contract {
    pub fn minter_type(&self) -> String {
        MINTER_TYPE.to_string()
    }

    pub fn minter_version(&self) -> String {
        self.version.clone()
    }

    pub fn minter_filter_id(&self) -> &AccountId {
        &self.minter_filter_id
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_price_info(&self, project_id: ProjectId) -> PriceInfo {
        self.prices
            .get(&project_id)
            .map_or_else(PriceInfo::unconfigured, |price| PriceInfo::configured(*price))
    }

    pub fn get_merkle_root(&self, project_id: ProjectId) -> Option<String> {
        self.merkle_roots.get(&project_id).map(hex::encode)
    }

    pub fn get_project_invocations_per_address(&self, project_id: ProjectId) -> u32 {
        self.max_invocations_per_address(project_id)
    }

    pub fn get_project_user_mint_invocations(&self, project_id: ProjectId, account: AccountId) -> u32 {
        self.user_mints(project_id, &account)
    }

    /// Hex-encoded leaf for `account`, for building allowlist trees off-chain.
    pub fn hash_address(&self, account: AccountId) -> String {
        hex::encode(hash_account(&account))
    }

    /// False for malformed proofs and for projects without a root.
    pub fn verify_address(&self, project_id: ProjectId, account: AccountId, proof: Vec<String>) -> bool {
        parse_proof(&proof)
            .and_then(|proof| self.verify_account(project_id, &account, &proof))
            .unwrap_or(false)
    }

    pub fn get_project_sale_state(&self, project_id: ProjectId) -> Option<ProjectSaleView> {
        self.projects
            .get(&project_id)
            .map(|state| ProjectSaleView::new(project_id, state))
    }
}
