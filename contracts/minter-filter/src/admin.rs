use minter_common::events::MINTER_FILTER;
use near_sdk::serde_json;

use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, core_contract_id: AccountId) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            core_contract_id,
            projects: LookupMap::new(StorageKey::Projects),
            approved_minters: IterableMap::new(StorageKey::ApprovedMinters),
            project_minters: IterableMap::new(StorageKey::ProjectMinters),
            minter_usage: LookupMap::new(StorageKey::MinterUsage),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), MinterError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        AuthContext::new(&caller, &self.owner_id).require_admin()?;
        if new_owner == self.owner_id {
            return Err(MinterError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = std::mem::replace(&mut self.owner_id, new_owner);
        minter_common::events::emit_owner_transferred(MINTER_FILTER, &old_owner, &self.owner_id);
        Ok(())
    }

    /// Approval completes in `on_minter_type_resolved` once the minter has
    /// reported its type string.
    #[payable]
    #[handle_result]
    pub fn add_approved_minter(&mut self, minter: AccountId) -> Result<Promise, MinterError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        AuthContext::new(&caller, &self.owner_id).require_admin()?;
        if self.approved_minters.contains_key(&minter) {
            return Err(MinterError::AlreadyApproved(minter));
        }
        Ok(ext_filtered_minter::ext(minter.clone())
            .with_static_gas(GAS_FOR_MINTER_TYPE)
            .minter_type()
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(GAS_FOR_MINTER_TYPE_CALLBACK)
                    .on_minter_type_resolved(minter),
            ))
    }

    #[private]
    pub fn on_minter_type_resolved(&mut self, minter: AccountId) -> bool {
        let minter_type = if env::promise_results_count() == 1 {
            env::promise_result_checked(0, MAX_MINTER_TYPE_LEN)
                .ok()
                .and_then(|bytes| serde_json::from_slice::<String>(&bytes).ok())
        } else {
            None
        };
        self.resolve_minter_approval(minter, minter_type)
    }

    #[payable]
    #[handle_result]
    pub fn remove_approved_minter(&mut self, minter: AccountId) -> Result<(), MinterError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        AuthContext::new(&caller, &self.owner_id).require_admin()?;
        if !self.approved_minters.contains_key(&minter) {
            return Err(MinterError::NotApproved(minter));
        }
        if self.minter_usage(&minter) > 0 {
            return Err(MinterError::OnlyUnused(minter));
        }
        self.approved_minters.remove(&minter);
        events::emit_minter_revoked(&caller, &minter);
        Ok(())
    }
}

impl Contract {
    pub(crate) fn resolve_minter_approval(
        &mut self,
        minter: AccountId,
        minter_type: Option<String>,
    ) -> bool {
        let minter_type = match minter_type {
            Some(t) if !t.is_empty() => t,
            _ => {
                events::emit_minter_approval_failed(&self.owner_id, &minter);
                return false;
            }
        };
        // A second approval may have resolved first.
        if self.approved_minters.contains_key(&minter) {
            return false;
        }
        events::emit_minter_approved(&self.owner_id, &minter, &minter_type);
        self.approved_minters.insert(minter, minter_type);
        true
    }
}
