use std::collections::HashSet;

use crate::*;

#[near]
impl Contract {
    /// Assigns `minter` to the project, replacing any previous assignment.
    /// Callable by the admin or the project's artist.
    #[handle_result]
    pub fn set_minter_for_project(
        &mut self,
        project_id: ProjectId,
        minter: AccountId,
    ) -> Result<(), MinterError> {
        let caller = env::predecessor_account_id();
        let info = self.project(project_id)?.clone();
        AuthContext::new(&caller, &self.owner_id)
            .with_artist(Some(&info.artist_id))
            .require_admin_or_artist()?;
        let minter_type = self
            .approved_minters
            .get(&minter)
            .cloned()
            .ok_or_else(|| MinterError::NotApproved(minter.clone()))?;

        let previous = self.project_minters.insert(project_id, minter.clone());
        match &previous {
            Some(old) if *old == minter => {}
            Some(old) => {
                self.decrement_usage(old);
                self.increment_usage(&minter);
            }
            None => self.increment_usage(&minter),
        }
        events::emit_project_minter_registered(&caller, project_id, &minter, &minter_type);

        if let Some(old) = previous.filter(|old| *old != minter) {
            let _ = ext_filtered_minter::ext(old)
                .with_static_gas(GAS_FOR_PROJECT_SYNC)
                .on_project_unassigned(project_id);
        }
        let _ = ext_filtered_minter::ext(minter)
            .with_static_gas(GAS_FOR_PROJECT_SYNC)
            .on_project_assigned(project_id, info);
        Ok(())
    }

    #[handle_result]
    pub fn remove_minter_for_project(&mut self, project_id: ProjectId) -> Result<(), MinterError> {
        let caller = env::predecessor_account_id();
        let info = self.project(project_id)?;
        AuthContext::new(&caller, &self.owner_id)
            .with_artist(Some(&info.artist_id))
            .require_admin_or_artist()?;
        if !self.project_minters.contains_key(&project_id) {
            return Err(MinterError::NotAssigned(project_id));
        }
        self.unassign(&caller, project_id);
        Ok(())
    }

    /// Admin-only. Either every listed project loses its minter or none does.
    #[payable]
    #[handle_result]
    pub fn remove_minters_for_projects(
        &mut self,
        project_ids: Vec<ProjectId>,
    ) -> Result<(), MinterError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        AuthContext::new(&caller, &self.owner_id).require_admin()?;
        if project_ids.is_empty() || project_ids.len() > MAX_BULK_REMOVALS {
            return Err(MinterError::InvalidInput(format!(
                "Expected between 1 and {} project ids, got {}",
                MAX_BULK_REMOVALS,
                project_ids.len()
            )));
        }
        let mut seen = HashSet::with_capacity(project_ids.len());
        for project_id in &project_ids {
            if !seen.insert(*project_id) {
                return Err(MinterError::DuplicateProject(*project_id));
            }
            if !self.project_minters.contains_key(project_id) {
                return Err(MinterError::NotAssigned(*project_id));
            }
        }
        for project_id in project_ids {
            self.unassign(&caller, project_id);
        }
        Ok(())
    }
}

impl Contract {
    pub(crate) fn minter_usage(&self, minter: &AccountId) -> u32 {
        self.minter_usage.get(minter).copied().unwrap_or(0)
    }

    fn increment_usage(&mut self, minter: &AccountId) {
        let count = self.minter_usage(minter) + 1;
        self.minter_usage.insert(minter.clone(), count);
    }

    fn decrement_usage(&mut self, minter: &AccountId) {
        match self.minter_usage(minter) {
            0 | 1 => {
                self.minter_usage.remove(minter);
            }
            count => {
                self.minter_usage.insert(minter.clone(), count - 1);
            }
        }
    }

    fn unassign(&mut self, caller: &AccountId, project_id: ProjectId) {
        let Some(minter) = self.project_minters.remove(&project_id) else {
            return;
        };
        self.decrement_usage(&minter);
        events::emit_project_minter_removed(caller, project_id, &minter);
        let _ = ext_filtered_minter::ext(minter)
            .with_static_gas(GAS_FOR_PROJECT_SYNC)
            .on_project_unassigned(project_id);
    }
}
