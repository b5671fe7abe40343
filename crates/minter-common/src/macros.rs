/// Expands what every minter behind the filter shares: the project hooks the
/// filter calls, ownership transfer, and the per-project lookups behind
/// authorization. `$contract` needs `owner_id` and `minter_filter_id`
/// account fields and a `projects` map of `ProjectSaleState`.
#[macro_export]
macro_rules! impl_filtered_minter {
    ($contract:ident) => {
        #[::near_sdk::near]
        impl $contract {
            #[payable]
            #[handle_result]
            pub fn transfer_ownership(
                &mut self,
                new_owner: ::near_sdk::AccountId,
            ) -> Result<(), $crate::MinterError> {
                $crate::check_one_yocto()?;
                let caller = ::near_sdk::env::predecessor_account_id();
                $crate::AuthContext::new(&caller, &self.owner_id).require_admin()?;
                if new_owner == self.owner_id {
                    return Err($crate::MinterError::InvalidInput(
                        "New owner must differ from current owner".to_string(),
                    ));
                }
                let old_owner = ::std::mem::replace(&mut self.owner_id, new_owner);
                $crate::events::emit_owner_transferred(
                    $crate::events::MINTER_CONFIG,
                    &old_owner,
                    &self.owner_id,
                );
                Ok(())
            }

            #[handle_result]
            pub fn on_project_assigned(
                &mut self,
                project_id: $crate::ProjectId,
                info: $crate::ProjectInfo,
            ) -> Result<(), $crate::MinterError> {
                $crate::require_predecessor(&self.minter_filter_id, "minter filter")?;
                match self.projects.get_mut(&project_id) {
                    Some(state) => state.assign(info),
                    None => {
                        self.projects
                            .insert(project_id, $crate::ProjectSaleState::new(info));
                    }
                }
                Ok(())
            }

            #[handle_result]
            pub fn on_project_unassigned(
                &mut self,
                project_id: $crate::ProjectId,
            ) -> Result<(), $crate::MinterError> {
                $crate::require_predecessor(&self.minter_filter_id, "minter filter")?;
                if let Some(state) = self.projects.get_mut(&project_id) {
                    state.assigned = false;
                }
                Ok(())
            }

            #[handle_result]
            pub fn on_project_updated(
                &mut self,
                project_id: $crate::ProjectId,
                info: $crate::ProjectInfo,
            ) -> Result<(), $crate::MinterError> {
                $crate::require_predecessor(&self.minter_filter_id, "minter filter")?;
                if let Some(state) = self.projects.get_mut(&project_id) {
                    state.sync(info);
                }
                Ok(())
            }
        }

        impl $contract {
            pub(crate) fn sale_state(
                &self,
                project_id: $crate::ProjectId,
            ) -> Result<&$crate::ProjectSaleState, $crate::MinterError> {
                self.projects
                    .get(&project_id)
                    .ok_or($crate::MinterError::NotAssigned(project_id))
            }

            pub(crate) fn auth<'a>(
                &'a self,
                caller: &'a ::near_sdk::AccountId,
                project_id: $crate::ProjectId,
            ) -> Result<$crate::AuthContext<'a>, $crate::MinterError> {
                let state = self.sale_state(project_id)?;
                Ok($crate::AuthContext::new(caller, &self.owner_id)
                    .with_artist(Some(&state.artist_id)))
            }

            /// Artist check plus the cap update every minter applies; callers
            /// add their own preconditions before it.
            pub(crate) fn limit_project_max_invocations(
                &mut self,
                project_id: $crate::ProjectId,
                max_invocations: u32,
            ) -> Result<(), $crate::MinterError> {
                let caller = ::near_sdk::env::predecessor_account_id();
                self.auth(&caller, project_id)?.require_artist()?;
                let state = self
                    .projects
                    .get_mut(&project_id)
                    .ok_or($crate::MinterError::NotAssigned(project_id))?;
                state.limit_max_invocations(project_id, max_invocations)?;
                $crate::events::emit_project_max_invocations_limited(
                    &caller,
                    project_id,
                    max_invocations,
                );
                Ok(())
            }
        }
    };
}

/// Artist-only `manually_limit_project_max_invocations` for minters with no
/// extra constraint on lowering the cap.
#[macro_export]
macro_rules! impl_manual_invocation_limit {
    ($contract:ident) => {
        #[::near_sdk::near]
        impl $contract {
            #[handle_result]
            pub fn manually_limit_project_max_invocations(
                &mut self,
                project_id: $crate::ProjectId,
                max_invocations: u32,
            ) -> Result<(), $crate::MinterError> {
                self.limit_project_max_invocations(project_id, max_invocations)
            }
        }
    };
}
