use crate::*;

// Core pushes project data here; the assigned minter receives a copy.
#[near]
impl Contract {
    #[handle_result]
    pub fn register_project(
        &mut self,
        project_id: ProjectId,
        info: ProjectInfo,
    ) -> Result<(), MinterError> {
        self.check_core_caller()?;
        if self.projects.contains_key(&project_id) {
            return Err(MinterError::InvalidState(format!(
                "Project {} is already registered",
                project_id
            )));
        }
        events::emit_project_registered(&self.core_contract_id, project_id, &info);
        self.projects.insert(project_id, info);
        Ok(())
    }

    #[handle_result]
    pub fn update_project(
        &mut self,
        project_id: ProjectId,
        info: ProjectInfo,
    ) -> Result<(), MinterError> {
        self.check_core_caller()?;
        if !self.projects.contains_key(&project_id) {
            return Err(MinterError::NoSuchProject(project_id));
        }
        events::emit_project_updated(&self.core_contract_id, project_id, &info);
        if let Some(minter) = self.project_minters.get(&project_id) {
            let _ = ext_filtered_minter::ext(minter.clone())
                .with_static_gas(GAS_FOR_PROJECT_SYNC)
                .on_project_updated(project_id, info.clone());
        }
        self.projects.insert(project_id, info);
        Ok(())
    }
}

impl Contract {
    fn check_core_caller(&self) -> Result<(), MinterError> {
        require_predecessor(&self.core_contract_id, "core contract")
    }

    pub(crate) fn project(&self, project_id: ProjectId) -> Result<&ProjectInfo, MinterError> {
        self.projects
            .get(&project_id)
            .ok_or(MinterError::NoSuchProject(project_id))
    }
}
