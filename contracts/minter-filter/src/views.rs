use crate::*;

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct ApprovedMinter {
    pub minter_id: AccountId,
    pub minter_type: String,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectMinter {
    pub project_id: ProjectId,
    pub minter_id: AccountId,
    pub minter_type: String,
}

#[near]
impl Contract {
    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_core_contract_id(&self) -> &AccountId {
        &self.core_contract_id
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }

    pub fn get_project(&self, project_id: ProjectId) -> Option<&ProjectInfo> {
        self.projects.get(&project_id)
    }

    pub fn is_approved_minter(&self, minter: AccountId) -> bool {
        self.approved_minters.contains_key(&minter)
    }

    pub fn is_assigned_minter(&self, project_id: ProjectId, minter: AccountId) -> bool {
        self.check_assigned_minter(&minter, project_id).is_ok()
    }

    pub fn project_has_minter(&self, project_id: ProjectId) -> bool {
        self.project_minters.contains_key(&project_id)
    }

    #[handle_result]
    pub fn get_minter_for_project(&self, project_id: ProjectId) -> Result<AccountId, MinterError> {
        self.project(project_id)?;
        self.project_minters
            .get(&project_id)
            .cloned()
            .ok_or(MinterError::NotAssigned(project_id))
    }

    pub fn get_minter_usage(&self, minter: AccountId) -> u32 {
        self.minter_usage(&minter)
    }

    pub fn get_num_approved_minters(&self) -> u32 {
        self.approved_minters.len()
    }

    pub fn get_approved_minters(
        &self,
        from_index: Option<u32>,
        limit: Option<u32>,
    ) -> Vec<ApprovedMinter> {
        let (skip, take) = page(from_index, limit);
        self.approved_minters
            .iter()
            .skip(skip)
            .take(take)
            .map(|(minter_id, minter_type)| ApprovedMinter {
                minter_id: minter_id.clone(),
                minter_type: minter_type.clone(),
            })
            .collect()
    }

    pub fn get_num_projects_with_minters(&self) -> u32 {
        self.project_minters.len()
    }

    pub fn get_project_minters(
        &self,
        from_index: Option<u32>,
        limit: Option<u32>,
    ) -> Vec<ProjectMinter> {
        let (skip, take) = page(from_index, limit);
        self.project_minters
            .iter()
            .skip(skip)
            .take(take)
            .map(|(project_id, minter_id)| ProjectMinter {
                project_id: *project_id,
                minter_id: minter_id.clone(),
                minter_type: self
                    .approved_minters
                    .get(minter_id)
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect()
    }
}

fn page(from_index: Option<u32>, limit: Option<u32>) -> (usize, usize) {
    let skip = from_index.unwrap_or(0) as usize;
    let take = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize;
    (skip, take)
}
