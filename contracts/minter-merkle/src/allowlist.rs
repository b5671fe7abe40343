use minter_math::verify_proof;

use crate::*;

/// Leaf committed to in the allowlist tree for `account`.
pub fn hash_account(account: &AccountId) -> Hash32 {
    env::keccak256_array(account.as_bytes())
}

pub(crate) fn parse_hash(value: &str) -> Result<Hash32, MinterError> {
    let bytes = hex::decode(value.trim_start_matches("0x"))
        .map_err(|e| MinterError::InvalidInput(format!("Invalid hex '{}': {}", value, e)))?;
    bytes
        .try_into()
        .map_err(|_| MinterError::InvalidInput(format!("Expected 32 bytes, got '{}'", value)))
}

pub(crate) fn parse_proof(proof: &[String]) -> Result<Vec<Hash32>, MinterError> {
    if proof.len() > MAX_PROOF_DEPTH {
        return Err(MinterError::InvalidInput(format!(
            "Proof has {} nodes, maximum is {}",
            proof.len(),
            MAX_PROOF_DEPTH
        )));
    }
    proof.iter().map(|node| parse_hash(node)).collect()
}

impl Contract {
    pub(crate) fn verify_account(
        &self,
        project_id: ProjectId,
        account: &AccountId,
        proof: &[Hash32],
    ) -> Result<bool, MinterError> {
        let root = self
            .merkle_roots
            .get(&project_id)
            .ok_or(MinterError::NotConfigured(project_id))?;
        Ok(verify_proof(proof, root, hash_account(account), |bytes| {
            env::keccak256_array(bytes)
        }))
    }

    pub(crate) fn max_invocations_per_address(&self, project_id: ProjectId) -> u32 {
        self.invocations_per_address
            .get(&project_id)
            .copied()
            .unwrap_or(DEFAULT_INVOCATIONS_PER_ADDRESS)
    }

    pub(crate) fn user_mints(&self, project_id: ProjectId, account: &AccountId) -> u32 {
        self.user_mint_invocations
            .get(&(project_id, account.clone()))
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn check_address_limit(
        &self,
        project_id: ProjectId,
        account: &AccountId,
    ) -> Result<(), MinterError> {
        let limit = self.max_invocations_per_address(project_id);
        if limit != 0 && self.user_mints(project_id, account) >= limit {
            return Err(MinterError::AddressLimitReached(project_id));
        }
        Ok(())
    }

    pub(crate) fn record_user_mint(&mut self, project_id: ProjectId, account: &AccountId) {
        let count = self.user_mints(project_id, account) + 1;
        self.user_mint_invocations
            .insert((project_id, account.clone()), count);
    }

    pub(crate) fn rollback_user_mint(&mut self, project_id: ProjectId, account: &AccountId) {
        match self.user_mints(project_id, account) {
            0 => {}
            1 => {
                self.user_mint_invocations.remove(&(project_id, account.clone()));
            }
            count => {
                self.user_mint_invocations
                    .insert((project_id, account.clone()), count - 1);
            }
        }
    }
}
