use near_sdk::{AccountId, NearToken, env};

use crate::MinterError;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

/// Who is calling, relative to the contract admin and the project's artist.
///
/// Built from local state at the start of each call and handed to the checks
/// explicitly instead of looking permissions up from a shared singleton.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext<'a> {
    pub caller: &'a AccountId,
    pub admin: &'a AccountId,
    pub artist: Option<&'a AccountId>,
}

impl<'a> AuthContext<'a> {
    pub fn new(caller: &'a AccountId, admin: &'a AccountId) -> Self {
        Self {
            caller,
            admin,
            artist: None,
        }
    }

    pub fn with_artist(mut self, artist: Option<&'a AccountId>) -> Self {
        self.artist = artist;
        self
    }

    pub fn is_admin(&self) -> bool {
        self.caller == self.admin
    }

    pub fn is_artist(&self) -> bool {
        self.artist.is_some_and(|artist| artist == self.caller)
    }

    pub fn require_admin(&self) -> Result<(), MinterError> {
        if !self.is_admin() {
            return Err(MinterError::only("admin"));
        }
        Ok(())
    }

    pub fn require_admin_or_artist(&self) -> Result<(), MinterError> {
        if !self.is_admin() && !self.is_artist() {
            return Err(MinterError::only("admin or artist"));
        }
        Ok(())
    }

    pub fn require_artist(&self) -> Result<(), MinterError> {
        if !self.is_artist() {
            return Err(MinterError::only("artist"));
        }
        Ok(())
    }
}

/// Cross-contract entry points accept exactly one caller.
pub fn require_predecessor(expected: &AccountId, role: &str) -> Result<(), MinterError> {
    if env::predecessor_account_id() != *expected {
        return Err(MinterError::only(role));
    }
    Ok(())
}

pub fn check_one_yocto() -> Result<(), MinterError> {
    if env::attached_deposit() != ONE_YOCTO {
        return Err(MinterError::InvalidInput(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}
